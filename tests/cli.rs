use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn sketchboard_cmd() -> Command {
    Command::cargo_bin("sketchboard").expect("binary exists")
}

#[test]
fn help_prints_usage() {
    sketchboard_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Interactive sketching canvas with shape tools",
        ));
}

#[test]
fn demo_run_reports_canvas_summary() {
    let temp = TempDir::new().unwrap();
    sketchboard_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .args(["--width", "320", "--height", "240"])
        .assert()
        .success()
        .stdout(predicate::str::contains("320x240 canvas"));
}

#[test]
fn demo_run_writes_png() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("canvas.png");
    sketchboard_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .args(["--width", "320", "--height", "240", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved canvas to"));
    assert!(out.exists());
    assert!(out.metadata().unwrap().len() > 0);
}

#[test]
fn config_file_defaults_are_honored() {
    let temp = TempDir::new().unwrap();
    let config_dir = temp.path().join("sketchboard");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        "[surface]\nwidth = 200\nheight = 100\n",
    )
    .unwrap();

    sketchboard_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("200x100 canvas"));
}
