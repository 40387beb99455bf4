use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use sketchboard::config::Config;
use sketchboard::draw::Color;
use sketchboard::input::{InputState, Key, MouseButton, ShapeKind, Tool};

#[derive(Parser, Debug)]
#[command(name = "sketchboard")]
#[command(
    version,
    about = "Interactive sketching canvas with shape tools, text annotations, and undo history"
)]
struct Cli {
    /// Canvas width in pixels (overrides the config file)
    #[arg(long, value_name = "PX")]
    width: Option<u32>,

    /// Canvas height in pixels (overrides the config file)
    #[arg(long, value_name = "PX")]
    height: Option<u32>,

    /// Write the rendered demo canvas to this PNG file
    #[arg(long, short = 'o', value_name = "FILE")]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = Config::load()?;

    let width = cli.width.unwrap_or(config.surface.width).max(1);
    let height = cli.height.unwrap_or(config.surface.height).max(1);

    let mut state = InputState::with_defaults(
        config.initial_tool(),
        config.drawing.default_color.to_color(),
        config.drawing.default_stroke_width,
        config.font_descriptor(),
    );
    state.update_surface_size(width, height);

    run_demo_session(&mut state, width as i32, height as i32);

    let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width as i32, height as i32)
        .context("Failed to create image surface")?;
    let ctx = cairo::Context::new(&surface).context("Failed to create Cairo context")?;
    state.render_scene(&ctx);
    drop(ctx);

    println!(
        "Rendered {} shapes ({} snapshots, undo: {}, redo: {}) on a {}x{} canvas",
        state.working.shapes.len(),
        state.history.len(),
        state.can_undo(),
        state.can_redo(),
        width,
        height
    );

    if let Some(path) = cli.output {
        let mut file = File::create(&path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        surface
            .write_to_png(&mut file)
            .with_context(|| format!("Failed to write PNG to {}", path.display()))?;
        println!("Saved canvas to {}", path.display());
    }

    Ok(())
}

/// Replays a short scripted drawing session so the binary exercises the
/// whole pipeline: every tool, the eraser, and an undo/redo round trip.
fn run_demo_session(state: &mut InputState, width: i32, height: i32) {
    let (w, h) = (width.max(200), height.max(200));

    // Freehand squiggle across the upper left quadrant.
    state.set_tool(Tool::Pen);
    state.on_pointer_down(MouseButton::Left, w / 10, h / 10);
    for i in 1..=8 {
        let x = w / 10 + i * w / 40;
        let y = h / 10 + ((i % 2) * h) / 30;
        state.on_pointer_move(x, y);
    }
    state.on_pointer_up(MouseButton::Left);

    // Filled-less rectangle dragged up-left, exercising negative extents.
    state.set_tool(Tool::Shape(ShapeKind::Rect));
    state.set_color(Color::from_hex("#1e66f5").unwrap_or(sketchboard::draw::color::BLUE));
    state.on_pointer_down(MouseButton::Left, w / 2, h / 2);
    state.on_pointer_move(w / 3, h / 3);
    state.on_pointer_up(MouseButton::Left);

    // Circle and arrow in the lower half.
    state.set_tool(Tool::Shape(ShapeKind::Circle));
    state.on_pointer_down(MouseButton::Left, w / 8, h / 2);
    state.on_pointer_move(w / 8 + w / 6, h / 2 + h / 6);
    state.on_pointer_up(MouseButton::Left);

    state.set_tool(Tool::Shape(ShapeKind::Arrow));
    state.on_pointer_down(MouseButton::Left, w / 2, (h * 3) / 4);
    state.on_pointer_move(w / 2 + w / 4, (h * 3) / 4 + h / 10);
    state.on_pointer_up(MouseButton::Left);

    // Text annotation.
    state.set_tool(Tool::Text);
    state.on_pointer_down(MouseButton::Left, w / 10, (h * 9) / 10);
    for c in "sketchboard".chars() {
        state.on_key_press(Key::Char(c));
    }
    state.on_key_press(Key::Return);

    // A throwaway stroke, erased again right after.
    state.set_tool(Tool::Pen);
    state.on_pointer_down(MouseButton::Left, (w * 9) / 10, h / 10);
    state.on_pointer_move((w * 9) / 10 + 10, h / 10 + 10);
    state.on_pointer_up(MouseButton::Left);
    state.set_tool(Tool::Eraser);
    state.on_pointer_down(MouseButton::Left, (w * 9) / 10, h / 10);
    state.on_pointer_up(MouseButton::Left);

    // Undo past the erase, then settle on the erased state again.
    state.undo();
    state.redo();

    log::info!(
        "Demo session done: {} shapes live, {} snapshots",
        state.working.shapes.len(),
        state.history.len()
    );
}
