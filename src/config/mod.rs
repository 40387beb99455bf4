//! Configuration file support for sketchboard.
//!
//! This module handles loading and validating user settings from the
//! configuration file located at `~/.config/sketchboard/config.toml`.
//! Settings include drawing defaults (tool, color, stroke width, font) and
//! the surface size used by headless hosts.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{DrawingConfig, SurfaceConfig};

use crate::draw::FontDescriptor;
use crate::input::{MAX_STROKE_WIDTH, MIN_STROKE_WIDTH, Tool};
use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// This is the root type deserialized from the TOML file. All fields have
/// sensible defaults and use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_tool = "pen"
/// default_color = "#336699"
/// default_stroke_width = 3
/// font_family = "Sans"
///
/// [surface]
/// width = 1280
/// height = 720
/// ```
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Drawing tool defaults (tool, color, stroke width, font)
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Surface dimensions for headless hosts
    #[serde(default)]
    pub surface: SurfaceConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped or replaced with defaults and a warning
    /// is logged, so a hand-edited config file cannot wedge the session.
    ///
    /// Validated ranges:
    /// - `default_stroke_width`: 1 - 20
    /// - `default_tool`: one of the known toolbar ids
    /// - `font_weight` / `font_style`: names Pango understands
    /// - `surface` dimensions: at least 1 pixel each
    fn validate_and_clamp(&mut self) {
        if !(MIN_STROKE_WIDTH..=MAX_STROKE_WIDTH).contains(&self.drawing.default_stroke_width) {
            log::warn!(
                "Invalid default_stroke_width {}, clamping to {}-{} range",
                self.drawing.default_stroke_width,
                MIN_STROKE_WIDTH,
                MAX_STROKE_WIDTH
            );
            self.drawing.default_stroke_width = self
                .drawing
                .default_stroke_width
                .clamp(MIN_STROKE_WIDTH, MAX_STROKE_WIDTH);
        }

        if self.drawing.default_tool.parse::<Tool>().is_err() {
            log::warn!(
                "Unknown default_tool '{}', falling back to 'pen'",
                self.drawing.default_tool
            );
            self.drawing.default_tool = "pen".to_string();
        }

        let valid_weight = matches!(
            self.drawing.font_weight.to_lowercase().as_str(),
            "normal" | "bold" | "light" | "ultralight" | "heavy" | "ultrabold"
        ) || self
            .drawing
            .font_weight
            .parse::<u32>()
            .is_ok_and(|w| (100..=900).contains(&w));

        if !valid_weight {
            log::warn!(
                "Invalid font_weight '{}', falling back to 'normal'",
                self.drawing.font_weight
            );
            self.drawing.font_weight = "normal".to_string();
        }

        if !matches!(
            self.drawing.font_style.to_lowercase().as_str(),
            "normal" | "italic" | "oblique"
        ) {
            log::warn!(
                "Invalid font_style '{}', falling back to 'normal'",
                self.drawing.font_style
            );
            self.drawing.font_style = "normal".to_string();
        }

        if self.surface.width == 0 || self.surface.height == 0 {
            log::warn!(
                "Invalid surface size {}x{}, falling back to defaults",
                self.surface.width,
                self.surface.height
            );
            self.surface = SurfaceConfig::default();
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/sketchboard/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined
    /// (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("sketchboard");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from file, or returns defaults if not found.
    ///
    /// All loaded values are validated and clamped to acceptable ranges.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = match Self::get_config_path() {
            Ok(path) => path,
            Err(err) => {
                debug!("No config directory available ({err}), using defaults");
                return Ok(Self::default());
            }
        };

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from_path(&config_path)
    }

    /// Loads and validates configuration from an explicit path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// The tool the session starts with.
    ///
    /// `validate_and_clamp` already replaced unknown ids, so this cannot
    /// fail after a load; defaults fall back to the pen regardless.
    pub fn initial_tool(&self) -> Tool {
        self.drawing.default_tool.parse().unwrap_or(Tool::Pen)
    }

    /// Font descriptor assembled from the drawing section.
    pub fn font_descriptor(&self) -> FontDescriptor {
        FontDescriptor::new(
            self.drawing.font_family.clone(),
            self.drawing.font_weight.clone(),
            self.drawing.font_style.clone(),
        )
    }
}
