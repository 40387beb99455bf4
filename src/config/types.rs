//! Configuration type definitions.

use super::enums::ColorSpec;
use serde::{Deserialize, Serialize};

/// Drawing-related settings.
///
/// Controls the tool and style selection a session starts with. Users
/// change these values at runtime through the toolbar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawingConfig {
    /// Tool selected at startup, by toolbar id: `pen`, `eraser`, `text`,
    /// `shape-rectangle`, `shape-circle`, or `shape-arrow`
    #[serde(default = "default_tool")]
    pub default_tool: String,

    /// Default stroke color - a named color (red, green, blue, yellow,
    /// orange, pink, white, black), a hex string like `"#336699"`, or an
    /// RGB array like `[255, 0, 0]`
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Default stroke width in pixels (valid range: 1 - 20)
    #[serde(default = "default_stroke_width")]
    pub default_stroke_width: u32,

    /// Font family name for text annotations (e.g., "Sans", "Monospace")
    /// Falls back to "Sans" if the specified font is not available
    #[serde(default = "default_font_family")]
    pub font_family: String,

    /// Font weight (e.g., "normal", "bold", "light", 400, 700)
    #[serde(default = "default_font_weight")]
    pub font_weight: String,

    /// Font style (e.g., "normal", "italic", "oblique")
    #[serde(default = "default_font_style")]
    pub font_style: String,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_tool: default_tool(),
            default_color: default_color(),
            default_stroke_width: default_stroke_width(),
            font_family: default_font_family(),
            font_weight: default_font_weight(),
            font_style: default_font_style(),
        }
    }
}

/// Drawing surface settings used by headless hosts.
///
/// Windowed hosts size the surface themselves and ignore this section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceConfig {
    /// Canvas width in pixels
    #[serde(default = "default_surface_width")]
    pub width: u32,

    /// Canvas height in pixels
    #[serde(default = "default_surface_height")]
    pub height: u32,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: default_surface_width(),
            height: default_surface_height(),
        }
    }
}

fn default_tool() -> String {
    "pen".to_string()
}

fn default_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_stroke_width() -> u32 {
    3
}

fn default_font_family() -> String {
    "Sans".to_string()
}

fn default_font_weight() -> String {
    "normal".to_string()
}

fn default_font_style() -> String {
    "normal".to_string()
}

fn default_surface_width() -> u32 {
    1280
}

fn default_surface_height() -> u32 {
    720
}
