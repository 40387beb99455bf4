//! Configuration enum types.

use crate::draw::{Color, color::*};
use log::warn;
use serde::{Deserialize, Serialize};

/// Color specification - a named color, a hex string, or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// default_color = "red"
///
/// # Hex string, as sent by color pickers
/// default_color = "#1e66f5"
///
/// # Custom RGB color (0-255 per component)
/// default_color = [255, 128, 0]  # Orange
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color (red, green, blue, yellow, orange, pink, white, black)
    /// or a `#`-prefixed hex string
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`].
    ///
    /// Strings starting with `#` are parsed as hex; other strings go
    /// through the named-color lookup. Unknown names and malformed hex
    /// default to black with a warning. RGB arrays are converted from the
    /// 0-255 range with full opacity.
    pub fn to_color(&self) -> Color {
        match self {
            ColorSpec::Name(name) if name.starts_with('#') => {
                Color::from_hex(name).unwrap_or_else(|err| {
                    warn!("Invalid hex color '{name}' ({err}), using black");
                    BLACK
                })
            }
            ColorSpec::Name(name) => name_to_color(name).unwrap_or_else(|| {
                warn!("Unknown color '{name}', using black");
                BLACK
            }),
            ColorSpec::Rgb([r, g, b]) => Color {
                r: *r as f64 / 255.0,
                g: *g as f64 / 255.0,
                b: *b as f64 / 255.0,
                a: 1.0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_hex_and_rgb_specs_resolve() {
        assert_eq!(ColorSpec::Name("red".to_string()).to_color(), RED);
        assert_eq!(ColorSpec::Name("#00ff00".to_string()).to_color(), GREEN);
        assert_eq!(ColorSpec::Rgb([0, 0, 255]).to_color(), BLUE);
    }

    #[test]
    fn unknown_specs_fall_back_to_black() {
        assert_eq!(ColorSpec::Name("mauve".to_string()).to_color(), BLACK);
        assert_eq!(ColorSpec::Name("#zzz".to_string()).to_color(), BLACK);
    }
}
