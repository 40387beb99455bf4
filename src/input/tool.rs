//! Drawing tool selection.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Kind of box shape created by the shape tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    /// Axis-aligned rectangle
    Rect,
    /// Circle inscribed in the dragged box
    Circle,
    /// Arrow drawn inside the dragged box
    Arrow,
}

/// Drawing tool selection.
///
/// The active tool determines what a pointer press does: create a shape,
/// erase shapes under the cursor, or start text entry. Tools are chosen by
/// the toolbar and identified on that boundary by their string id
/// (`pen`, `eraser`, `text`, `shape-rectangle`, `shape-circle`,
/// `shape-arrow`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    /// Freehand drawing - follows the pointer path (default)
    Pen,
    /// Removes every shape under the click point
    Eraser,
    /// Places a text annotation via the text-entry sub-state
    Text,
    /// Drags out a box shape of the given kind
    Shape(ShapeKind),
}

/// Error returned when a toolbar id does not name a known tool.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown tool id '{0}'")]
pub struct ToolParseError(pub String);

impl FromStr for Tool {
    type Err = ToolParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pen" => Ok(Tool::Pen),
            "eraser" => Ok(Tool::Eraser),
            "text" => Ok(Tool::Text),
            "shape-rectangle" => Ok(Tool::Shape(ShapeKind::Rect)),
            "shape-circle" => Ok(Tool::Shape(ShapeKind::Circle)),
            "shape-arrow" => Ok(Tool::Shape(ShapeKind::Arrow)),
            _ => Err(ToolParseError(s.to_string())),
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = match self {
            Tool::Pen => "pen",
            Tool::Eraser => "eraser",
            Tool::Text => "text",
            Tool::Shape(ShapeKind::Rect) => "shape-rectangle",
            Tool::Shape(ShapeKind::Circle) => "shape-circle",
            Tool::Shape(ShapeKind::Arrow) => "shape-arrow",
        };
        f.write_str(id)
    }
}
