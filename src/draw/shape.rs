//! Shape definitions for the sketching canvas.

use super::color::Color;
use crate::util;
use serde::{Deserialize, Serialize};

/// Identity of a shape within a drawing session.
///
/// Ids come from a monotonic per-session counter owned by the input
/// interpreter, so two shapes created in the same event tick never collide
/// and creation order breaks ties.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ShapeId(pub u64);

/// Extra reach added to a pen stroke's width when the eraser tests it.
const ERASE_PADDING: f64 = 10.0;

/// Represents a drawable shape or annotation on the canvas.
///
/// Each variant represents a different drawing tool/primitive with its
/// specific parameters. All shapes store their own color and size
/// information for independent rendering.
///
/// Box shapes (`Rect`, `Circle`, `Arrow`) keep the drag anchor at `(x, y)`
/// and signed `width`/`height` offsets; a drag up or left of the anchor
/// leaves them negative. They are normalized only at render and hit-test
/// time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    /// Freehand drawing - polyline connecting pointer drag points
    Pen {
        id: ShapeId,
        /// Sequence of (x, y) coordinates traced by the pointer, capture
        /// order, never empty
        points: Vec<(i32, i32)>,
        /// Stroke color
        color: Color,
        /// Line thickness in pixels (1-20)
        stroke_width: u32,
    },
    /// Axis-aligned rectangle dragged from corner to corner
    Rect {
        id: ShapeId,
        /// Drag anchor X coordinate
        x: i32,
        /// Drag anchor Y coordinate
        y: i32,
        /// Signed horizontal extent from the anchor
        width: i32,
        /// Signed vertical extent from the anchor
        height: i32,
        /// Border color
        color: Color,
        /// Border thickness in pixels (1-20)
        stroke_width: u32,
        /// Interior fill; `None` leaves the shape unfilled
        fill_color: Option<Color>,
        /// Rotation in degrees about the box center
        rotation: f64,
    },
    /// Circle inscribed in a dragged bounding box
    Circle {
        id: ShapeId,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        color: Color,
        stroke_width: u32,
        fill_color: Option<Color>,
        rotation: f64,
    },
    /// Arrow drawn inside a dragged bounding box, shaft left-to-right
    Arrow {
        id: ShapeId,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        color: Color,
        stroke_width: u32,
        /// Present for uniformity with the other box shapes; arrows are
        /// never filled
        fill_color: Option<Color>,
        rotation: f64,
    },
    /// Text annotation anchored at its baseline start
    Text {
        id: ShapeId,
        /// Text content to display, non-empty once committed
        text: String,
        /// Baseline X coordinate
        x: i32,
        /// Baseline Y coordinate
        y: i32,
        /// Text color
        color: Color,
        /// Font size in points
        font_size: f64,
    },
}

impl Shape {
    /// Returns this shape's session-unique id.
    pub fn id(&self) -> ShapeId {
        match self {
            Shape::Pen { id, .. }
            | Shape::Rect { id, .. }
            | Shape::Circle { id, .. }
            | Shape::Arrow { id, .. }
            | Shape::Text { id, .. } => *id,
        }
    }

    /// Hit test used by the eraser tool.
    ///
    /// Pen strokes are hit when the click lands within `stroke_width` plus
    /// a fixed padding of the first endpoint of any consecutive point pair.
    /// This is a deliberate point-to-endpoint approximation of segment
    /// distance; a stroke with a single point has no pair and is never hit.
    /// Box shapes are hit anywhere inside their normalized, unrotated
    /// bounding box. Text is anchored by a baseline point only and has no
    /// stored extent, so the eraser never removes it.
    pub fn hits(&self, px: i32, py: i32) -> bool {
        match self {
            Shape::Pen {
                points,
                stroke_width,
                ..
            } => {
                let reach = *stroke_width as f64 + ERASE_PADDING;
                points
                    .windows(2)
                    .any(|pair| util::point_distance(pair[0], (px, py)) < reach)
            }
            Shape::Rect {
                x,
                y,
                width,
                height,
                ..
            }
            | Shape::Circle {
                x,
                y,
                width,
                height,
                ..
            }
            | Shape::Arrow {
                x,
                y,
                width,
                height,
                ..
            } => util::box_contains(*x, *y, *width, *height, px, py),
            Shape::Text { .. } => false,
        }
    }
}
