//! Frame container for managing collections of shapes.

use super::shape::Shape;
use serde::{Deserialize, Serialize};

/// Container for an ordered collection of shapes.
///
/// A frame is both the interpreter's live working buffer and, once
/// committed, the unit stored by the undo/redo history. Shapes are kept in
/// draw order (first = bottom layer, last = top layer); during an active
/// gesture only the last shape may be mutated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Vector of all shapes in draw order
    pub shapes: Vec<Shape>,
}

impl Frame {
    /// Creates a new empty frame with no shapes.
    pub fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    /// Adds a new shape to the frame (drawn on top of existing shapes).
    pub fn add_shape(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Removes every shape hit at the given point and returns how many
    /// were removed.
    pub fn erase_hits(&mut self, x: i32, y: i32) -> usize {
        let before = self.shapes.len();
        self.shapes.retain(|shape| !shape.hits(x, y));
        before - self.shapes.len()
    }
}
