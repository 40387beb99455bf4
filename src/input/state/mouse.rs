use crate::draw::Shape;
use crate::input::events::MouseButton;
use crate::input::tool::{ShapeKind, Tool};
use log::warn;

use super::{DrawingState, InputState};

impl InputState {
    /// Processes a pointer button press at (x, y).
    ///
    /// Only the left button does anything. Depending on the active tool
    /// this starts a pen or shape gesture, erases shapes under the point,
    /// or (re)enters text entry at the point.
    pub fn on_pointer_down(&mut self, button: MouseButton, x: i32, y: i32) {
        if button != MouseButton::Left {
            return;
        }

        match &self.state {
            // A press while a gesture is already active is a sequencing
            // anomaly; ignore it and let the release close the gesture.
            DrawingState::Drawing { .. } => return,
            // A press during text entry repositions it (the buffer resets
            // below when the text tool re-enters), or cancels it for any
            // other tool.
            DrawingState::TextInput { .. } => {
                self.state = DrawingState::Idle;
                self.needs_redraw = true;
            }
            DrawingState::Idle => {}
        }

        match self.current_tool {
            Tool::Pen => {
                let id = self.next_id();
                self.working.add_shape(Shape::Pen {
                    id,
                    points: vec![(x, y)],
                    color: self.current_color,
                    stroke_width: self.current_stroke_width,
                });
                self.state = DrawingState::Drawing { tool: Tool::Pen };
                self.needs_redraw = true;
            }
            Tool::Eraser => {
                self.erase_at(x, y);
            }
            Tool::Text => {
                self.state = DrawingState::TextInput {
                    x,
                    y,
                    buffer: String::new(),
                };
                self.needs_redraw = true;
            }
            Tool::Shape(kind) => {
                let id = self.next_id();
                let (color, stroke_width) = (self.current_color, self.current_stroke_width);
                let shape = match kind {
                    ShapeKind::Rect => Shape::Rect {
                        id,
                        x,
                        y,
                        width: 0,
                        height: 0,
                        color,
                        stroke_width,
                        fill_color: None,
                        rotation: 0.0,
                    },
                    ShapeKind::Circle => Shape::Circle {
                        id,
                        x,
                        y,
                        width: 0,
                        height: 0,
                        color,
                        stroke_width,
                        fill_color: None,
                        rotation: 0.0,
                    },
                    ShapeKind::Arrow => Shape::Arrow {
                        id,
                        x,
                        y,
                        width: 0,
                        height: 0,
                        color,
                        stroke_width,
                        fill_color: None,
                        rotation: 0.0,
                    },
                };
                self.working.add_shape(shape);
                self.state = DrawingState::Drawing {
                    tool: Tool::Shape(kind),
                };
                self.needs_redraw = true;
            }
        }
    }

    /// Processes pointer motion (dragging) events.
    ///
    /// While a gesture is active the last shape of the working frame is
    /// refined in place: pen strokes grow by one point, box shapes update
    /// their signed extents (which go negative when dragging up or left of
    /// the anchor). Outside a gesture, motion is a no-op.
    pub fn on_pointer_move(&mut self, x: i32, y: i32) {
        let DrawingState::Drawing { tool } = &self.state else {
            return;
        };
        let tool = *tool;

        match (tool, self.working.shapes.last_mut()) {
            (Tool::Pen, Some(Shape::Pen { points, .. })) => {
                points.push((x, y));
                self.needs_redraw = true;
            }
            (
                Tool::Shape(ShapeKind::Rect),
                Some(Shape::Rect {
                    x: ax,
                    y: ay,
                    width,
                    height,
                    ..
                }),
            )
            | (
                Tool::Shape(ShapeKind::Circle),
                Some(Shape::Circle {
                    x: ax,
                    y: ay,
                    width,
                    height,
                    ..
                }),
            )
            | (
                Tool::Shape(ShapeKind::Arrow),
                Some(Shape::Arrow {
                    x: ax,
                    y: ay,
                    width,
                    height,
                    ..
                }),
            ) => {
                *width = x - *ax;
                *height = y - *ay;
                self.needs_redraw = true;
            }
            _ => {
                // The working frame's tail does not match the gesture tool.
                // Dropping the event keeps the session alive.
                warn!("Ignoring pointer motion: last shape does not match {tool} gesture");
            }
        }
    }

    /// Processes a pointer button release.
    ///
    /// Ends any active gesture and commits the working frame. Releases
    /// outside a gesture still attempt the commit; the history's duplicate
    /// check turns those into no-ops.
    pub fn on_pointer_up(&mut self, button: MouseButton) {
        if button != MouseButton::Left {
            return;
        }
        if matches!(self.state, DrawingState::Drawing { .. }) {
            self.state = DrawingState::Idle;
        }
        self.commit_working();
    }

    /// Processes the pointer leaving the surface.
    ///
    /// Equivalent to a release for commit purposes, so a drag that exits
    /// the surface without a release still persists its shape.
    pub fn on_pointer_leave(&mut self) {
        if matches!(self.state, DrawingState::Drawing { .. }) {
            self.state = DrawingState::Idle;
        }
        self.commit_working();
    }

    /// Removes every shape under the point and commits the result.
    ///
    /// Erasing the last remaining shape commits an empty frame: the empty
    /// canvas becomes a history entry the user can undo back out of. A
    /// click that hits nothing is a complete no-op.
    fn erase_at(&mut self, x: i32, y: i32) {
        let removed = self.working.erase_hits(x, y);
        if removed == 0 {
            return;
        }
        log::debug!("Eraser removed {removed} shape(s) at ({x}, {y})");
        self.history.commit(&self.working);
        self.needs_redraw = true;
    }
}
