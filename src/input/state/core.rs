//! Drawing state machine and application state.

use crate::draw::{Color, FontDescriptor, Frame, History, ShapeId};
use crate::input::tool::Tool;

/// Smallest allowed stroke width in pixels.
pub const MIN_STROKE_WIDTH: u32 = 1;
/// Largest allowed stroke width in pixels.
pub const MAX_STROKE_WIDTH: u32 = 20;

/// Current drawing mode state machine.
///
/// Tracks whether the user is idle, actively dragging out a shape, or
/// entering text. State transitions occur based on pointer and keyboard
/// events.
#[derive(Debug)]
pub enum DrawingState {
    /// Not actively drawing - waiting for user input
    Idle,
    /// Active gesture (pointer button held down). The shape being refined
    /// is the last element of the working frame; it is the only shape a
    /// gesture may mutate.
    Drawing {
        /// Which tool is being used for this gesture
        tool: Tool,
    },
    /// Text entry mode - user is typing text to place on the canvas
    TextInput {
        /// X coordinate where text will be placed
        x: i32,
        /// Y coordinate where text will be placed
        y: i32,
        /// Accumulated text buffer
        buffer: String,
    },
}

/// Application state for one drawing session.
///
/// Owns the working frame (the live, uncommitted shape list), the undo/redo
/// history, and the current tool/style selection. All pointer and keyboard
/// events flow through this struct; the toolbar drives it through the
/// command methods below and reads `can_undo`/`can_redo` back. Everything
/// happens synchronously on the caller's thread.
pub struct InputState {
    /// Live shape list the current gesture mutates; resynchronized from the
    /// history whenever the active snapshot changes
    pub working: Frame,
    /// Committed snapshot log
    pub history: History,
    /// Tool applied by the next pointer press
    pub current_tool: Tool,
    /// Current drawing color
    pub current_color: Color,
    /// Current stroke thickness in pixels, always within
    /// [`MIN_STROKE_WIDTH`, `MAX_STROKE_WIDTH`]
    pub current_stroke_width: u32,
    /// Font used for text annotations
    pub font: FontDescriptor,
    /// Current drawing mode state machine
    pub state: DrawingState,
    /// Whether the display needs to be repainted
    pub needs_redraw: bool,
    /// Surface width in pixels (set by the host after configuration)
    pub surface_width: u32,
    /// Surface height in pixels (set by the host after configuration)
    pub surface_height: u32,
    /// Last shape id handed out; ids are monotonic within the session
    next_shape_id: u64,
}

impl InputState {
    /// Creates a new session state with the given tool and style defaults.
    ///
    /// Surface dimensions default to 0 and should be updated by the host
    /// once the real surface exists (see [`update_surface_size`]).
    ///
    /// [`update_surface_size`]: InputState::update_surface_size
    pub fn with_defaults(
        tool: Tool,
        color: Color,
        stroke_width: u32,
        font: FontDescriptor,
    ) -> Self {
        Self {
            working: Frame::new(),
            history: History::new(),
            current_tool: tool,
            current_color: color,
            current_stroke_width: stroke_width.clamp(MIN_STROKE_WIDTH, MAX_STROKE_WIDTH),
            font,
            state: DrawingState::Idle,
            needs_redraw: true,
            surface_width: 0,
            surface_height: 0,
            next_shape_id: 0,
        }
    }

    /// Switches the active tool.
    ///
    /// A tool change mid-gesture abandons the in-flight shape without a
    /// commit, and a change during text entry discards the buffer; either
    /// way the machine lands in `Idle` so the session cannot wedge.
    pub fn set_tool(&mut self, tool: Tool) {
        match &self.state {
            DrawingState::Drawing { .. } => {
                self.working.shapes.pop();
                self.needs_redraw = true;
            }
            DrawingState::TextInput { .. } => {
                self.needs_redraw = true;
            }
            DrawingState::Idle => {}
        }
        self.state = DrawingState::Idle;
        self.current_tool = tool;
        log::debug!("Tool set to {tool}");
    }

    /// Sets the stroke width, clamped to the valid range.
    pub fn set_stroke_width(&mut self, width: u32) {
        let clamped = width.clamp(MIN_STROKE_WIDTH, MAX_STROKE_WIDTH);
        if clamped != width {
            log::debug!("Stroke width {width} clamped to {clamped}");
        }
        self.current_stroke_width = clamped;
    }

    /// Sets the drawing color. Hosts with hex color pickers parse via
    /// [`Color::from_hex`] first.
    pub fn set_color(&mut self, color: Color) {
        self.current_color = color;
    }

    /// Steps the history back one snapshot and shows it.
    pub fn undo(&mut self) {
        if self.history.undo() {
            self.sync_from_history();
        }
    }

    /// Steps the history forward one snapshot and shows it.
    pub fn redo(&mut self) {
        if self.history.redo() {
            self.sync_from_history();
        }
    }

    /// True when an undo step is available.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// True when a redo step is available.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Updates surface dimensions after host configuration.
    ///
    /// A resize does not touch shape coordinates; the next render simply
    /// repaints the same shape list against the new size.
    pub fn update_surface_size(&mut self, width: u32, height: u32) {
        self.surface_width = width;
        self.surface_height = height;
        self.needs_redraw = true;
    }

    /// Replaces the working frame with a copy of the active snapshot.
    ///
    /// Called after every cursor move. Any uncommitted work, including an
    /// in-flight gesture, is dropped; the history owns the truth once the
    /// cursor moves.
    fn sync_from_history(&mut self) {
        self.working = Frame {
            shapes: self.history.active_snapshot().to_vec(),
        };
        self.state = DrawingState::Idle;
        self.needs_redraw = true;
    }

    /// Commits the working frame at the end of a gesture.
    ///
    /// An empty working frame is not committed; the duplicate check inside
    /// [`History::commit`] absorbs gestures that changed nothing.
    pub(super) fn commit_working(&mut self) {
        if self.working.shapes.is_empty() {
            return;
        }
        self.history.commit(&self.working);
    }

    /// Hands out the next session-unique shape id.
    pub(super) fn next_id(&mut self) -> ShapeId {
        self.next_shape_id += 1;
        ShapeId(self.next_shape_id)
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::with_defaults(
            Tool::Pen,
            crate::draw::color::BLACK,
            3,
            FontDescriptor::default(),
        )
    }
}
