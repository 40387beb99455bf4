//! Generic input event types for cross-backend compatibility.
//!
//! Host backends map their native pointer/keyboard codes to these generic
//! values before feeding them to the interpreter.

/// Generic key representation for cross-backend compatibility.
///
/// Only the keys the text-entry sub-state consumes are distinguished;
/// everything else maps to [`Key::Unknown`] and is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Escape key
    Escape,
    /// Return/Enter key
    Return,
    /// Backspace key
    Backspace,
    /// Space bar
    Space,
    /// Unmapped or unrecognized key
    Unknown,
}

/// Mouse button identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// Left mouse button (primary drawing button)
    Left,
    /// Right mouse button (currently unused)
    Right,
    /// Middle mouse button (currently unused)
    Middle,
}
