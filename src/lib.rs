//! Interactive sketching canvas core.
//!
//! Exposes the shape model, Cairo renderer, input interpreter, and
//! undo/redo history so that a windowing host can wire pointer/keyboard
//! events and a toolbar to a drawing surface. The crate itself owns no
//! event loop and no window; hosts feed events into
//! [`input::InputState`] and hand it a [`cairo::Context`] to paint into.

pub mod config;
pub mod draw;
pub mod input;
pub mod util;

pub use config::Config;
