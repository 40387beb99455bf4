use crate::draw::Shape;
use crate::input::events::Key;

use super::{DrawingState, InputState};

/// Cap on the text-entry buffer, in bytes.
const MAX_TEXT_INPUT_LEN: usize = 10_000;

/// Font size derived from the stroke width, so text scales with the other
/// tools' weight.
fn text_font_size(stroke_width: u32) -> f64 {
    (stroke_width * 4 + 8) as f64
}

impl InputState {
    /// Processes a key press event.
    ///
    /// Keys only matter during text entry: printable characters and Space
    /// accumulate into the buffer, Backspace removes the last character,
    /// Return places the text and commits, Escape discards the entry. In
    /// every other state key presses are ignored.
    pub fn on_key_press(&mut self, key: Key) {
        let DrawingState::TextInput { x, y, buffer } = &mut self.state else {
            return;
        };

        match key {
            Key::Char(c) => {
                if buffer.len() < MAX_TEXT_INPUT_LEN {
                    buffer.push(c);
                    self.needs_redraw = true;
                }
            }
            Key::Space => {
                if buffer.len() < MAX_TEXT_INPUT_LEN {
                    buffer.push(' ');
                    self.needs_redraw = true;
                }
            }
            Key::Backspace => {
                buffer.pop();
                self.needs_redraw = true;
            }
            Key::Return => {
                let (x, y) = (*x, *y);
                let text = std::mem::take(buffer);
                self.state = DrawingState::Idle;
                self.needs_redraw = true;

                // Whitespace-only entries leave no shape and no history
                // entry behind.
                if text.trim().is_empty() {
                    return;
                }

                let id = self.next_id();
                self.working.add_shape(Shape::Text {
                    id,
                    text,
                    x,
                    y,
                    color: self.current_color,
                    font_size: text_font_size(self.current_stroke_width),
                });
                self.history.commit(&self.working);
            }
            Key::Escape => {
                self.state = DrawingState::Idle;
                self.needs_redraw = true;
            }
            Key::Unknown => {}
        }
    }
}
