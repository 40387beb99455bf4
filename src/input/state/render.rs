use crate::draw;

use super::InputState;

impl InputState {
    /// Paints the current scene into a Cairo context.
    ///
    /// Clears the surface and repaints the working frame from scratch, so
    /// an in-progress gesture (the frame's last shape) is always visible.
    /// Hosts call this after every processed event batch and after any
    /// surface resize.
    pub fn render_scene(&mut self, ctx: &cairo::Context) {
        log::debug!("Rendering {} shapes", self.working.shapes.len());
        draw::render_canvas(ctx, &self.working.shapes, &self.font);
        self.needs_redraw = false;
    }
}
