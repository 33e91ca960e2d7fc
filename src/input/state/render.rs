use crate::draw::{Color, Point, render_color_preview, render_strokes};

use super::{DrawingState, InputState};

impl InputState {
    /// Returns the picker circle to show, if a long press is cycling colors.
    ///
    /// # Returns
    /// - `Some((center, color))` while in `LongPressPreview`
    /// - `None` otherwise
    pub fn color_preview(&self) -> Option<(Point, Color)> {
        match &self.state {
            DrawingState::LongPressPreview(gesture) => Some((gesture.anchor, self.current_color)),
            _ => None,
        }
    }

    /// Renders the visible strokes, then the picker circle on top.
    ///
    /// The caller paints the background first.
    pub fn render(&self, ctx: &cairo::Context) {
        render_strokes(ctx, self.history.visible());

        if let Some((center, color)) = self.color_preview() {
            render_color_preview(ctx, center, self.long_press_settings().preview_radius, color);
        }
    }
}
