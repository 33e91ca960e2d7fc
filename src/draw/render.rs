//! Cairo-based rendering functions for strokes and the color picker preview.

use super::color::Color;
use super::stroke::{Point, StrokeRecord};
use std::f64::consts::PI;

/// Fills the whole surface with the canvas background color.
///
/// Should be called before rendering strokes.
pub fn render_background(ctx: &cairo::Context, color: Color) {
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    let _ = ctx.paint(); // Ignore errors - a failed paint leaves the previous frame visible
}

/// Renders strokes in order (first record = bottom layer).
///
/// # Arguments
/// * `ctx` - Cairo drawing context to render to
/// * `records` - Visible prefix of the stroke history
pub fn render_strokes(ctx: &cairo::Context, records: &[StrokeRecord]) {
    for record in records {
        render_stroke(ctx, record);
    }
}

/// Renders a single stroke as a chain of filled circles.
///
/// Each point is painted as a disc of the record's brush radius. Random-color
/// strokes pick the palette entry from the point's position within the
/// stroke, so the colors repeat every 8 points.
pub fn render_stroke(ctx: &cairo::Context, record: &StrokeRecord) {
    let radius = record.brush_size() as f64;
    let color = record.color();

    for (index, point) in record.points().iter().enumerate() {
        render_dot(ctx, *point, radius, color.color_at(index));
    }
}

/// Renders the large picker circle shown while a long press cycles colors.
pub fn render_color_preview(ctx: &cairo::Context, center: Point, radius: f64, color: Color) {
    render_dot(ctx, center, radius, color);
}

/// Paints one opaque filled circle; later calls cover earlier ones.
pub fn render_dot(ctx: &cairo::Context, center: Point, radius: f64, color: Color) {
    if radius <= 0.0 {
        return;
    }

    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.new_sub_path();
    ctx.arc(center.x, center.y, radius, 0.0, PI * 2.0);
    let _ = ctx.fill();
}
