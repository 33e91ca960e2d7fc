//! Stroke data model: points, per-stroke color and brush radius.

use super::color::{Color, palette_color};

/// A touch sample in view-local coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// How a stroke is colored when rendered.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StrokeColor {
    /// Every point uses the same color.
    Solid(Color),
    /// Random-color mode: each point takes the palette entry at its index
    /// within the stroke, wrapping every 8 points.
    Cycling,
}

impl StrokeColor {
    /// Resolves the color for the point at `index` within its stroke.
    pub fn color_at(&self, index: usize) -> Color {
        match self {
            StrokeColor::Solid(color) => *color,
            StrokeColor::Cycling => palette_color(index),
        }
    }
}

/// One committed (or in-progress) stroke.
///
/// Points are append-only; the record is rendered as a chain of filled
/// circles of `brush_size` radius.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeRecord {
    points: Vec<Point>,
    brush_size: u32,
    color: StrokeColor,
}

impl StrokeRecord {
    /// Starts a stroke at `origin`. A zero brush size is raised to 1.
    pub fn new(origin: Point, brush_size: u32, color: StrokeColor) -> Self {
        Self {
            points: vec![origin],
            brush_size: brush_size.max(1),
            color,
        }
    }

    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Circle radius in pixels.
    pub fn brush_size(&self) -> u32 {
        self.brush_size
    }

    pub fn color(&self) -> StrokeColor {
        self.color
    }

    /// Whether the stroke still only holds its pointer-down sample.
    pub fn is_singleton(&self) -> bool {
        self.points.len() == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLACK, BLUE, RED};

    #[test]
    fn solid_color_ignores_point_index() {
        let color = StrokeColor::Solid(BLUE);
        assert_eq!(color.color_at(0), BLUE);
        assert_eq!(color.color_at(13), BLUE);
    }

    #[test]
    fn cycling_color_wraps_with_point_index() {
        let color = StrokeColor::Cycling;
        assert_eq!(color.color_at(0), BLACK);
        assert_eq!(color.color_at(1), RED);
        assert_eq!(color.color_at(8), color.color_at(0));
    }

    #[test]
    fn new_record_holds_origin_only() {
        let record = StrokeRecord::new(Point::new(3.0, 4.0), 5, StrokeColor::Solid(BLACK));
        assert!(record.is_singleton());
        assert_eq!(record.points(), &[Point::new(3.0, 4.0)]);
        assert_eq!(record.brush_size(), 5);
    }

    #[test]
    fn zero_brush_size_is_raised_to_one() {
        let record = StrokeRecord::new(Point::new(0.0, 0.0), 0, StrokeColor::Cycling);
        assert_eq!(record.brush_size(), 1);
    }
}
