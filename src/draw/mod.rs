//! Drawing primitives and the stroke store (Cairo-based).
//!
//! This module defines the core drawing types used by the canvas:
//! - [`Color`]: RGBA color representation with the 8-entry picker palette
//! - [`StrokeRecord`]: Points of one stroke plus its radius and color
//! - [`StrokeHistory`]: Ordered strokes with the undo/redo cursor
//! - Rendering functions for Cairo-based output

pub mod color;
pub mod history;
pub mod render;
pub mod stroke;

// Re-export commonly used types at module level
pub use color::{Color, PALETTE, palette_color};
pub use history::StrokeHistory;
pub use render::{render_background, render_color_preview, render_stroke, render_strokes};
pub use stroke::{Point, StrokeColor, StrokeRecord};

pub use color::{BLACK, BLUE, CYAN, GRAY, GREEN, MAGENTA, RED, WHITE, YELLOW};
