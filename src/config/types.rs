//! Configuration type definitions.

use super::enums::ColorSpec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drawing-related settings.
///
/// Controls the brush the canvas starts with. The color picker and the brush
/// size slider change these values at runtime.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Default brush color - either a named palette color (black, red, yellow, green,
    /// cyan, magenta, blue, gray, white) or an RGB array like `[255, 0, 0]` for red
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Default brush radius in pixels (valid range: 1 - 100)
    #[serde(default = "default_brush_size")]
    pub default_brush_size: u32,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_brush_size: default_brush_size(),
        }
    }
}

/// Long-press color picker settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct LongPressConfig {
    /// Delay before the first color change in milliseconds (valid range: 50 - 5000)
    #[serde(default = "default_long_press_ms")]
    pub delay_ms: u64,

    /// Interval between subsequent color changes in milliseconds (valid range: 50 - 5000)
    #[serde(default = "default_long_press_ms")]
    pub period_ms: u64,

    /// Radius of the picker circle in pixels (valid range: 10.0 - 1000.0)
    #[serde(default = "default_preview_radius")]
    pub preview_radius: f64,
}

impl Default for LongPressConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_long_press_ms(),
            period_ms: default_long_press_ms(),
            preview_radius: default_preview_radius(),
        }
    }
}

/// Canvas surface settings used by the replay shell.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Canvas width in pixels (valid range: 16 - 8192)
    #[serde(default = "default_canvas_width")]
    pub width: i32,

    /// Canvas height in pixels (valid range: 16 - 8192)
    #[serde(default = "default_canvas_height")]
    pub height: i32,

    /// Background color painted under the strokes
    #[serde(default = "default_background")]
    pub background: ColorSpec,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_width(),
            height: default_canvas_height(),
            background: default_background(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_brush_size() -> u32 {
    25
}

fn default_long_press_ms() -> u64 {
    500
}

fn default_preview_radius() -> f64 {
    200.0
}

fn default_canvas_width() -> i32 {
    1080
}

fn default_canvas_height() -> i32 {
    1920
}

fn default_background() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}
