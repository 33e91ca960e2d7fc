//! Input handling and touch state machine.
//!
//! This module translates raw touch events and long-press timer ticks into
//! stroke history updates. It holds the drawing parameters (color, brush size,
//! color mode) and the state machine for idle, stroking and long-press modes.

pub mod color_mode;
pub mod events;
pub mod state;

// Re-export commonly used types at module level
pub use color_mode::ColorMode;
pub use events::{TouchEvent, TouchPointer};
pub use state::{DrawingState, InputState, LongPressSettings, LongPressToken, TimerRequest};
