mod core;
mod long_press;
mod render;
mod touch;

pub use core::{DrawingState, Gesture, InputState};
pub use long_press::{
    LONG_PRESS_DELAY, LONG_PRESS_PERIOD, LongPressSettings, LongPressToken, PREVIEW_RADIUS,
    TimerRequest,
};
