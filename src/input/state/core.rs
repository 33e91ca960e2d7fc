//! Drawing state machine and input state management.

use super::long_press::{LongPressSettings, LongPressTimer, TimerRequest};
use crate::draw::{Color, Point, StrokeColor, StrokeHistory};
use crate::input::color_mode::ColorMode;

/// Per-gesture context, created on pointer-down and dropped on pointer-up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gesture {
    /// Where the primary pointer went down (center of the picker circle)
    pub anchor: Point,
    /// Long-press ticks delivered so far; selects the next palette entry
    pub ticks: usize,
    /// Whether the tap point of this gesture was already discarded
    pub removed_tap_point: bool,
}

impl Gesture {
    pub fn new(anchor: Point) -> Self {
        Self {
            anchor,
            ticks: 0,
            removed_tap_point: false,
        }
    }
}

/// Current touch mode state machine.
///
/// Tracks whether the user is idle, drawing a stroke, or holding a long
/// press that cycles the color picker.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawingState {
    /// No gesture in progress - waiting for a pointer-down
    Idle,
    /// A finger is down and drawing (or may still become a long press)
    Stroking(Gesture),
    /// The long-press timer fired; the picker circle is shown
    LongPressPreview(Gesture),
}

impl DrawingState {
    /// The gesture context of an in-progress touch, if any.
    pub fn gesture(&self) -> Option<&Gesture> {
        match self {
            DrawingState::Idle => None,
            DrawingState::Stroking(gesture) | DrawingState::LongPressPreview(gesture) => {
                Some(gesture)
            }
        }
    }
}

/// Main input state containing all drawing session state.
///
/// This struct holds the stroke history, drawing parameters, color mode and
/// the touch state machine. It processes touch events and long-press ticks
/// and records when a redraw is needed.
pub struct InputState {
    /// All strokes plus the undo/redo cursor
    pub history: StrokeHistory,
    /// Current drawing color (changed by the long-press picker)
    pub current_color: Color,
    /// Current touch mode state machine
    pub state: DrawingState,
    /// Whether the canvas needs to be repainted
    pub needs_redraw: bool,
    /// Brush radius for subsequently started strokes
    brush_size: u32,
    /// Single or random color mode
    color_mode: ColorMode,
    /// Color saved when entering random mode (for restoration)
    previous_color: Option<Color>,
    /// Long-press timer tokens and pending requests for the shell
    pub(crate) long_press: LongPressTimer,
}

impl InputState {
    /// Creates a new InputState with specified defaults.
    ///
    /// # Arguments
    /// * `color` - Initial drawing color
    /// * `brush_size` - Initial brush radius in pixels (raised to at least 1)
    /// * `long_press` - Long-press timing and picker settings
    pub fn with_defaults(color: Color, brush_size: u32, long_press: LongPressSettings) -> Self {
        Self {
            history: StrokeHistory::new(),
            current_color: color,
            state: DrawingState::Idle,
            needs_redraw: true,
            brush_size: brush_size.max(1),
            color_mode: ColorMode::Single,
            previous_color: None,
            long_press: LongPressTimer::new(long_press),
        }
    }

    /// Sets the brush radius for strokes started from now on.
    ///
    /// A size of 0 (slider at its minimum) is raised to 1.
    pub fn set_brush_size(&mut self, size: u32) {
        if size == 0 {
            log::debug!("Brush size 0 raised to 1");
        }
        self.brush_size = size.max(1);
    }

    pub fn brush_size(&self) -> u32 {
        self.brush_size
    }

    pub fn color_mode(&self) -> ColorMode {
        self.color_mode
    }

    /// Switches between single and random color mode.
    ///
    /// Entering random mode saves the current color and stops any pending
    /// long press, closing the picker if it is open. Leaving it restores the
    /// saved color. Selecting the mode that is already active does nothing.
    pub fn set_color_mode(&mut self, mode: ColorMode) {
        if mode == self.color_mode {
            return;
        }

        match mode {
            ColorMode::Random => {
                self.previous_color = Some(self.current_color);
                self.long_press.cancel();
                if let DrawingState::LongPressPreview(gesture) = self.state {
                    self.state = DrawingState::Stroking(gesture);
                    self.needs_redraw = true;
                }
            }
            ColorMode::Single => {
                if let Some(color) = self.previous_color.take() {
                    self.current_color = color;
                }
            }
        }

        self.color_mode = mode;
        log::info!("Switched to {mode} mode");
    }

    /// Color assigned to the next stroke.
    pub fn stroke_color(&self) -> StrokeColor {
        match self.color_mode {
            ColorMode::Single => StrokeColor::Solid(self.current_color),
            ColorMode::Random => StrokeColor::Cycling,
        }
    }

    /// Hides the most recent stroke. Returns `false` if nothing can be undone.
    pub fn undo(&mut self) -> bool {
        if !self.history.undo() {
            return false;
        }
        self.needs_redraw = true;
        log::info!(
            "Undo: {} of {} strokes visible",
            self.history.visible_count(),
            self.history.len()
        );
        true
    }

    /// Re-shows the last undone stroke. Returns `false` if nothing can be redone.
    pub fn redo(&mut self) -> bool {
        if !self.history.redo() {
            return false;
        }
        self.needs_redraw = true;
        log::info!(
            "Redo: {} of {} strokes visible",
            self.history.visible_count(),
            self.history.len()
        );
        true
    }

    pub fn is_undoable(&self) -> bool {
        self.history.is_undoable()
    }

    pub fn is_redoable(&self) -> bool {
        self.history.is_redoable()
    }

    pub fn is_clearable(&self) -> bool {
        self.history.is_clearable()
    }

    /// Drops every stroke, including redo-able ones.
    pub fn clear(&mut self) {
        self.history.clear();
        self.needs_redraw = true;
        log::info!("Cleared canvas");
    }

    /// Long-press timing and picker settings.
    pub fn long_press_settings(&self) -> &LongPressSettings {
        self.long_press.settings()
    }

    /// Drains timer arm/cancel requests for the shell to apply.
    ///
    /// The shell must call this after every touch event and tick it delivers.
    pub fn take_timer_requests(&mut self) -> Vec<TimerRequest> {
        self.long_press.take_requests()
    }

    /// Takes the redraw flag, returning whether a repaint was requested.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }
}
