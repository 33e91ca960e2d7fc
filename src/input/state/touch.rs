use crate::draw::palette_color;
use crate::input::color_mode::ColorMode;
use crate::input::events::{TouchEvent, TouchPointer};

use super::long_press::LongPressToken;
use super::{DrawingState, Gesture, InputState};

impl InputState {
    /// Processes a raw touch event.
    ///
    /// Returns `true` if the event was consumed. `Cancel` and `Hover` are not
    /// handled and leave the state untouched.
    ///
    /// # Behavior
    /// - Down: starts a stroke; in single color mode also arms the long-press timer
    /// - Move: cancels the long-press timer and appends every pointer to the open stroke
    /// - Up / PointerUp: cancels the long-press timer and returns to Idle
    /// - PointerDown: consumed without effect
    pub fn on_touch_event(&mut self, event: &TouchEvent) -> bool {
        match event {
            TouchEvent::Down { pointer } => self.on_touch_down(*pointer),
            TouchEvent::PointerDown { .. } => {}
            TouchEvent::Move { pointers } => self.on_touch_move(pointers),
            TouchEvent::Up { .. } => {
                self.end_gesture();
                self.history.end_stroke();
            }
            // The remaining finger may keep drawing into the open stroke
            TouchEvent::PointerUp { .. } => self.end_gesture(),
            TouchEvent::Cancel | TouchEvent::Hover { .. } => return false,
        }

        self.needs_redraw = true;
        true
    }

    fn on_touch_down(&mut self, pointer: TouchPointer) {
        let origin = pointer.point();

        // Only one timer may exist; drop any leftover from an unterminated gesture
        self.long_press.cancel();
        if self.color_mode() == ColorMode::Single {
            self.long_press.arm();
        }

        self.history.begin_stroke(origin, self.brush_size(), self.stroke_color());
        self.state = DrawingState::Stroking(Gesture::new(origin));
    }

    fn on_touch_move(&mut self, pointers: &[TouchPointer]) {
        self.long_press.cancel();

        let gesture = match &self.state {
            DrawingState::Stroking(gesture) | DrawingState::LongPressPreview(gesture) => *gesture,
            DrawingState::Idle => match pointers.first() {
                Some(pointer) => Gesture::new(pointer.point()),
                None => return,
            },
        };

        for pointer in pointers {
            self.history.append_point(pointer.point());
        }
        self.state = DrawingState::Stroking(gesture);
    }

    fn end_gesture(&mut self) {
        self.long_press.cancel();
        self.state = DrawingState::Idle;
    }

    /// Delivers a long-press timer tick.
    ///
    /// The first tick of a gesture discards the tap point that started it;
    /// every tick advances the picker to the next palette color. Ticks from a
    /// cancelled or superseded timer are ignored.
    ///
    /// Returns `true` if the tick was applied.
    pub fn on_long_press_tick(&mut self, token: LongPressToken) -> bool {
        if !self.long_press.is_armed(token) {
            log::trace!("Ignoring stale long-press tick {token:?}");
            return false;
        }

        let Some(mut gesture) = self.state.gesture().copied() else {
            log::debug!("Long-press tick with no gesture in progress; cancelling timer");
            self.long_press.cancel();
            return false;
        };

        if !gesture.removed_tap_point {
            self.history.remove_open_singleton();
            gesture.removed_tap_point = true;
        }

        self.current_color = palette_color(gesture.ticks);
        gesture.ticks += 1;
        self.state = DrawingState::LongPressPreview(gesture);
        self.needs_redraw = true;
        true
    }

    /// Whether `token` still identifies the armed long-press timer.
    pub fn is_long_press_armed(&self, token: LongPressToken) -> bool {
        self.long_press.is_armed(token)
    }
}
