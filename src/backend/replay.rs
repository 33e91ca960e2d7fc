// Drives a calloop event loop that replays a gesture script against the input
// state, mapping long-press timer requests onto calloop timer sources so ticks
// are serialised with touch handling on the loop thread.
use anyhow::{Context, Result, anyhow};
use calloop::timer::{TimeoutAction, Timer};
use calloop::{EventLoop, LoopHandle, RegistrationToken};
use log::{debug, info, trace, warn};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use super::output::Canvas;
use super::script::{Script, Step};
use crate::config::Config;
use crate::input::{
    ColorMode, InputState, LongPressSettings, LongPressToken, TimerRequest, TouchEvent,
    TouchPointer,
};

/// Result of a completed replay.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplaySummary {
    /// Strokes held by the history, including redo-able ones
    pub strokes_stored: usize,
    /// Strokes currently visible
    pub strokes_visible: usize,
    /// Long-press ticks delivered to the input state
    pub long_press_ticks: usize,
    /// Where the PNG was written
    pub output: PathBuf,
}

/// Final state of a replay before anything is written to disk.
pub struct ReplayOutcome {
    pub input_state: InputState,
    pub canvas: Canvas,
    pub long_press_ticks: usize,
}

/// Loop data shared between script steps and timer callbacks.
struct ReplayApp {
    input_state: InputState,
    canvas: Canvas,
    /// Fingers currently down, in touch order
    active_pointers: Vec<TouchPointer>,
    /// Live calloop timer sources keyed by long-press token
    timers: HashMap<LongPressToken, RegistrationToken>,
    long_press_ticks: usize,
}

impl ReplayApp {
    fn repaint_if_needed(&mut self) -> Result<()> {
        if self.input_state.take_redraw() {
            self.canvas.paint(&self.input_state)?;
        }
        Ok(())
    }

    fn on_tick(&mut self, token: LongPressToken) -> bool {
        if !self.input_state.on_long_press_tick(token) {
            return false;
        }
        self.long_press_ticks += 1;
        debug!(
            "Long-press tick {}: picker color {}",
            self.long_press_ticks,
            crate::util::color_to_name(&self.input_state.current_color)
        );
        if let Err(e) = self.repaint_if_needed() {
            warn!("Render after long-press tick failed: {}", e);
        }
        true
    }

    fn dispatch_touch(&mut self, event: TouchEvent) {
        let pointer_count = event.pointer_count();
        if self.input_state.on_touch_event(&event) {
            trace!("Touch event handled ({} pointers)", pointer_count);
        } else {
            debug!("Touch event not handled: {:?}", event);
        }
    }

    fn apply_step(&mut self, step: &Step) {
        match step {
            Step::Down { x, y } => {
                let pointer = TouchPointer::new(0, *x, *y);
                self.active_pointers = vec![pointer];
                self.dispatch_touch(TouchEvent::Down { pointer });
            }
            Step::PointerDown { id, x, y } => {
                let pointer = TouchPointer::new(*id, *x, *y);
                self.active_pointers.retain(|p| p.id != *id);
                self.active_pointers.push(pointer);
                self.dispatch_touch(TouchEvent::PointerDown {
                    pointer,
                    pointers: self.active_pointers.clone(),
                });
            }
            Step::Move { points } => {
                let pointers: Vec<TouchPointer> = points
                    .iter()
                    .enumerate()
                    .map(|(index, [x, y])| {
                        let id = self
                            .active_pointers
                            .get(index)
                            .map_or(index as i32, |p| p.id);
                        TouchPointer::new(id, *x, *y)
                    })
                    .collect();
                self.active_pointers = pointers.clone();
                self.dispatch_touch(TouchEvent::Move { pointers });
            }
            Step::Up { x, y } => {
                let id = self.active_pointers.first().map_or(0, |p| p.id);
                self.active_pointers.clear();
                self.dispatch_touch(TouchEvent::Up {
                    pointer: TouchPointer::new(id, *x, *y),
                });
            }
            Step::PointerUp { id, x, y } => {
                let pointer = TouchPointer::new(*id, *x, *y);
                let pointers = self.active_pointers.clone();
                self.active_pointers.retain(|p| p.id != *id);
                self.dispatch_touch(TouchEvent::PointerUp { pointer, pointers });
            }
            Step::Cancel => {
                self.active_pointers.clear();
                self.dispatch_touch(TouchEvent::Cancel);
            }
            Step::Wait { .. } => {}
            Step::Undo => {
                if !self.input_state.undo() {
                    warn!("No stroke can be undone!");
                }
            }
            Step::Redo => {
                if !self.input_state.redo() {
                    warn!("No stroke can be redone!");
                }
            }
            Step::Clear => {
                if self.input_state.is_clearable() {
                    self.input_state.clear();
                } else {
                    warn!("No content can be cleared!");
                }
            }
            Step::BrushSize { size } => {
                self.input_state.set_brush_size(*size);
                info!("Brush Size: {} dp", self.input_state.brush_size());
            }
            Step::ColorMode { random } => {
                self.input_state.set_color_mode(ColorMode::from_random_flag(*random));
            }
        }
    }
}

/// Replays gesture scripts on an offscreen canvas.
pub struct ReplayBackend {
    config: Config,
}

impl ReplayBackend {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Replays `script` and writes the final canvas to `output`.
    pub fn run(&self, script: &Script, output: &Path) -> Result<ReplaySummary> {
        let outcome = self.replay(script)?;
        let output = outcome.canvas.write_png(output)?;

        let summary = ReplaySummary {
            strokes_stored: outcome.input_state.history.len(),
            strokes_visible: outcome.input_state.history.visible_count(),
            long_press_ticks: outcome.long_press_ticks,
            output,
        };
        info!(
            "Replay finished: {} strokes ({} visible), {} long-press ticks",
            summary.strokes_stored, summary.strokes_visible, summary.long_press_ticks
        );
        Ok(summary)
    }

    /// Replays `script` and returns the final input state and canvas.
    pub fn replay(&self, script: &Script) -> Result<ReplayOutcome> {
        script.validate()?;

        let mut event_loop: EventLoop<'static, ReplayApp> =
            EventLoop::try_new().context("Failed to create event loop")?;
        let handle = event_loop.handle();

        let drawing = &self.config.drawing;
        let canvas_cfg = &self.config.canvas;
        let input_state = InputState::with_defaults(
            drawing.default_color.to_color(),
            drawing.default_brush_size,
            LongPressSettings::from(&self.config.long_press),
        );
        let canvas = Canvas::new(
            canvas_cfg.width,
            canvas_cfg.height,
            canvas_cfg.background.to_color(),
        )?;

        let mut app = ReplayApp {
            input_state,
            canvas,
            active_pointers: Vec::new(),
            timers: HashMap::new(),
            long_press_ticks: 0,
        };
        app.repaint_if_needed()?;

        for (index, step) in script.steps.iter().enumerate() {
            debug!("Step {}: {:?}", index, step);
            app.apply_step(step);
            sync_timers(&handle, &mut app)?;
            app.repaint_if_needed()
                .with_context(|| format!("Render failed after step {index}"))?;

            if let Step::Wait { ms } = step {
                run_until(
                    &mut event_loop,
                    &handle,
                    &mut app,
                    Instant::now() + Duration::from_millis(*ms),
                )?;
            }
        }

        // Drop any timer still armed by an unfinished gesture
        for (_, registration) in app.timers.drain() {
            handle.remove(registration);
        }

        Ok(ReplayOutcome {
            input_state: app.input_state,
            canvas: app.canvas,
            long_press_ticks: app.long_press_ticks,
        })
    }
}

/// Dispatches the event loop until `deadline`, applying timer requests after every pass.
fn run_until(
    event_loop: &mut EventLoop<'static, ReplayApp>,
    handle: &LoopHandle<'static, ReplayApp>,
    app: &mut ReplayApp,
    deadline: Instant,
) -> Result<()> {
    loop {
        let now = Instant::now();
        if now >= deadline {
            return Ok(());
        }

        event_loop
            .dispatch(Some(deadline - now), app)
            .context("Event loop dispatch failed")?;
        sync_timers(handle, app)?;
    }
}

/// Applies the input state's pending arm/cancel requests to calloop timer sources.
fn sync_timers(handle: &LoopHandle<'static, ReplayApp>, app: &mut ReplayApp) -> Result<()> {
    for request in app.input_state.take_timer_requests() {
        match request {
            TimerRequest::Arm {
                token,
                delay,
                period,
            } => {
                let registration = handle
                    .insert_source(
                        Timer::from_duration(delay),
                        move |_deadline, _, app: &mut ReplayApp| {
                            if app.on_tick(token) {
                                TimeoutAction::ToDuration(period)
                            } else {
                                app.timers.remove(&token);
                                TimeoutAction::Drop
                            }
                        },
                    )
                    .map_err(|e| anyhow!("Failed to insert long-press timer: {}", e.error))?;
                debug!(
                    "Armed long-press timer {:?} ({:?} then every {:?})",
                    token, delay, period
                );
                app.timers.insert(token, registration);
            }
            TimerRequest::Cancel { token } => {
                if let Some(registration) = app.timers.remove(&token) {
                    handle.remove(registration);
                    debug!("Cancelled long-press timer {:?}", token);
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BLACK, Point, StrokeColor};

    fn fast_config() -> Config {
        let mut config = Config::default();
        config.canvas.width = 64;
        config.canvas.height = 64;
        config.drawing.default_brush_size = 2;
        config.long_press.delay_ms = 50;
        config.long_press.period_ms = 300;
        config
    }

    fn script(text: &str) -> Script {
        Script::parse(text).unwrap()
    }

    #[test]
    fn stroke_without_waiting_records_points() {
        let backend = ReplayBackend::new(fast_config());
        let outcome = backend
            .replay(&script(
                r#"
                [[step]]
                action = "down"
                x = 10.0
                y = 10.0

                [[step]]
                action = "move"
                points = [[12.0, 11.0]]

                [[step]]
                action = "up"
                x = 12.0
                y = 11.0
                "#,
            ))
            .unwrap();

        let records = outcome.input_state.history.records();
        assert_eq!(records.len(), 1);
        assert_eq!(
            records[0].points(),
            &[Point::new(10.0, 10.0), Point::new(12.0, 11.0)]
        );
        assert_eq!(records[0].color(), StrokeColor::Solid(BLACK));
        assert_eq!(outcome.long_press_ticks, 0);
    }

    #[test]
    fn held_press_fires_timer_and_discards_tap_point() {
        let backend = ReplayBackend::new(fast_config());
        let outcome = backend
            .replay(&script(
                r#"
                [[step]]
                action = "down"
                x = 20.0
                y = 20.0

                [[step]]
                action = "wait"
                ms = 500

                [[step]]
                action = "up"
                x = 20.0
                y = 20.0
                "#,
            ))
            .unwrap();

        // Ticks at 50 ms and 350 ms
        assert_eq!(outcome.long_press_ticks, 2);
        assert!(outcome.input_state.history.is_empty());
        assert_eq!(outcome.input_state.current_color, crate::draw::RED);
    }

    #[test]
    fn moving_cancels_pending_long_press() {
        let backend = ReplayBackend::new(fast_config());
        let outcome = backend
            .replay(&script(
                r#"
                [[step]]
                action = "down"
                x = 20.0
                y = 20.0

                [[step]]
                action = "move"
                points = [[21.0, 20.0]]

                [[step]]
                action = "wait"
                ms = 150
                "#,
            ))
            .unwrap();

        assert_eq!(outcome.long_press_ticks, 0);
        assert_eq!(outcome.input_state.history.len(), 1);
    }

    #[test]
    fn buttons_follow_history_rules() {
        let backend = ReplayBackend::new(fast_config());
        let outcome = backend
            .replay(&script(
                r#"
                [[step]]
                action = "undo"

                [[step]]
                action = "down"
                x = 1.0
                y = 1.0

                [[step]]
                action = "up"
                x = 1.0
                y = 1.0

                [[step]]
                action = "down"
                x = 2.0
                y = 2.0

                [[step]]
                action = "up"
                x = 2.0
                y = 2.0

                [[step]]
                action = "undo"

                [[step]]
                action = "redo"

                [[step]]
                action = "redo"

                [[step]]
                action = "undo"
                "#,
            ))
            .unwrap();

        assert_eq!(outcome.input_state.history.len(), 2);
        assert_eq!(outcome.input_state.history.visible_count(), 1);
    }

    #[test]
    fn second_finger_draws_into_same_stroke() {
        let backend = ReplayBackend::new(fast_config());
        let outcome = backend
            .replay(&script(
                r#"
                [[step]]
                action = "color-mode"
                random = true

                [[step]]
                action = "down"
                x = 1.0
                y = 1.0

                [[step]]
                action = "pointer-down"
                id = 7
                x = 30.0
                y = 30.0

                [[step]]
                action = "move"
                points = [[2.0, 2.0], [31.0, 31.0]]

                [[step]]
                action = "pointer-up"
                id = 7
                x = 31.0
                y = 31.0

                [[step]]
                action = "move"
                points = [[3.0, 3.0]]

                [[step]]
                action = "up"
                x = 3.0
                y = 3.0
                "#,
            ))
            .unwrap();

        let records = outcome.input_state.history.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].points().len(), 4);
        assert_eq!(records[0].color(), StrokeColor::Cycling);
    }

    #[test]
    fn run_writes_png_and_summary() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        let backend = ReplayBackend::new(fast_config());

        let summary = backend
            .run(
                &script(
                    r#"
                    [[step]]
                    action = "down"
                    x = 5.0
                    y = 5.0

                    [[step]]
                    action = "up"
                    x = 5.0
                    y = 5.0
                    "#,
                ),
                &path,
            )
            .unwrap();

        assert_eq!(
            summary,
            ReplaySummary {
                strokes_stored: 1,
                strokes_visible: 1,
                long_press_ticks: 0,
                output: path.clone(),
            }
        );
        assert!(path.exists());
    }
}
