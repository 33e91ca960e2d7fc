use std::mem;
use std::time::Duration;

use crate::config::LongPressConfig;

/// Delay before the first long-press tick.
pub const LONG_PRESS_DELAY: Duration = Duration::from_millis(500);
/// Period between subsequent long-press ticks.
pub const LONG_PRESS_PERIOD: Duration = Duration::from_millis(500);
/// Radius of the picker circle shown during a long press.
pub const PREVIEW_RADIUS: f64 = 200.0;

/// Runtime settings for the long-press color picker.
#[derive(Clone, Debug, PartialEq)]
pub struct LongPressSettings {
    pub delay: Duration,
    pub period: Duration,
    pub preview_radius: f64,
}

impl Default for LongPressSettings {
    fn default() -> Self {
        Self {
            delay: LONG_PRESS_DELAY,
            period: LONG_PRESS_PERIOD,
            preview_radius: PREVIEW_RADIUS,
        }
    }
}

impl From<&LongPressConfig> for LongPressSettings {
    fn from(cfg: &LongPressConfig) -> Self {
        LongPressSettings {
            delay: Duration::from_millis(cfg.delay_ms),
            period: Duration::from_millis(cfg.period_ms),
            preview_radius: cfg.preview_radius,
        }
    }
}

/// Identifies one arming of the long-press timer.
///
/// Every arm produces a new token; ticks carrying any other token are stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LongPressToken(u64);

/// Instruction for the shell's timer primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerRequest {
    /// Start a repeating timer: first tick after `delay`, then every `period`.
    Arm {
        token: LongPressToken,
        delay: Duration,
        period: Duration,
    },
    /// Stop the timer armed with `token`; pending ticks must be dropped.
    Cancel { token: LongPressToken },
}

/// Bookkeeping for the single long-press timer.
///
/// Holds no real timer; it hands out tokens and queues requests that the
/// shell drains and applies on its event loop.
pub(crate) struct LongPressTimer {
    settings: LongPressSettings,
    next_generation: u64,
    armed: Option<LongPressToken>,
    requests: Vec<TimerRequest>,
}

impl LongPressTimer {
    pub fn new(settings: LongPressSettings) -> Self {
        Self {
            settings,
            next_generation: 0,
            armed: None,
            requests: Vec::new(),
        }
    }

    pub fn settings(&self) -> &LongPressSettings {
        &self.settings
    }

    /// Arms a fresh timer, cancelling any previous one first.
    pub fn arm(&mut self) -> LongPressToken {
        self.cancel();
        let token = LongPressToken(self.next_generation);
        self.next_generation += 1;
        self.armed = Some(token);
        self.requests.push(TimerRequest::Arm {
            token,
            delay: self.settings.delay,
            period: self.settings.period,
        });
        token
    }

    /// Cancels the armed timer. Returns `false` if nothing was armed.
    pub fn cancel(&mut self) -> bool {
        match self.armed.take() {
            Some(token) => {
                self.requests.push(TimerRequest::Cancel { token });
                true
            }
            None => false,
        }
    }

    pub fn is_armed(&self, token: LongPressToken) -> bool {
        self.armed == Some(token)
    }

    pub fn take_requests(&mut self) -> Vec<TimerRequest> {
        mem::take(&mut self.requests)
    }
}
