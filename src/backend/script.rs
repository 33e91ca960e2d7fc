//! Gesture scripts replayed by the shell.
//!
//! A script is a TOML file holding an ordered `[[step]]` array. Each step is
//! tagged by `action`:
//!
//! ```toml
//! [[step]]
//! action = "down"
//! x = 10.0
//! y = 10.0
//!
//! [[step]]
//! action = "move"
//! points = [[12.0, 11.0]]
//!
//! [[step]]
//! action = "wait"
//! ms = 1000
//!
//! [[step]]
//! action = "up"
//! x = 12.0
//! y = 11.0
//! ```

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Longest pause a single `wait` step may request.
pub const MAX_WAIT_MS: u64 = 60_000;

/// Highest value of the brush size slider.
pub const MAX_BRUSH_SIZE: u32 = 100;

/// One scripted user action.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum Step {
    /// First finger touches at (x, y)
    Down { x: f64, y: f64 },
    /// Another finger touches while one is already down
    PointerDown { id: i32, x: f64, y: f64 },
    /// Active fingers move; one `[x, y]` pair per finger, in touch order
    Move { points: Vec<[f64; 2]> },
    /// Last finger lifts
    Up { x: f64, y: f64 },
    /// A non-last finger lifts
    PointerUp { id: i32, x: f64, y: f64 },
    /// The system aborts the gesture
    Cancel,
    /// Let the event loop run (and timers fire) for `ms` milliseconds
    Wait { ms: u64 },
    /// Undo button
    Undo,
    /// Redo button
    Redo,
    /// Clear button (after confirmation)
    Clear,
    /// Brush size slider
    BrushSize { size: u32 },
    /// Random color switch
    ColorMode { random: bool },
}

/// Errors raised while loading a gesture script.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Failed to read script {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse script: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Script contains no steps")]
    Empty,

    #[error("Step {index} ({action}): {reason}")]
    InvalidStep {
        index: usize,
        action: &'static str,
        reason: String,
    },
}

/// An ordered list of steps.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Script {
    #[serde(rename = "step", default)]
    pub steps: Vec<Step>,
}

impl Script {
    /// Reads and validates a script file.
    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let text = fs::read_to_string(path).map_err(|source| ScriptError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let script = Self::parse(&text)?;
        log::debug!(
            "Loaded script {} with {} steps",
            path.display(),
            script.steps.len()
        );
        Ok(script)
    }

    /// Parses and validates script text.
    pub fn parse(text: &str) -> Result<Self, ScriptError> {
        let script: Script = toml::from_str(text)?;
        script.validate()?;
        Ok(script)
    }

    /// Checks that the script is non-empty and every step is well formed.
    pub fn validate(&self) -> Result<(), ScriptError> {
        if self.steps.is_empty() {
            return Err(ScriptError::Empty);
        }

        for (index, step) in self.steps.iter().enumerate() {
            step.validate().map_err(|reason| ScriptError::InvalidStep {
                index,
                action: step.action(),
                reason,
            })?;
        }
        Ok(())
    }
}

impl Step {
    /// The `action` tag of this step.
    pub fn action(&self) -> &'static str {
        match self {
            Step::Down { .. } => "down",
            Step::PointerDown { .. } => "pointer-down",
            Step::Move { .. } => "move",
            Step::Up { .. } => "up",
            Step::PointerUp { .. } => "pointer-up",
            Step::Cancel => "cancel",
            Step::Wait { .. } => "wait",
            Step::Undo => "undo",
            Step::Redo => "redo",
            Step::Clear => "clear",
            Step::BrushSize { .. } => "brush-size",
            Step::ColorMode { .. } => "color-mode",
        }
    }

    fn validate(&self) -> Result<(), String> {
        match self {
            Step::Down { x, y }
            | Step::Up { x, y }
            | Step::PointerDown { x, y, .. }
            | Step::PointerUp { x, y, .. } => check_coordinates(*x, *y),
            Step::Move { points } => {
                if points.is_empty() {
                    return Err("move needs at least one point".to_string());
                }
                points.iter().try_for_each(|[x, y]| check_coordinates(*x, *y))
            }
            Step::Wait { ms } if *ms > MAX_WAIT_MS => {
                Err(format!("wait of {ms} ms exceeds the {MAX_WAIT_MS} ms limit"))
            }
            Step::BrushSize { size } if *size > MAX_BRUSH_SIZE => Err(format!(
                "brush size {size} exceeds the slider maximum {MAX_BRUSH_SIZE}"
            )),
            _ => Ok(()),
        }
    }
}

fn check_coordinates(x: f64, y: f64) -> Result<(), String> {
    if x.is_finite() && y.is_finite() {
        Ok(())
    } else {
        Err(format!("coordinates ({x}, {y}) are not finite"))
    }
}
