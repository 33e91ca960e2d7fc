//! Single/random color mode selection.

use std::fmt;

/// How newly started strokes are colored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorMode {
    /// Strokes use the current color; long press cycles the picker (default)
    #[default]
    Single,
    /// Strokes cycle through the palette point by point; long press is disabled
    Random,
}

impl ColorMode {
    /// Maps the shell's toggle switch state onto a mode.
    pub fn from_random_flag(is_random: bool) -> Self {
        if is_random { Self::Random } else { Self::Single }
    }

    pub fn is_random(&self) -> bool {
        matches!(self, Self::Random)
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single => f.write_str("Single Color"),
            Self::Random => f.write_str("Random Color"),
        }
    }
}
