//! RGBA color type, predefined color constants and the picker palette.

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// # Examples
///
/// ```
/// use doodlepad::draw::Color;
/// let red = Color { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };
/// let semi_transparent_blue = Color { r: 0.0, g: 0.0, b: 1.0, a: 0.5 };
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

impl Color {
    /// Creates a new color from RGBA components.
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from 8-bit RGB components.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: 1.0,
        }
    }
}

// ============================================================================
// Predefined Color Constants
// ============================================================================

/// Black (R=0.0, G=0.0, B=0.0), also the default drawing color
pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);

/// Red (R=1.0, G=0.0, B=0.0)
pub const RED: Color = Color::new(1.0, 0.0, 0.0, 1.0);

/// Yellow (R=1.0, G=1.0, B=0.0)
pub const YELLOW: Color = Color::new(1.0, 1.0, 0.0, 1.0);

/// Green (R=0.0, G=1.0, B=0.0)
pub const GREEN: Color = Color::new(0.0, 1.0, 0.0, 1.0);

/// Cyan (R=0.0, G=1.0, B=1.0)
pub const CYAN: Color = Color::new(0.0, 1.0, 1.0, 1.0);

/// Magenta (R=1.0, G=0.0, B=1.0)
pub const MAGENTA: Color = Color::new(1.0, 0.0, 1.0, 1.0);

/// Blue (R=0.0, G=0.0, B=1.0)
pub const BLUE: Color = Color::new(0.0, 0.0, 1.0, 1.0);

/// Mid gray (0x88 per channel)
pub const GRAY: Color = Color::new(136.0 / 255.0, 136.0 / 255.0, 136.0 / 255.0, 1.0);

/// White, used as the default canvas background
pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);

/// Number of entries in [`PALETTE`].
pub const PALETTE_LEN: usize = 8;

/// Fixed color table shared by the long-press picker and random-color strokes.
///
/// Index 0 is black; the rest follow the order the picker cycles through.
pub const PALETTE: [Color; PALETTE_LEN] = [BLACK, RED, YELLOW, GREEN, CYAN, MAGENTA, BLUE, GRAY];

/// Returns the palette entry for an unbounded counter, wrapping every 8 steps.
pub fn palette_color(index: usize) -> Color {
    PALETTE[index % PALETTE_LEN]
}
