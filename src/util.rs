//! Utility functions for color names.
//!
//! This module provides:
//! - Name-to-color mapping for the configuration file
//! - Color-to-name mapping for log messages

use crate::draw::{Color, color::*};

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to Color values.
///
/// Used by the configuration system to parse color names from the config file.
///
/// # Supported Names (case-insensitive)
/// - The palette: "black", "red", "yellow", "green", "cyan", "magenta", "blue", "gray"
/// - "grey" as an alias of "gray"
/// - "white" (the default canvas background)
///
/// # Returns
/// - `Some(Color)` if the name matches a predefined color
/// - `None` if the name is not recognized
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.trim().to_lowercase().as_str() {
        "black" => Some(BLACK),
        "red" => Some(RED),
        "yellow" => Some(YELLOW),
        "green" => Some(GREEN),
        "cyan" => Some(CYAN),
        "magenta" => Some(MAGENTA),
        "blue" => Some(BLUE),
        "gray" | "grey" => Some(GRAY),
        "white" => Some(WHITE),
        _ => None,
    }
}

/// Maps a Color value to its human-readable name.
///
/// Uses approximate matching (0.05 tolerance per channel) so colors read back
/// from 8-bit RGB config values still resolve. Returns "Custom" for anything
/// else.
pub fn color_to_name(color: &Color) -> &'static str {
    const NAMED: [(&str, Color); 9] = [
        ("Black", BLACK),
        ("Red", RED),
        ("Yellow", YELLOW),
        ("Green", GREEN),
        ("Cyan", CYAN),
        ("Magenta", MAGENTA),
        ("Blue", BLUE),
        ("Gray", GRAY),
        ("White", WHITE),
    ];

    let close = |a: f64, b: f64| (a - b).abs() < 0.05;
    NAMED
        .iter()
        .find(|(_, named)| {
            close(color.r, named.r) && close(color.g, named.g) && close(color.b, named.b)
        })
        .map_or("Custom", |(name, _)| name)
}
