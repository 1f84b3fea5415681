//! ANSI color utilities
//!
//! Palette lookups shared by the SGR interpreter and the theme layer.

use crate::models::Rgb;

/// Names of the 16 basic color slots, in SGR order
pub const BASIC_COLOR_NAMES: [&str; 16] = [
    "black",
    "red",
    "green",
    "yellow",
    "blue",
    "magenta",
    "cyan",
    "white",
    "bright_black",
    "bright_red",
    "bright_green",
    "bright_yellow",
    "bright_blue",
    "bright_magenta",
    "bright_cyan",
    "bright_white",
];

/// First index of the 6x6x6 color cube
const CUBE_START: u32 = 16;
/// First index of the grayscale ramp
const GRAY_START: u32 = 232;
/// Last valid palette index
const PALETTE_END: u32 = 255;

/// Name of a basic color slot (0-15)
pub fn basic_color_name(index: u8) -> Option<&'static str> {
    BASIC_COLOR_NAMES.get(index as usize).copied()
}

/// Label for a basic color slot in log output, e.g. `red (1)`
pub fn basic_color_label(index: u8) -> String {
    match basic_color_name(index) {
        Some(name) => format!("{} ({})", name, index),
        None => format!("slot {}", index),
    }
}

/// Resolve an 8-bit palette index to RGB
///
/// Only the cube (16-231) and grayscale ramp (232-255) have fixed values.
/// Indices 0-15 are theme slots and resolve to `None` here, as does
/// anything past 255.
pub fn resolve_8bit(index: u32) -> Option<Rgb> {
    match index {
        CUBE_START..=231 => {
            let v = index - CUBE_START;
            Some(Rgb::new(
                cube_level(v / 36),
                cube_level((v / 6) % 6),
                cube_level(v % 6),
            ))
        }
        GRAY_START..=PALETTE_END => {
            let level = (index - GRAY_START) as f64;
            let gray = (level / 23.0 * 255.0).round() as u8;
            Some(Rgb::new(gray, gray, gray))
        }
        _ => None,
    }
}

/// Map a cube level (0-5) onto 0-255
fn cube_level(level: u32) -> u8 {
    ((level * 255) as f64 / 5.0).round() as u8
}
