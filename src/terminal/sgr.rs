//! SGR Parameter Interpreter
//!
//! Applies the numeric parameters of one `m`-terminated sequence to a
//! [`StyleState`], left to right.

use crate::ansi::resolve_8bit;
use crate::models::{ColorSpec, Rgb, StyleState};

/// Extended color introducer mode for 8-bit palette colors
const MODE_PALETTE: u32 = 5;
/// Extended color introducer mode for 24-bit colors
const MODE_RGB: u32 = 2;

/// Which color channel a directive targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Channel {
    Foreground,
    Background,
}

impl Channel {
    fn set(self, state: &mut StyleState, color: Option<ColorSpec>) {
        match self {
            Channel::Foreground => state.foreground = color,
            Channel::Background => state.background = color,
        }
    }
}

/// Interprets SGR parameter lists
#[derive(Debug, Clone, Copy, Default)]
pub struct SgrInterpreter {
    /// Map 90-97 / 100-107 onto basic slots 8-15
    bright_colors: bool,
}

impl SgrInterpreter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bright_colors(bright_colors: bool) -> Self {
        Self { bright_colors }
    }

    /// Apply `params` to `state` and return the resulting state
    ///
    /// An extended color directive (38/48) always ends processing of the
    /// sequence, whether or not its color was valid.
    pub fn apply(&self, mut state: StyleState, params: &[u32]) -> StyleState {
        let mut i = 0;
        while i < params.len() {
            let code = params[i];
            match code {
                0 => state.reset(),
                1 => state.bold = true,
                3 => state.italic = true,
                4 => state.underline = true,
                30..=37 => state.foreground = Some(ColorSpec::Basic((code - 30) as u8)),
                39 => state.foreground = None,
                40..=47 => state.background = Some(ColorSpec::Basic((code - 40) as u8)),
                49 => state.background = None,
                38 | 48 => {
                    let channel = if code == 38 {
                        Channel::Foreground
                    } else {
                        Channel::Background
                    };
                    match extended_color(&params[i + 1..]) {
                        Some(color) => channel.set(&mut state, Some(color)),
                        None => trace!("Dropping malformed extended color in {:?}", params),
                    }
                    break;
                }
                90..=97 if self.bright_colors => {
                    state.foreground = Some(ColorSpec::Basic((code - 90 + 8) as u8))
                }
                100..=107 if self.bright_colors => {
                    state.background = Some(ColorSpec::Basic((code - 100 + 8) as u8))
                }
                _ => {
                    // Unknown code, ignore
                }
            }
            i += 1;
        }
        state
    }
}

/// Decode the parameters following a 38/48 introducer
fn extended_color(rest: &[u32]) -> Option<ColorSpec> {
    match rest {
        [MODE_PALETTE, index, ..] => palette_color(*index),
        [MODE_RGB, r, g, b, ..] => Some(ColorSpec::Custom(Rgb::new(
            channel_byte(*r)?,
            channel_byte(*g)?,
            channel_byte(*b)?,
        ))),
        _ => None,
    }
}

fn palette_color(index: u32) -> Option<ColorSpec> {
    match index {
        0..=15 => Some(ColorSpec::Basic(index as u8)),
        _ => resolve_8bit(index).map(ColorSpec::Custom),
    }
}

fn channel_byte(value: u32) -> Option<u8> {
    u8::try_from(value).ok()
}
