//! Style State Model
//!
//! The cumulative style context carried across one parse pass, and the
//! color values it can hold.

use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// An explicit 24-bit color
///
/// Serializes as a `#RRGGBB` string so themes and snapshots stay readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create color from hex string (e.g., "#FF0000" or "FF0000")
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.trim_start_matches('#');
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(Error::InvalidHexColor(hex.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| Error::InvalidHexColor(hex.to_string()))
        };

        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Convert to hex string
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Rgb::from_hex(&hex).map_err(serde::de::Error::custom)
    }
}

/// Color applied to one channel (foreground or background)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorSpec {
    /// One of the 16 theme slots; the RGB value is decided at render time
    Basic(u8),
    /// Explicit RGB carried by the escape sequence
    Custom(Rgb),
}

impl ColorSpec {
    /// Theme slot, if this is a basic color
    pub fn basic_index(&self) -> Option<u8> {
        match self {
            ColorSpec::Basic(index) => Some(*index),
            ColorSpec::Custom(_) => None,
        }
    }

    /// Explicit RGB, if this is a custom color
    pub fn custom_rgb(&self) -> Option<Rgb> {
        match self {
            ColorSpec::Basic(_) => None,
            ColorSpec::Custom(rgb) => Some(*rgb),
        }
    }
}

/// Cumulative SGR style state
///
/// A fresh pass starts from [`StyleState::default`]: no flags, no colors.
/// The type is `Copy`, so a snapshot is just a value and can never alias
/// the live accumulator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StyleState {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub foreground: Option<ColorSpec>,
    pub background: Option<ColorSpec>,
}

impl StyleState {
    /// Fresh state with nothing applied
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear every flag and both colors (SGR 0)
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> StyleState {
        *self
    }

    /// Whether any flag or color is set
    pub fn is_styled(&self) -> bool {
        self.bold
            || self.italic
            || self.underline
            || self.foreground.is_some()
            || self.background.is_some()
    }
}
