//! `Rgb` type and hex parsing.
//!
//! Accepts exactly six hex digits with an optional single `#` prefix.
//! Formatting is always uppercase with the `#` prefix.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ColorError;
use crate::math::{self, Hsl};

/// 8-bit sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    r: u8,
    g: u8,
    b: u8,
}

impl Rgb {
    /// Create from 0–255 channel values.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Red channel (0–255).
    pub fn r(&self) -> u8 {
        self.r
    }
    /// Green channel (0–255).
    pub fn g(&self) -> u8 {
        self.g
    }
    /// Blue channel (0–255).
    pub fn b(&self) -> u8 {
        self.b
    }

    /// Format as uppercase `#RRGGBB`.
    pub fn to_hex(&self) -> String {
        self.to_string()
    }

    /// Convert to HSL rounded to whole degrees and percent.
    pub fn to_hsl(&self) -> Hsl {
        math::rgb_to_hsl(self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ColorError::InvalidColorFormat(s.to_string());
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| invalid())
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Parse a `#RRGGBB` / `RRGGBB` string. Returns `None` for anything else.
pub fn parse_hex_color(input: &str) -> Option<Rgb> {
    input.parse().ok()
}
