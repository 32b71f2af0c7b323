//! Rgba type, the color representation used by track bar appearances.
//!
//! Stores 8-bit RGBA and parses hex strings so appearances can be written
//! in TOML. Converted to a peniko color only at paint time.

use std::str::FromStr;

use floem::peniko::Color;
use serde::Deserialize;

use crate::error::ConfigError;

/// 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::rgba(0, 0, 0, 0);
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);

    /// Opaque color from 0–255 components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a hex string (with or without `#`, 3, 6, or 8 chars).
    ///
    /// 8-char hex is interpreted as RRGGBBAA. 3 and 6-char hex default to full opacity.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let stripped = hex.trim().trim_start_matches('#');
        if !stripped.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let byte = |i: usize| u8::from_str_radix(&stripped[i..i + 2], 16).ok();
        let nibble = |i: usize| Some(u8::from_str_radix(&stripped[i..=i], 16).ok()? * 17);
        match stripped.len() {
            3 => Some(Self::rgb(nibble(0)?, nibble(1)?, nibble(2)?)),
            6 => Some(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Some(Self::rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => None,
        }
    }

    /// Blend toward white by `amount` (0.0–1.0). Alpha is kept.
    pub fn lighten(&self, amount: f64) -> Self {
        self.mix(Rgba::WHITE, amount)
    }

    /// Blend toward black by `amount` (0.0–1.0). Alpha is kept.
    pub fn darken(&self, amount: f64) -> Self {
        self.mix(Rgba::BLACK, amount)
    }

    fn mix(&self, other: Rgba, amount: f64) -> Self {
        let t = amount.clamp(0.0, 1.0);
        let ch = |a: u8, b: u8| ((1.0 - t) * a as f64 + t * b as f64 + 0.5) as u8;
        Self {
            r: ch(self.r, other.r),
            g: ch(self.g, other.g),
            b: ch(self.b, other.b),
            a: self.a,
        }
    }

    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }

    pub fn to_color(self) -> Color {
        Color::rgba8(self.r, self.g, self.b, self.a)
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Rgba::BLACK
    }
}

impl FromStr for Rgba {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rgba::from_hex(s).ok_or_else(|| ConfigError::InvalidColor(s.to_string()))
    }
}

impl TryFrom<String> for Rgba {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgba> for Color {
    fn from(c: Rgba) -> Self {
        c.to_color()
    }
}
