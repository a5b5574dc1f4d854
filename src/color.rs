//! SolidColor type — the color representation shared by the palette model
//! and its views.
//!
//! Stores RGBA as f64 values in 0.0–1.0 range. Serializes as an uppercase
//! hex string so palette configs stay readable.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a hex color string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    #[error("invalid hex digit in color {0:?}")]
    InvalidDigit(String),
    #[error("hex color {0:?} must have 3, 6 or 8 digits")]
    InvalidLength(String),
}

/// RGBA color with components in the 0.0–1.0 range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SolidColor {
    r: f64,
    g: f64,
    b: f64,
    a: f64,
}

impl SolidColor {
    pub const WHITE: Self = Self::gray_level(1.0);
    pub const GRAY: Self = Self::gray_level(0.5);
    pub const DARK_GRAY: Self = Self::gray_level(1.0 / 3.0);
    pub const BLACK: Self = Self::gray_level(0.0);
    pub const ORANGE: Self = Self::from_rgba(1.0, 0.5, 0.0, 1.0);
    pub const YELLOW: Self = Self::from_rgba(1.0, 1.0, 0.0, 1.0);
    pub const GREEN: Self = Self::from_rgba(0.0, 1.0, 0.0, 1.0);
    /// Fully transparent black.
    pub const CLEAR: Self = Self::from_rgba(0.0, 0.0, 0.0, 0.0);

    const fn gray_level(v: f64) -> Self {
        Self::from_rgba(v, v, v, 1.0)
    }

    /// Red component (0.0–1.0).
    pub fn r(&self) -> f64 {
        self.r
    }
    /// Green component (0.0–1.0).
    pub fn g(&self) -> f64 {
        self.g
    }
    /// Blue component (0.0–1.0).
    pub fn b(&self) -> f64 {
        self.b
    }
    /// Alpha component (0.0–1.0).
    pub fn a(&self) -> f64 {
        self.a
    }

    /// True when the color paints nothing (alpha is zero).
    pub fn is_clear(&self) -> bool {
        self.a <= 0.0
    }

    /// Create from f64 RGBA (all 0.0–1.0).
    pub const fn from_rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Create from 0–255 RGB values with full opacity.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0, 1.0)
    }

    /// Same color with its alpha multiplied by `opacity`.
    pub fn with_opacity(&self, opacity: f64) -> Self {
        Self {
            a: self.a * opacity.clamp(0.0, 1.0),
            ..*self
        }
    }

    /// Convert to the Floem paint color.
    pub fn to_paint(&self) -> floem::peniko::Color {
        floem::peniko::Color::rgba(self.r, self.g, self.b, self.a)
    }

    fn channel8(v: f64) -> u8 {
        (v.clamp(0.0, 1.0) * 255.0).round() as u8
    }

    /// Parse a hex string (with or without `#`, 3, 6, or 8 chars).
    ///
    /// 8-char hex is interpreted as RRGGBBAA. 3 and 6-char hex default to full opacity.
    pub fn from_hex(hex: &str) -> Result<Self, ParseColorError> {
        let stripped = hex.trim_start_matches('#');
        if !stripped.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidDigit(hex.to_string()));
        }
        let digits: Vec<u8> = match stripped.len() {
            3 => stripped
                .chars()
                .filter_map(|c| c.to_digit(16))
                .map(|d| d as u8 * 17)
                .collect(),
            6 | 8 => (0..stripped.len())
                .step_by(2)
                .filter_map(|i| u8::from_str_radix(&stripped[i..i + 2], 16).ok())
                .collect(),
            _ => return Err(ParseColorError::InvalidLength(hex.to_string())),
        };
        let channel = |i: usize| digits.get(i).map_or(255, |v| *v) as f64 / 255.0;
        Ok(Self::from_rgba(channel(0), channel(1), channel(2), channel(3)))
    }

    /// Format as uppercase hex (no `#` prefix).
    ///
    /// Returns 6 chars (RRGGBB) for opaque colors and 8 chars (RRGGBBAA)
    /// otherwise, so [`SolidColor::CLEAR`] keeps its alpha.
    pub fn to_hex(&self) -> String {
        let (r, g, b) = (
            Self::channel8(self.r),
            Self::channel8(self.g),
            Self::channel8(self.b),
        );
        if (self.a - 1.0).abs() < 0.001 {
            format!("{:02X}{:02X}{:02X}", r, g, b)
        } else {
            format!("{:02X}{:02X}{:02X}{:02X}", r, g, b, Self::channel8(self.a))
        }
    }
}

impl Default for SolidColor {
    fn default() -> Self {
        Self::BLACK
    }
}

impl TryFrom<String> for SolidColor {
    type Error = ParseColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<SolidColor> for String {
    fn from(color: SolidColor) -> Self {
        color.to_hex()
    }
}
