//! RGBA color values
//!
//! Colors travel through button descriptions as `#RRGGBB` or `#RRGGBBAA`
//! strings and are always written back in the 8-digit form.

use std::fmt;
use std::str::FromStr;

use image::Rgba;
use serde::{Deserialize, Serialize};

/// Errors produced when parsing a color string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorParseError {
    /// String does not start with `#`
    #[error("Color '{0}' must start with '#'")]
    MissingHash(String),

    /// Wrong number of hex digits
    #[error("Color '{0}' must have 6 or 8 hex digits")]
    InvalidLength(String),

    /// Non-hex character in the digits
    #[error("Color '{0}' contains invalid hex digits")]
    InvalidDigit(String),
}

/// Straight (non-premultiplied) 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel (255 = opaque)
    pub a: u8,
}

impl Color {
    /// Fully transparent black, the initial content of every raster buffer
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);
    /// Opaque black
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque white
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Opaque mid gray
    pub const GRAY: Self = Self::rgb(0x80, 0x80, 0x80);

    /// Create an opaque color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a color with explicit alpha
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with a different alpha
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Linear interpolation between two colors, `t` clamped to [0, 1]
    ///
    /// Channels are interpolated premultiplied by alpha, so a fade towards a
    /// transparent color keeps its hue instead of darkening.
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let (a0, a1) = (f32::from(self.a), f32::from(other.a));
        let alpha = a0 + (a1 - a0) * t;
        if alpha <= 0.0 {
            return Self::TRANSPARENT;
        }

        let mix = |c0: u8, c1: u8| -> u8 {
            let p0 = f32::from(c0) * a0;
            let p1 = f32::from(c1) * a1;
            ((p0 + (p1 - p0) * t) / alpha).round().clamp(0.0, 255.0) as u8
        };
        Self {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: alpha.round().clamp(0.0, 255.0) as u8,
        }
    }

    /// Pixel value for an `RgbaImage`
    pub const fn to_rgba(self) -> Rgba<u8> {
        Rgba([self.r, self.g, self.b, self.a])
    }

    /// Color of an `RgbaImage` pixel
    pub const fn from_rgba(px: Rgba<u8>) -> Self {
        let [r, g, b, a] = px.0;
        Self { r, g, b, a }
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHash(s.to_string()))?;

        if digits.len() != 6 && digits.len() != 8 {
            return Err(ColorParseError::InvalidLength(s.to_string()));
        }
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit(s.to_string()));
        }

        let channel = |i: usize| -> Result<u8, ColorParseError> {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| ColorParseError::InvalidDigit(s.to_string()))
        };

        let alpha = if digits.len() == 8 { channel(6)? } else { 255 };
        Ok(Self::rgba(channel(0)?, channel(2)?, channel(4)?, alpha))
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}
