//! Background color resolution.
//!
//! Colors enter the crate in one of three modes: a hex string (with or
//! without a leading `#`), an RGB triple, or "no color" which draws a
//! uniformly random triple from the caller's RNG. Whatever the input mode,
//! compositing always works on the canonical RGB form; the original
//! representation is kept so accessors can hand back exactly what the
//! caller supplied.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{AvatarError, Result};

// ============================================================================
// Rgb
// ============================================================================

/// An RGB triple, one byte per channel.
///
/// Serializes as a three-element array (`[191, 91, 81]`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Creates a new RGB triple.
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a triple from dynamically supplied channel values, validating
    /// both arity and range.
    ///
    /// This is the entry point for inputs that cannot be typed as `u8`
    /// up front (e.g. values parsed from user-facing config).
    pub fn from_channels(channels: &[u32]) -> Result<Self> {
        if channels.len() != 3 {
            return Err(AvatarError::InvalidColor(format!(
                "expected 3 color channels, got {}",
                channels.len()
            )));
        }
        for &value in channels {
            if value > 255 {
                return Err(AvatarError::InvalidColor(format!(
                    "channel value {value} out of range 0-255"
                )));
            }
        }
        Ok(Self::new(
            channels[0] as u8,
            channels[1] as u8,
            channels[2] as u8,
        ))
    }

    /// Returns the channels as a `(r, g, b)` tuple.
    pub fn channels(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(rgb: Rgb) -> Self {
        [rgb.r, rgb.g, rgb.b]
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}

// ============================================================================
// ColorSpec
// ============================================================================

/// A background color as the caller provided it.
///
/// This is the input-side representation: a hex string stays a hex string
/// and an RGB triple stays a triple, so color read-back reflects whatever
/// form was last set.
///
/// Serializes untagged: a JSON string is a hex color, a three-element
/// array is an RGB triple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Hex string, 6 hex digits with an optional leading `#`.
    Hex(String),
    /// RGB triple.
    Rgb(Rgb),
}

impl From<&str> for ColorSpec {
    fn from(hex: &str) -> Self {
        Self::Hex(hex.to_string())
    }
}

impl From<String> for ColorSpec {
    fn from(hex: String) -> Self {
        Self::Hex(hex)
    }
}

impl From<Rgb> for ColorSpec {
    fn from(rgb: Rgb) -> Self {
        Self::Rgb(rgb)
    }
}

impl From<(u8, u8, u8)> for ColorSpec {
    fn from(channels: (u8, u8, u8)) -> Self {
        Self::Rgb(channels.into())
    }
}

impl From<[u8; 3]> for ColorSpec {
    fn from(channels: [u8; 3]) -> Self {
        Self::Rgb(channels.into())
    }
}

impl fmt::Display for ColorSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hex(hex) => f.write_str(hex),
            Self::Rgb(rgb) => rgb.fmt(f),
        }
    }
}

// ============================================================================
// Color
// ============================================================================

/// A validated background color.
///
/// Holds both the caller's original representation (for read-back) and the
/// canonical RGB form (for compositing). Construction validates the input,
/// so `rgb()` is always cheap and infallible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Color {
    spec: ColorSpec,
    rgb: Rgb,
}

impl Color {
    /// Validates a color spec and resolves its canonical RGB form.
    pub fn resolve(spec: ColorSpec) -> Result<Self> {
        let rgb = match &spec {
            ColorSpec::Hex(hex) => parse_hex(hex)?,
            ColorSpec::Rgb(rgb) => *rgb,
        };
        Ok(Self { spec, rgb })
    }

    /// Draws a random color, each channel independently uniform in [0, 255].
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let rgb = Rgb::new(rng.random(), rng.random(), rng.random());
        Self {
            spec: ColorSpec::Rgb(rgb),
            rgb,
        }
    }

    /// The canonical RGB form used for compositing.
    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    /// The color as the caller provided it.
    pub fn spec(&self) -> &ColorSpec {
        &self.spec
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.spec.fmt(f)
    }
}

// ============================================================================
// Hex parsing
// ============================================================================

/// Parses a 6-digit hex color, with or without a leading `#`.
pub fn parse_hex(hex: &str) -> Result<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 {
        return Err(AvatarError::InvalidColor(format!(
            "`{hex}` must have exactly 6 hex digits"
        )));
    }
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(AvatarError::InvalidColor(format!(
            "`{hex}` contains non-hex characters"
        )));
    }
    let channel = |range| {
        u8::from_str_radix(&digits[range], 16)
            .map_err(|e| AvatarError::InvalidColor(format!("`{hex}`: {e}")))
    };
    Ok(Rgb::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

// ============================================================================
// Tests
// ============================================================================
