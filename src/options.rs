//! Construction options for [`Avatar`](crate::Avatar).
//!
//! `AvatarOptions` captures everything configurable at construction time in
//! a serializable form, so option sets can be stored or sent between
//! processes as JSON.
//!
//! # Example
//!
//! ```
//! use letter_avatar::AvatarOptions;
//!
//! let options = AvatarOptions::new()
//!     .with_size(250)
//!     .with_color("#336699")
//!     .with_capitalize(false);
//!
//! let json = options.to_json().unwrap();
//! let restored = AvatarOptions::from_json(&json).unwrap();
//! assert_eq!(restored.size, 250);
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::color::ColorSpec;

/// Default canvas dimension in pixels.
pub const DEFAULT_SIZE: u32 = 120;

/// Options controlling avatar construction.
///
/// All fields have defaults; `{}` deserializes to the default set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AvatarOptions {
    /// Canvas dimension in pixels (the canvas is always square).
    pub size: u32,

    /// Whether to uppercase the display character.
    pub capitalize: bool,

    /// Background color. `None` means a random color is drawn.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorSpec>,

    /// Path to a `.ttf`/`.otf` font file. `None` means the bundled face.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<PathBuf>,

    /// Seed for the instance RNG, for reproducible random colors.
    /// `None` seeds from OS entropy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for AvatarOptions {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            capitalize: true,
            color: None,
            font: None,
            seed: None,
        }
    }
}

impl AvatarOptions {
    /// Creates the default option set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the canvas dimension in pixels.
    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    /// Sets whether the display character is uppercased.
    pub fn with_capitalize(mut self, capitalize: bool) -> Self {
        self.capitalize = capitalize;
        self
    }

    /// Sets the background color (hex string or RGB triple).
    pub fn with_color(mut self, color: impl Into<ColorSpec>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Sets a caller-supplied font file.
    pub fn with_font(mut self, path: impl Into<PathBuf>) -> Self {
        self.font = Some(path.into());
        self
    }

    /// Seeds the instance RNG for reproducible random colors.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Serializes the options to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserializes options from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    #[test]
    fn defaults() {
        let options = AvatarOptions::new();
        assert_eq!(options.size, DEFAULT_SIZE);
        assert!(options.capitalize);
        assert!(options.color.is_none());
        assert!(options.font.is_none());
        assert!(options.seed.is_none());
    }

    #[test]
    fn serde_roundtrip() {
        let options = AvatarOptions::new()
            .with_size(300)
            .with_color((1, 2, 3))
            .with_seed(99);

        let json = options.to_json().unwrap();
        let restored = AvatarOptions::from_json(&json).unwrap();

        assert_eq!(restored, options);
        assert_eq!(restored.color, Some(ColorSpec::Rgb(Rgb::new(1, 2, 3))));
    }

    #[test]
    fn empty_json_gives_defaults() {
        let options = AvatarOptions::from_json("{}").unwrap();
        assert_eq!(options, AvatarOptions::default());
    }

    #[test]
    fn json_uses_camel_case() {
        let json = AvatarOptions::new().with_capitalize(false).to_json().unwrap();
        assert!(json.contains("\"capitalize\":false"));
        assert!(json.contains("\"size\":120"));
    }

    #[test]
    fn hex_color_survives_json() {
        let json = AvatarOptions::new().with_color("#abcdef").to_json().unwrap();
        assert!(json.contains("\"#abcdef\""));

        let restored = AvatarOptions::from_json(&json).unwrap();
        assert_eq!(restored.color, Some(ColorSpec::Hex("#abcdef".into())));
    }
}
