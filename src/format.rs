//! Export format names and their mapping to the image codec.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::{AvatarError, Result};

/// A raster format the avatar can be exported to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Bmp,
    Gif,
    Ico,
}

impl ImageFormat {
    /// All supported formats.
    pub const ALL: [Self; 5] = [Self::Png, Self::Jpeg, Self::Bmp, Self::Gif, Self::Ico];

    /// Parses a format name, case-insensitively. `jpg` is accepted as an
    /// alias for JPEG.
    pub fn from_name(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "png" => Ok(Self::Png),
            "jpeg" | "jpg" => Ok(Self::Jpeg),
            "bmp" => Ok(Self::Bmp),
            "gif" => Ok(Self::Gif),
            "ico" => Ok(Self::Ico),
            _ => Err(AvatarError::UnsupportedFormat(name.to_string())),
        }
    }

    /// Infers the format from a file path's extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| AvatarError::UnsupportedFormat(path.display().to_string()))?;
        Self::from_name(extension)
    }

    /// The canonical lowercase name, as used in data URIs and file
    /// extensions.
    pub fn name(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpeg",
            Self::Bmp => "bmp",
            Self::Gif => "gif",
            Self::Ico => "ico",
        }
    }

    /// The corresponding codec-side format.
    pub(crate) fn to_image(self) -> image::ImageFormat {
        match self {
            Self::Png => image::ImageFormat::Png,
            Self::Jpeg => image::ImageFormat::Jpeg,
            Self::Bmp => image::ImageFormat::Bmp,
            Self::Gif => image::ImageFormat::Gif,
            Self::Ico => image::ImageFormat::Ico,
        }
    }
}

impl FromStr for ImageFormat {
    type Err = AvatarError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Tests
// ============================================================================
