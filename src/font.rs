//! Font sources and loading.
//!
//! The crate ships a bundled default face so an avatar can always be built
//! without any filesystem setup; callers can substitute their own TrueType
//! or OpenType file at construction. Fonts are parsed eagerly so a bad font
//! fails construction, never a later render.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AvatarError, Result};

/// The bundled default face, embedded at compile time.
static BUNDLED_FONT: &[u8] = include_bytes!("../fonts/DejaVuSans-Bold.ttf");

const BUNDLED_FONT_NAME: &str = "DejaVuSans-Bold.ttf (bundled)";

/// Font file extensions the loader accepts.
const SUPPORTED_FONT_EXTENSIONS: [&str; 2] = ["ttf", "otf"];

// ============================================================================
// FontSource
// ============================================================================

/// Where the avatar's font comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FontSource {
    /// The bundled default face (DejaVu Sans Bold).
    #[default]
    Bundled,

    /// A caller-supplied `.ttf` or `.otf` file.
    File(PathBuf),
}

impl FontSource {
    /// Creates a source for a caller-supplied font file.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::File(path.into())
    }

    /// Loads and parses the font.
    ///
    /// File sources are validated in order: the extension must be `.ttf` or
    /// `.otf`, the file must be readable, and the bytes must parse as a
    /// font. Each failure is a [`AvatarError::FontLoad`] naming the path.
    pub fn load(&self) -> Result<fontdue::Font> {
        match self {
            Self::Bundled => parse_font(BUNDLED_FONT).map_err(|reason| AvatarError::FontLoad {
                path: PathBuf::from(BUNDLED_FONT_NAME),
                reason,
            }),
            Self::File(path) => {
                check_extension(path)?;
                let bytes = fs::read(path).map_err(|e| AvatarError::FontLoad {
                    path: path.clone(),
                    reason: e.to_string(),
                })?;
                log::debug!("loaded font file {} ({} bytes)", path.display(), bytes.len());
                parse_font(&bytes).map_err(|reason| AvatarError::FontLoad {
                    path: path.clone(),
                    reason,
                })
            }
        }
    }
}

fn check_extension(path: &Path) -> Result<()> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some(ext) if SUPPORTED_FONT_EXTENSIONS.contains(&ext) => Ok(()),
        _ => Err(AvatarError::FontLoad {
            path: path.to_path_buf(),
            reason: "unsupported font extension (supported: .ttf, .otf)".into(),
        }),
    }
}

fn parse_font(bytes: &[u8]) -> std::result::Result<fontdue::Font, String> {
    fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default()).map_err(str::to_string)
}

// ============================================================================
// Tests
// ============================================================================
