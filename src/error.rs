//! Error types for avatar construction and export.

use std::path::PathBuf;

use thiserror::Error;

use crate::format::ImageFormat;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, AvatarError>;

/// Errors that can occur while building or exporting an avatar.
///
/// Every failure is raised synchronously at the call that caused it;
/// construction either fully succeeds or produces no avatar.
#[derive(Debug, Error)]
pub enum AvatarError {
    /// The identity string was empty or whitespace-only, or the requested
    /// canvas size was not a positive number of pixels.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A color was malformed: bad hex string, out-of-range channel, or
    /// wrong number of channels.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// The font resource could not be loaded.
    #[error("failed to load font {path}: {reason}")]
    FontLoad {
        /// The font path that was attempted.
        path: PathBuf,
        /// Why loading failed.
        reason: String,
    },

    /// An export format name or file extension was not recognized.
    #[error("unsupported image format `{0}` (supported: png, jpeg, bmp, gif, ico)")]
    UnsupportedFormat(String),

    /// The image codec rejected the canvas during encoding.
    #[error("failed to encode {format} image: {source}")]
    Encode {
        /// The format that was being encoded.
        format: ImageFormat,
        /// The underlying codec error.
        source: image::ImageError,
    },

    /// Writing the encoded avatar to disk failed.
    #[error("failed to write avatar to {path}: {source}")]
    FileWrite {
        /// The path that was attempted.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}
