//! letter-avatar: deterministic single-letter placeholder avatars
//!
//! This crate generates a placeholder avatar from an identity string (for
//! example a username): it derives a single display letter and a background
//! color, composes the letter centered on a colored square canvas, and
//! exports the result as raw encoded bytes, a base64 data URI, or a file.
//!
//! # Example
//!
//! ```
//! use letter_avatar::{Avatar, AvatarOptions, ImageFormat};
//!
//! let options = AvatarOptions::new().with_size(250).with_color((191, 91, 81));
//! let mut avatar = Avatar::with_options("smallwat3r", options)?;
//!
//! assert_eq!(avatar.letter(), 'S');
//!
//! // Raw encoded bytes in a named format
//! let png = avatar.stream(ImageFormat::Png)?;
//! assert!(png.starts_with(&[0x89, b'P', b'N', b'G']));
//!
//! // Base64 data URI, usable directly as an HTML image source
//! let uri = avatar.base64_image(ImageFormat::Jpeg)?;
//! assert!(uri.starts_with("data:image/jpeg;base64,"));
//!
//! // Pick a new random background and recompose
//! avatar.randomize_color();
//! # Ok::<(), letter_avatar::AvatarError>(())
//! ```
//!
//! # Serializable Options
//!
//! Construction options round-trip through JSON, so option sets can be
//! stored or sent between processes:
//!
//! ```
//! use letter_avatar::AvatarOptions;
//!
//! let options = AvatarOptions::from_json(r##"{"size": 64, "color": "#336699"}"##).unwrap();
//! assert_eq!(options.size, 64);
//! ```

mod avatar;
mod color;
mod compose;
mod error;
mod font;
mod format;
mod identity;
mod options;

pub use avatar::Avatar;
pub use color::{Color, ColorSpec, Rgb, parse_hex};
pub use error::{AvatarError, Result};
pub use font::FontSource;
pub use format::ImageFormat;
pub use identity::display_char;
pub use options::{AvatarOptions, DEFAULT_SIZE};
