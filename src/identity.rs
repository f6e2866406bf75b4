//! Identity normalization: input string to display character.

use crate::error::{AvatarError, Result};

/// Derives the single display character from an identity string.
///
/// The string is trimmed, the first remaining character is taken, and it is
/// uppercased unless `capitalize` is false. Fails if nothing is left after
/// trimming.
pub fn display_char(text: &str, capitalize: bool) -> Result<char> {
    let first = text.trim().chars().next().ok_or_else(|| {
        AvatarError::InvalidInput("identity string is empty or whitespace-only".into())
    })?;
    if capitalize {
        // to_uppercase can expand to multiple chars (e.g. ß -> SS);
        // a single-letter avatar keeps only the first.
        Ok(first.to_uppercase().next().unwrap_or(first))
    } else {
        Ok(first)
    }
}
