//! Name validation for groups, clients and secrets.
//!
//! Names may contain ASCII letters, digits, underscore, hyphen and dot.
//! Anything else, including whitespace, is rejected before any remote call.

use crate::error::{Result, ValidationError};

/// Returns `true` if `name` is an acceptable group, client or secret name.
pub fn validate(name: &str) -> bool {
    !name.is_empty() && name.chars().all(is_name_char)
}

/// Validate a name, describing the first offending character on failure.
///
/// # Arguments
///
/// * `field` - What the name identifies (`group`, `client`, `secret`)
/// * `name` - The raw operator-supplied string
///
/// # Errors
///
/// Returns `ValidationError::InvalidName` if the name is empty or contains
/// a disallowed character.
pub fn require_valid_name(field: &'static str, name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(ValidationError::InvalidName {
            field,
            name: name.to_string(),
            reason: "cannot be empty".to_string(),
        }
        .into());
    }

    if let Some((i, ch)) = name.chars().enumerate().find(|(_, ch)| !is_name_char(*ch)) {
        return Err(ValidationError::InvalidName {
            field,
            name: name.to_string(),
            reason: format!(
                "invalid character '{}' at position {}. Only letters, digits, '_', '-' and '.' are allowed",
                ch,
                i + 1
            ),
        }
        .into());
    }

    Ok(())
}

fn is_name_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '_' | '-' | '.')
}
