//! Secret display names.
//!
//! A secret is addressed remotely by `(name, version)` but shown to operators
//! as one string: `name` for the current version, `name..version` otherwise.
//! Base names never contain `..` and versions are alphanumeric, so the last
//! `..` in a display name is always the split point.

use crate::core::types::{SecretName, Version};
use crate::core::validation;
use crate::error::{Result, ValidationError};

/// Separator between base name and version token.
pub const VERSION_DELIMITER: &str = "..";

/// Build the display name for a secret.
pub fn format_display_name(name: &str, version: &str) -> String {
    if version.is_empty() {
        name.to_string()
    } else {
        format!("{}{}{}", name, VERSION_DELIMITER, version)
    }
}

/// Split a display name into `(name, version)`.
///
/// No delimiter yields an empty version.
///
/// # Errors
///
/// Returns `ValidationError::MalformedSecretName` if either side of the
/// delimiter is empty or the delimiter appears more than once.
pub fn parse(display: &str) -> Result<(SecretName, Version)> {
    let Some((name, version)) = display.rsplit_once(VERSION_DELIMITER) else {
        return Ok((display.to_string(), String::new()));
    };

    if name.contains(VERSION_DELIMITER) {
        return Err(malformed(display, "more than one version delimiter"));
    }
    if name.is_empty() {
        return Err(malformed(display, "missing name before '..'"));
    }
    if version.is_empty() {
        return Err(malformed(display, "missing version after '..'"));
    }

    Ok((name.to_string(), version.to_string()))
}

/// Validate a display name as typed, then parse it and check the version.
///
/// # Errors
///
/// Returns `ValidationError` if the display name fails name validation, is
/// malformed, or carries a version token that is not ASCII alphanumeric.
pub fn parse_validated(display: &str) -> Result<(SecretName, Version)> {
    validation::require_valid_name("secret", display)?;
    let (name, version) = parse(display)?;

    if let Some(ch) = version.chars().find(|c| !c.is_ascii_alphanumeric()) {
        return Err(malformed(
            display,
            &format!("invalid character '{}' in version", ch),
        ));
    }

    Ok((name, version))
}

fn malformed(display: &str, reason: &str) -> crate::error::Error {
    ValidationError::MalformedSecretName {
        name: display.to_string(),
        reason: reason.to_string(),
    }
    .into()
}
