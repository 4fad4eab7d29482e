//! Assignment kind.

use std::str::FromStr;

use crate::error::{Error, Result, ValidationError};

/// What is being assigned to a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssignmentKind {
    Client,
    Secret,
}

impl AssignmentKind {
    /// Resolve the kind from raw operator tokens.
    ///
    /// Exactly one recognized token is required.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if no token, several tokens, or an unknown
    /// token is given.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<Self> {
        let tokens: Vec<&str> = tokens
            .iter()
            .map(|t| t.as_ref().trim())
            .filter(|t| !t.is_empty())
            .collect();

        match tokens.as_slice() {
            [] => Err(ValidationError::MissingKind.into()),
            [token] => token.parse(),
            many => Err(ValidationError::TooManyKinds(many.len()).into()),
        }
    }

    /// Token used on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            AssignmentKind::Client => "client",
            AssignmentKind::Secret => "secret",
        }
    }
}

impl FromStr for AssignmentKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "client" => Ok(AssignmentKind::Client),
            "secret" => Ok(AssignmentKind::Secret),
            other => Err(ValidationError::UnsupportedKind(other.to_string()).into()),
        }
    }
}

impl std::fmt::Display for AssignmentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
