//! Error types.
//!
//! Every failure surfaces as one of the [`ErrorKind`] categories. Validation
//! errors never wrap network errors, and remote errors are passed through
//! unclassified.

use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    #[error(transparent)]
    Remote(#[from] RemoteError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Coarse error category reported to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    NotFound,
    RemoteFailure,
    Config,
    Io,
}

impl Error {
    /// Category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Validation(_) => ErrorKind::InvalidArgument,
            Error::NotFound(_) => ErrorKind::NotFound,
            Error::Remote(_) => ErrorKind::RemoteFailure,
            Error::Config(_) => ErrorKind::Config,
            Error::Io(_) => ErrorKind::Io,
        }
    }

    /// `true` if a lookup missed.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ErrorKind::InvalidArgument => "invalid argument",
            ErrorKind::NotFound => "not found",
            ErrorKind::RemoteFailure => "remote failure",
            ErrorKind::Config => "config",
            ErrorKind::Io => "io",
        };
        f.write_str(s)
    }
}

/// Rejected operator input. Always raised before any remote call.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("invalid argument: no assignment type given (expected one of: client, secret)")]
    MissingKind,

    #[error("invalid argument: expected exactly one assignment type, got {0}")]
    TooManyKinds(usize),

    #[error("invalid argument: unsupported assignment type '{0}' (expected one of: client, secret)")]
    UnsupportedKind(String),

    #[error("invalid argument: invalid {field} name '{name}': {reason}")]
    InvalidName {
        field: &'static str,
        name: String,
        reason: String,
    },

    #[error("invalid argument: malformed secret name '{name}': {reason}")]
    MalformedSecretName { name: String, reason: String },
}

/// A named object is absent from the remote store.
#[derive(Error, Debug)]
pub enum NotFoundError {
    #[error("group not found: {0}")]
    Group(String),

    #[error("client not found: {0}")]
    Client(String),

    #[error("secret not found: {0}")]
    Secret(String),
}

/// Failures reported by the remote directory or its transport.
#[derive(Error, Debug)]
pub enum RemoteError {
    #[error("{method} {path} failed with status {status}")]
    Status {
        method: &'static str,
        path: String,
        status: u16,
    },

    #[error("request to {path} failed: {message}")]
    Transport { path: String, message: String },

    #[error("unexpected response from {path}: {message}")]
    Decode { path: String, message: String },
}

impl RemoteError {
    /// `true` for 401/403 responses.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, RemoteError::Status { status: 401 | 403, .. })
    }
}

/// Configuration loading and validation errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("no server configured")]
    MissingServer,

    #[error("config file not found: {0}")]
    NotFound(String),

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
