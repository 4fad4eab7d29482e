//! Configuration management.
//!
//! Settings come from an optional TOML file (`~/.keywhiz/config.toml` by
//! default), overridden by command-line flags and environment variables.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;
use zeroize::Zeroizing;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// On-disk configuration file.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct File {
    server: Option<String>,
    timeout_secs: Option<u64>,
    session: Option<String>,
    user_agent: Option<String>,
}

/// Values supplied on the command line or through the environment.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    /// Explicit config file path. A missing explicit file is an error.
    pub config_path: Option<PathBuf>,
    pub server: Option<String>,
    pub session: Option<String>,
}

/// Resolved client configuration.
pub struct Config {
    server: Option<String>,
    timeout: Duration,
    session: Option<Zeroizing<String>>,
    user_agent: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("server", &self.server)
            .field("timeout", &self.timeout)
            .field("session", &self.session.as_ref().map(|_| "<redacted>"))
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: None,
            timeout: Duration::from_secs(constants::DEFAULT_TIMEOUT_SECS),
            session: None,
            user_agent: default_user_agent(),
        }
    }
}

impl Config {
    /// Default config file path (`~/.keywhiz/config.toml`).
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(constants::CONFIG_DIR).join(constants::CONFIG_FILE))
    }

    /// Load configuration, applying overrides on top of the file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if an explicitly given file is missing,
    /// `ConfigError::Parse` if the TOML is malformed, or
    /// `ConfigError::InvalidValue` if a value fails validation.
    pub fn load(overrides: Overrides) -> Result<Self> {
        let file = match &overrides.config_path {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound(path.display().to_string()).into());
                }
                Some(read_file(path)?)
            }
            None => match Self::default_path() {
                Some(path) if path.exists() => Some(read_file(&path)?),
                _ => None,
            },
        };

        let mut config = match file {
            Some(file) => Self::from_file(file),
            None => Self::default(),
        };

        if let Some(server) = overrides.server {
            config.server = Some(server);
        }
        if let Some(session) = overrides.session {
            config.session = Some(Zeroizing::new(session));
        }

        config.validate()?;
        debug!(server = ?config.server, timeout = ?config.timeout, "config loaded");

        Ok(config)
    }

    /// Parse configuration from TOML text without consulting overrides.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` or `ConfigError::InvalidValue`.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let file: File = toml::from_str(contents).map_err(ConfigError::Parse)?;
        let config = Self::from_file(file);
        config.validate()?;
        Ok(config)
    }

    fn from_file(file: File) -> Self {
        let defaults = Self::default();
        Self {
            server: file.server,
            timeout: file
                .timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
            session: file.session.map(Zeroizing::new),
            user_agent: file.user_agent.unwrap_or(defaults.user_agent),
        }
    }

    /// Validate the loaded values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` on a zero timeout or a server URL
    /// without an http(s) scheme.
    pub fn validate(&self) -> Result<()> {
        if self.timeout.is_zero() {
            return Err(ConfigError::InvalidValue {
                field: "timeout_secs",
                reason: "must be greater than zero".to_string(),
            }
            .into());
        }

        if let Some(server) = &self.server {
            if !(server.starts_with("http://") || server.starts_with("https://")) {
                return Err(ConfigError::InvalidValue {
                    field: "server",
                    reason: format!("expected an http:// or https:// URL, got '{}'", server),
                }
                .into());
            }
        }

        Ok(())
    }

    /// Server base URL without a trailing slash.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingServer` if no server is configured.
    pub fn server(&self) -> Result<&str> {
        self.server
            .as_deref()
            .map(|s| s.trim_end_matches('/'))
            .ok_or_else(|| ConfigError::MissingServer.into())
    }

    /// Request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Session cookie value, if any.
    pub fn session(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.as_str())
    }

    /// User-Agent header value.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

fn read_file(path: &Path) -> Result<File> {
    debug!(path = %path.display(), "reading config file");
    let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
    let file = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    Ok(file)
}

fn default_user_agent() -> String {
    format!("keywhiz-cli/{}", env!("CARGO_PKG_VERSION"))
}
