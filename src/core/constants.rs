//! Constants used throughout keywhiz-cli.
//!
//! Centralizes environment variable names, defaults and API paths.

/// Directory holding CLI state relative to HOME (~/.keywhiz).
pub const CONFIG_DIR: &str = ".keywhiz";

/// Configuration file name inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "config.toml";

/// Environment variable selecting the log filter.
pub const LOG_ENV: &str = "KEYWHIZ_LOG";

/// Environment variable for the server base URL.
pub const SERVER_ENV: &str = "KEYWHIZ_SERVER";

/// Environment variable for the config file path.
pub const CONFIG_ENV: &str = "KEYWHIZ_CONFIG";

/// Environment variable for the session cookie value.
pub const SESSION_ENV: &str = "KEYWHIZ_SESSION";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Name of the session cookie sent to the server.
pub const SESSION_COOKIE: &str = "session";

/// Admin API paths.
pub mod api {
    pub const GROUPS: &str = "/admin/groups";
    pub const CLIENTS: &str = "/admin/clients";
    pub const SECRETS: &str = "/admin/secrets";
    pub const CLIENT_MEMBERSHIPS: &str = "/admin/memberships/clients";
    pub const SECRET_MEMBERSHIPS: &str = "/admin/memberships/secrets";
}
