//! keywhiz-cli - assign clients and secrets to Keywhiz groups.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── assign        # assign / unassign commands
//! │   ├── completions   # Shell completions
//! │   └── output        # Terminal output helpers
//! └── core/             # Core library components
//!     ├── assign        # Assignment orchestrator
//!     ├── config        # ~/.keywhiz/config.toml management
//!     ├── directory/    # Remote directory backends
//!     │   ├── mod       # RemoteDirectory trait
//!     │   └── http      # Keywhiz admin API over HTTP
//!     ├── domain/       # Groups, clients, secrets, memberships
//!     ├── secret_name   # name..version display names
//!     └── validation    # Name validation
//! ```

pub mod cli;
pub mod core;
pub mod error;
