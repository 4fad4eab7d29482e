//! Core library components.
//!
//! Name validation, secret display names, the remote directory seam and the
//! assignment orchestrator built on top of it.

pub mod assign;
pub mod config;
pub mod constants;
pub mod directory;
pub mod domain;
pub mod secret_name;
pub mod types;
pub mod validation;
