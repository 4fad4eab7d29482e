//! Test support utilities for keywhiz integration tests.
//!
//! Provides an isolated environment and helper commands.

#![allow(dead_code)]

pub mod commands;
pub mod server;

#[allow(unused_imports)]
pub use assertions::*;

use std::path::PathBuf;
use tempfile::TempDir;

/// Server address nothing listens on.
pub const UNREACHABLE_SERVER: &str = "http://127.0.0.1:1";

/// Test environment with an isolated home directory.
///
/// Child processes get `HOME` pointed at a temp dir and every `KEYWHIZ_*`
/// variable removed, so tests can safely run in parallel.
pub struct Test {
    /// Temporary home directory
    pub home: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let home = TempDir::new().expect("failed to create temp home");
        Self { home }
    }

    /// Create a test environment with `~/.keywhiz/config.toml` written.
    pub fn with_config(contents: &str) -> Self {
        let t = Self::new();
        let dir = t.home.path().join(".keywhiz");
        std::fs::create_dir_all(&dir).expect("failed to create config dir");
        std::fs::write(dir.join("config.toml"), contents).expect("failed to write config");
        t
    }

    /// Path of a file inside the temp home.
    pub fn path(&self, name: &str) -> PathBuf {
        self.home.path().join(name)
    }
}
