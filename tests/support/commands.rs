//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a keywhiz command with an isolated environment.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("keywhiz").expect("failed to find keywhiz binary");
        cmd.env("HOME", self.home.path());
        // Windows uses USERPROFILE instead of HOME for home directory
        cmd.env("USERPROFILE", self.home.path());
        cmd.env("NO_COLOR", "1");
        for var in [
            "KEYWHIZ_SERVER",
            "KEYWHIZ_CONFIG",
            "KEYWHIZ_SESSION",
            "KEYWHIZ_LOG",
        ] {
            cmd.env_remove(var);
        }
        cmd.current_dir(self.home.path());
        cmd
    }

    /// Shortcut for `keywhiz assign --type <kind> <name> --group <group>`.
    pub fn assign(&self, kind: &str, name: &str, group: &str) -> Output {
        self.cmd()
            .args(["assign", "--type", kind, name, "--group", group])
            .output()
            .expect("failed to run keywhiz assign")
    }

    /// Shortcut for `keywhiz unassign --type <kind> <name> --group <group>`.
    pub fn unassign(&self, kind: &str, name: &str, group: &str) -> Output {
        self.cmd()
            .args(["unassign", "--type", kind, name, "--group", group])
            .output()
            .expect("failed to run keywhiz unassign")
    }

    /// `assign` against a server that refuses connections.
    pub fn assign_unreachable(&self, kind: &str, name: &str, group: &str) -> Output {
        self.cmd()
            .args([
                "--server",
                super::UNREACHABLE_SERVER,
                "assign",
                "--type",
                kind,
                name,
                "--group",
                group,
            ])
            .output()
            .expect("failed to run keywhiz assign")
    }
}
