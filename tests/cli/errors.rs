//! Tests for help, version, completions and logging flags.

use crate::support::*;

#[test]
fn test_help() {
    let t = Test::new();

    let output = t.cmd().arg("--help").output().unwrap();
    assert_success(&output);
    let out = stdout(&output);
    assert!(out.contains("assign"));
    assert!(out.contains("unassign"));
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();

    let output = t.cmd().arg("unknown-command").output().unwrap();
    assert_failure(&output);
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    let output = t.cmd().arg("--version").output().unwrap();
    assert_success(&output);
    assert!(stdout(&output).contains("keywhiz"));
}

#[test]
fn test_missing_group_flag_fails() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["assign", "--type", "client", "web-1"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "--group");
}

#[test]
fn test_completions_bash_outputs_script() {
    let t = Test::new();

    let output = t.cmd().args(["completions", "bash"]).output().unwrap();
    assert_success(&output);
    let out = stdout(&output);
    assert!(out.contains("_keywhiz") || out.contains("complete"));
}

#[test]
fn test_completions_invalid_shell() {
    let t = Test::new();

    let output = t.cmd().args(["completions", "tcsh"]).output().unwrap();
    assert_failure(&output);
}

#[test]
fn test_verbose_flag_shows_debug_output() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["--verbose", "--server", UNREACHABLE_SERVER])
        .args(["assign", "--type", "client", "web-1", "--group", "web"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "DEBUG");
}

#[test]
fn test_default_no_log_output() {
    let t = Test::new();

    let output = t.assign_unreachable("client", "web-1", "web");
    assert_failure(&output);
    let err = stderr(&output);
    assert!(
        !err.contains("DEBUG") && !err.contains("TRACE"),
        "Default mode should not show debug/trace output"
    );
}

#[test]
fn test_log_env_var() {
    let t = Test::new();

    let output = t
        .cmd()
        .env("KEYWHIZ_LOG", "keywhiz_cli=debug")
        .args(["--server", UNREACHABLE_SERVER])
        .args(["assign", "--type", "client", "web-1", "--group", "web"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "resolving group");
}

#[test]
fn test_session_never_logged() {
    let t = Test::new();

    let output = t
        .cmd()
        .env("KEYWHIZ_SESSION", "very-secret-cookie")
        .args(["--verbose", "--server", UNREACHABLE_SERVER])
        .args(["assign", "--type", "client", "web-1", "--group", "web"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_excludes(&output, "very-secret-cookie");
}
