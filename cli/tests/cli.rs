//! # HomeStack CLI Surface Integration Tests
//!
//! File: cli/tests/cli.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/homestack
//!
//! ## Overview
//!
//! Integration tests for the top-level CLI surface: usage errors, unknown
//! commands and service tokens, and the `logs` single-group requirement.
//! None of these paths spawn the external tool, so no stubbing is needed —
//! each test only asserts that the wrapper fails before reaching it.
//!

// Declare and use the common module
mod common;
use common::*;
use predicates::prelude::*;

/// Running with no command at all prints usage and exits non-zero.
#[test]
fn test_no_command_prints_usage() {
    homestack_cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

/// Any command outside the enumerated set is a usage error.
#[test]
fn test_unknown_command_fails() {
    homestack_cmd()
        .arg("deploy")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

/// An unrecognized service token fails with the unknown-service message,
/// before any external process is spawned.
#[test]
fn test_unknown_service_fails() {
    let host = stub_host();
    homestack_cmd()
        .current_dir(host.path())
        .args(["start", "bogus"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown service group 'bogus'"));
}

/// `logs` without a service argument is a clap usage error.
#[test]
fn test_logs_requires_service() {
    homestack_cmd()
        .arg("logs")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

/// `logs all` parses but is rejected by the handler.
#[test]
fn test_logs_rejects_all() {
    let host = stub_host();
    homestack_cmd()
        .current_dir(host.path())
        .args(["logs", "all"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "'logs' requires a single named service group",
        ));
}

/// A specifically named group whose stack directory does not exist fails
/// without spawning anything (the stub would have echoed if it ran).
#[test]
fn test_stop_missing_directory_fails() {
    let host = stub_host(); // No group directories created.
    homestack_cmd()
        .current_dir(host.path())
        .args(["stop", "infrastructure"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("down").not())
        .stderr(predicate::str::contains(
            "Stack directory for 'infrastructure' not found",
        ));
}

/// `cleanup` takes no service selector; a stray token is a usage error.
#[test]
fn test_cleanup_rejects_service_argument() {
    homestack_cmd()
        .args(["cleanup", "media"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
