//! # HomeStack CLI Setup Integration Tests
//!
//! File: cli/tests/setup.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/homestack
//!
//! ## Overview
//!
//! Integration tests for `homestack setup`. The full bootstrap includes
//! creating the shared Docker network, so the end-to-end tests follow the
//! same `#[ignore]` policy as other daemon-dependent tests and must be run
//! locally with `cargo test -- --ignored`. The directory-tree step itself is
//! covered without Docker by the unit tests in `commands/setup.rs`.
//!

// Declare and use the common module
mod common;
use common::*;

/// Basic invocation sanity: the setup help text is reachable.
#[test]
fn test_setup_help() {
    homestack_cmd().args(["setup", "--help"]).assert().success();
}

/// Full bootstrap against a real daemon: network + directory tree. Running
/// twice must succeed both times (network 409 path, mkdir -p semantics).
#[test]
#[ignore] // Requires a running Docker daemon.
fn test_setup_full_idempotent() {
    let host = stub_host();

    homestack_cmd()
        .current_dir(host.path())
        .arg("setup")
        .assert()
        .success();

    // Every group directory and config subtree must exist afterwards.
    for group in ["infrastructure", "media", "productivity"] {
        assert!(host.path().join(group).is_dir());
    }
    assert!(host.path().join("media").join("jellyfin").is_dir());

    // Second run: the already-existing network and directories are fine.
    homestack_cmd()
        .current_dir(host.path())
        .arg("setup")
        .assert()
        .success();
}
