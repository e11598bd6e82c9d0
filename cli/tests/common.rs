//! # HomeStack CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/homestack
//!
//! ## Overview
//!
//! This module provides shared utility functions and re-exports common crates
//! used across multiple integration test files (`cli.rs`, `lifecycle.rs`, etc.).
//! This avoids code duplication in the test suite.
//!
//! Integration tests are located in the `cli/tests/` directory and each `.rs` file
//! in that directory (that isn't a module like this one) is compiled as a separate
//! test crate linked against the main `homestack` binary crate.
//!
//! The central trick of this suite: the compose command is configurable, so a
//! host fixture can stub it with `echo`. The wrapper then runs for real —
//! argument parsing, config loading, group resolution, directory checks,
//! process spawning — while "compose" just prints the arguments it received,
//! which the tests assert on. No Docker daemon is required.
//!

// Allow potentially unused code in this common module, as different test files might use different helpers.
#![allow(dead_code)]

// Re-export common crates/modules needed by multiple test files
pub use assert_cmd::Command;
use tempfile::TempDir;

/// # Get HomeStack Command (`homestack_cmd`)
///
/// Helper function to create an `assert_cmd::Command` instance pointing to the
/// compiled `homestack` binary target for the current test run.
///
/// This ensures tests execute the correct binary being built.
///
/// ## Panics
/// Panics if the `homestack` binary cannot be found via `Command::cargo_bin`.
///
/// ## Returns
/// * `Command` - An `assert_cmd::Command` ready to have arguments added and assertions run.
pub fn homestack_cmd() -> Command {
    Command::cargo_bin("homestack").expect("Failed to find homestack binary for testing")
}

/// Creates a temporary host fixture: a directory containing a
/// `.homestack.toml` that stubs the compose command with `echo`. Tests run
/// the binary with this directory as the working directory, so the stacks
/// root defaults to the fixture itself.
pub fn stub_host() -> TempDir {
    let temp = tempfile::tempdir().expect("Failed to create temp dir");
    std::fs::write(
        temp.path().join(".homestack.toml"),
        "[compose]\ncommand = [\"echo\"]\n",
    )
    .expect("Failed to write stub .homestack.toml");
    temp
}

/// Creates the given group directories inside a host fixture.
pub fn create_group_dirs(host: &TempDir, groups: &[&str]) {
    for group in groups {
        std::fs::create_dir_all(host.path().join(group)).expect("Failed to create group dir");
    }
}
