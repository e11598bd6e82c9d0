//! # HomeStack CLI Lifecycle Integration Tests
//!
//! File: cli/tests/lifecycle.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/homestack
//!
//! ## Overview
//!
//! Integration tests for the compose-backed lifecycle commands (`start`,
//! `stop`, `status`, `update`, `logs`). Each test runs the real binary inside
//! a host fixture whose `.homestack.toml` stubs the compose command with
//! `echo`, so the arguments the wrapper would hand to Docker Compose appear
//! on stdout and can be asserted directly — including how many times and in
//! which group order the tool was invoked.
//!

// Declare and use the common module
mod common;
use common::*;
use predicates::prelude::*;

/// `start media` invokes the tool exactly once, in the media directory, with
/// detached-up semantics.
#[test]
fn test_start_single_group() {
    let host = stub_host();
    create_group_dirs(&host, &["media"]);

    homestack_cmd()
        .current_dir(host.path())
        .args(["start", "media"])
        .assert()
        .success()
        .stdout(predicate::str::contains("up -d").count(1))
        .stdout(predicate::str::contains("📦 media"));
}

/// `stop` with no selector tears down every existing group, in declared order.
#[test]
fn test_stop_all_groups_declared_order() {
    let host = stub_host();
    create_group_dirs(&host, &["infrastructure", "media", "productivity"]);

    let assert = homestack_cmd()
        .current_dir(host.path())
        .arg("stop")
        .assert()
        .success()
        .stdout(predicate::str::contains("down").count(3));

    // Group order is the declared one: infrastructure, media, productivity.
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let infra = stdout.find("📦 infrastructure").expect("infrastructure ran");
    let media = stdout.find("📦 media").expect("media ran");
    let productivity = stdout.find("📦 productivity").expect("productivity ran");
    assert!(infra < media && media < productivity);
}

/// `update all` runs `pull` then `up -d` per existing group directory, in
/// declared group order.
#[test]
fn test_update_all_pull_then_up_per_group() {
    let host = stub_host();
    create_group_dirs(&host, &["infrastructure", "media", "productivity"]);

    let assert = homestack_cmd()
        .current_dir(host.path())
        .args(["update", "all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pull").count(3))
        .stdout(predicate::str::contains("up -d").count(3));

    // Within each group, pull precedes up -d; groups run in declared order.
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let mut cursor = 0;
    for group in ["infrastructure", "media", "productivity"] {
        let header = stdout[cursor..]
            .find(&format!("📦 {}", group))
            .unwrap_or_else(|| panic!("{} missing from output", group));
        let pull = stdout[cursor + header..].find("pull").expect("pull ran");
        let up = stdout[cursor + header..].find("up -d").expect("up ran");
        assert!(pull < up, "{}: pull must precede up -d", group);
        cursor += header;
    }
}

/// `status` streams one `ps` per selected group.
#[test]
fn test_status_per_group() {
    let host = stub_host();
    create_group_dirs(&host, &["infrastructure", "media", "productivity"]);

    // Match whole `ps` lines from the stub; a bare substring check could
    // collide with random temp-directory names in the 📦 headers.
    homestack_cmd()
        .current_dir(host.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"(?m)^ps$").unwrap().count(3));
}

/// Extra arguments after `--` ride along verbatim.
#[test]
fn test_logs_forwards_extra_arguments() {
    let host = stub_host();
    create_group_dirs(&host, &["media"]);

    homestack_cmd()
        .current_dir(host.path())
        .args(["logs", "media", "--", "--tail", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("logs -f --tail 100"));
}

/// In `all` mode a missing group directory is recorded as that group's
/// failure: the remaining groups still run, and the invocation exits
/// non-zero with the aggregate count.
#[test]
fn test_start_all_aggregates_missing_group() {
    let host = stub_host();
    // Infrastructure is deliberately absent.
    create_group_dirs(&host, &["media", "productivity"]);

    homestack_cmd()
        .current_dir(host.path())
        .args(["start", "all"])
        .assert()
        .failure()
        // The two existing groups were still brought up...
        .stdout(predicate::str::contains("up -d").count(2))
        // ...and the aggregate failure names the counts.
        .stderr(predicate::str::contains(
            "Operation failed for 1 of 3 service group(s).",
        ));
}

/// A compose invocation that exits non-zero fails a named group's command.
#[test]
#[cfg(unix)]
fn test_start_propagates_compose_failure() {
    let host = stub_host();
    create_group_dirs(&host, &["media"]);
    // Re-stub the compose command with one that always fails.
    std::fs::write(
        host.path().join(".homestack.toml"),
        "[compose]\ncommand = [\"false\"]\n",
    )
    .unwrap();

    homestack_cmd()
        .current_dir(host.path())
        .args(["start", "media"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("External command failed"));
}
