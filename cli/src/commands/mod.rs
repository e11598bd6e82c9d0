//! # HomeStack Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/homestack
//!
//! ## Overview
//!
//! This module aggregates all lifecycle commands that comprise the HomeStack CLI.
//! It serves as the central point for importing and re-exporting command modules
//! to make them accessible to the main application entry point (`main.rs`).
//!
//! ## Architecture
//!
//! Unlike a CLI with nested command groups, HomeStack's surface is flat:
//! `homestack <command> [<service>]`. Each command lives in its own module
//! with its own arguments structure and async handler function. The compose
//! wrapper commands (`start`, `stop`, `restart`, `logs`, `status`, `update`)
//! share the invoker in `common::compose`; `setup` and `cleanup` talk to the
//! filesystem and the Docker Engine API directly.
//!
//! ## Commands
//!
//! - `setup`: Bootstrap the shared network, stack directories, and ownership
//! - `start`: Bring service group(s) up, detached
//! - `stop`: Tear service group(s) down
//! - `restart`: Restart service group(s)
//! - `logs`: Follow logs for one named service group
//! - `status`: List container status per service group
//! - `update`: Pull latest images, then bring group(s) up
//! - `cleanup`: Prune stopped containers and unused images/volumes/networks
//!

/// Prunes stopped containers and unused images, volumes, and networks host-wide.
pub mod cleanup;
/// Follows compose logs for a single named service group.
pub mod logs;
/// Restarts the services of the selected group(s).
pub mod restart;
/// Bootstraps the shared network, the stack directory tree, and media ownership.
pub mod setup;
/// Brings the selected group(s) up in detached mode.
pub mod start;
/// Lists compose container status for the selected group(s).
pub mod status;
/// Tears the selected group(s) down.
pub mod stop;
/// Pulls the latest images for the selected group(s), then brings them up.
pub mod update;
