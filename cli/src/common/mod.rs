//! # HomeStack Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/homestack
//!
//! ## Overview
//!
//! This module aggregates the shared utilities used by the command handlers.
//! Keeping them under one roof avoids duplicating process, Docker, and
//! filesystem plumbing across the lifecycle commands.
//!
//! ## Architecture
//!
//! - **`compose`**: The process invoker: runs the external compose command in
//!   a stack directory and the sequential per-group loop with explicit
//!   outcome collection.
//! - **`docker`**: Direct Docker Engine API operations (shared network
//!   creation, host-level prunes) via `bollard`.
//! - **`fs`**: Filesystem helpers for the setup routine (directory creation,
//!   the ownership pass).
//!
//! ## Usage
//!
//! ```rust
//! // Example importing from different common submodules
//! use crate::common::{compose, docker, fs}; // Import the parent modules
//! use crate::core::error::Result;
//! use std::path::Path;
//!
//! # async fn run_example(cfg: &crate::core::config::Config) -> Result<()> {
//! // Run a compose action for a set of groups.
//! // compose::run_for_groups(cfg, &groups, &[compose::ComposeAction::Ps], &[]).await?;
//!
//! // Use Filesystem utilities
//! fs::io::ensure_dir_exists(Path::new("./media"))?;
//!
//! // Use Docker utilities
//! docker::network::create_shared_network("homestack").await?;
//! # Ok(())
//! # }
//! ```
//!
//! This modular approach keeps the utility codebase organized and maintainable.
//!

/// The external compose command invoker and per-group execution loop.
pub mod compose;
/// Core utilities for interacting with the Docker daemon (network, prunes).
pub mod docker;
/// Utilities for filesystem operations (directory creation, ownership).
pub mod fs;
