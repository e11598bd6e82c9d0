//! # HomeStack Docker Module Interface
//!
//! File: cli/src/common/docker/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/homestack
//!
//! ## Overview
//!
//! This module serves as the central public interface for the handful of
//! operations HomeStack performs directly against the Docker Engine API
//! (everything stack-scoped goes through the compose invoker instead). It
//! organizes Docker-related functionality into logical submodules,
//! abstracting the underlying `bollard` crate interactions.
//!
//! ## Architecture
//!
//! The `common::docker` module delegates tasks to the following specialized submodules:
//!
//! - **`connect`**: Handles establishing the connection to the Docker daemon.
//! - **`network`**: Creates the shared bridge network during `homestack setup`.
//! - **`prune`**: Implements the host-level prune operations behind `homestack cleanup`.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::docker; // Import the main docker module interface
//! use crate::core::error::Result;
//!
//! # async fn run_example() -> Result<()> {
//! // Create the shared network (idempotent).
//! docker::network::create_shared_network("homestack").await?;
//!
//! // Reclaim space from stopped containers.
//! let summary = docker::prune::prune_containers().await?;
//! println!("containers: {}", summary.render());
//! # Ok(())
//! # }
//! ```
//!

/// Handles establishing a connection to the local Docker daemon.
pub mod connect;
/// Manages the shared bridge network that all service groups attach to.
pub mod network;
/// Implements host-level prune operations (containers, images, volumes, networks).
pub mod prune;
