//! # HomeStack Cleanup Handler
//!
//! File: cli/src/commands/cleanup.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/homestack
//!
//! ## Overview
//!
//! This module implements the `homestack cleanup` command: host-level prune
//! operations for stopped containers, unused images, unused volumes, and
//! unused networks, in that order, via the Docker Engine API. Cleanup is
//! deliberately **not** scoped to a service group — stacks share images and
//! networks, so pruning per group would either miss resources or remove ones
//! another group still needs.
//!
//! ## Usage
//!
//! ```bash
//! homestack cleanup
//! ```
//!
//! Each category prints one summary line (count removed, space reclaimed).
//! Note that the volume prune removes *any* unreferenced volume on the host,
//! not just HomeStack's; named volumes of stopped-but-not-removed stacks are
//! safe because their containers still reference them.
//!
use crate::{
    common::docker::prune, // Host-level prune operations.
    core::error::Result,
};
use clap::Parser;
use tracing::{debug, info};

/// # Cleanup Arguments (`CleanupArgs`)
///
/// `cleanup` operates host-wide and takes no service selector.
#[derive(Parser, Debug)]
#[command(about = "Prune stopped containers and unused images, volumes, and networks")]
pub struct CleanupArgs {}

/// Handler for `homestack cleanup`: the four prunes, sequentially.
pub async fn handle_cleanup(args: CleanupArgs) -> Result<()> {
    info!("Handling cleanup command...");
    debug!("Cleanup args: {:?}", args);

    println!("🧹 Pruning unused Docker resources...");

    let containers = prune::prune_containers().await?;
    println!("  containers: {}", containers.render());

    let images = prune::prune_images().await?;
    println!("  images:     {}", images.render());

    let volumes = prune::prune_volumes().await?;
    println!("  volumes:    {}", volumes.render());

    let networks = prune::prune_networks().await?;
    println!("  networks:   {}", networks.render());

    println!("✅ Cleanup complete.");
    Ok(())
}

// --- Unit Tests ---
// The handler is a straight sequence of Docker API calls; the per-category
// summaries are tested in `common::docker::prune`, and the live round-trip
// follows the `#[ignore]` policy for daemon-dependent tests.
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cleanup_args_parsing() {
        // `homestack cleanup` takes no arguments.
        assert!(CleanupArgs::try_parse_from(["cleanup"]).is_ok());
        // A stray positional is a parse error, not a silently ignored token.
        assert!(CleanupArgs::try_parse_from(["cleanup", "media"]).is_err());
    }

    #[tokio::test]
    #[ignore] // Requires a running Docker daemon.
    async fn test_handle_cleanup_live() {
        let args = CleanupArgs::try_parse_from(["cleanup"]).unwrap();
        assert!(handle_cleanup(args).await.is_ok());
    }
}
