//! # HomeStack Shared Network Operations
//!
//! File: cli/src/common/docker/network.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/homestack
//!
//! ## Overview
//!
//! This module manages the shared Docker bridge network that every HomeStack
//! service group attaches to so that, for example, the reverse proxy in the
//! infrastructure group can reach the media server in the media group by
//! container name.
//!
//! ## Architecture
//!
//! - **`create_shared_network`**: creates the named bridge network via the
//!   Docker Engine API with duplicate checking enabled. The one interesting
//!   case is the idempotency path: if the network already exists the daemon
//!   answers 409 Conflict, which is logged as a warning and treated as
//!   success so that `homestack setup` can be re-run safely. All other API
//!   failures map to `HomestackError::DockerApi`.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::docker;
//!
//! // Called from `homestack setup`:
//! docker::network::create_shared_network(&cfg.network.name).await?;
//! ```
//!
use crate::core::error::{HomestackError, Result};
use anyhow::anyhow;
use bollard::network::CreateNetworkOptions;
use tracing::{debug, error, info, instrument, warn};

use super::connect::connect_docker;

/// Creates the shared bridge network, treating "already exists" as success.
///
/// # Arguments
///
/// * `name` - The network name (from `[network] name` in the configuration).
///
/// # Errors
///
/// Returns `HomestackError::DockerApi` wrapped in `anyhow::Error` for Docker
/// API failures other than the 409 duplicate response.
#[instrument(skip(name), fields(network = %name))]
pub async fn create_shared_network(name: &str) -> Result<()> {
    // Establish connection to Docker daemon.
    let docker = connect_docker().await?;
    info!("Creating shared network '{}'...", name);

    // Prepare the create options. `check_duplicate` makes the daemon answer
    // 409 for an existing network instead of silently creating a second one.
    let options = CreateNetworkOptions {
        name,
        driver: "bridge",
        check_duplicate: true,
        ..Default::default()
    };

    // Call the bollard create_network function.
    match docker.create_network(options).await {
        // Creation successful.
        Ok(response) => {
            debug!("Network create response: {:?}", response);
            println!("✅ Created shared network '{}'.", name);
            Ok(())
        }
        // Handle specific Docker error codes.
        Err(bollard::errors::Error::DockerResponseServerError {
            status_code: 409, .. // 409 means "Conflict", i.e., the network already exists.
        }) => {
            warn!("Network '{}' already exists, nothing to create.", name);
            println!("Network '{}' already exists.", name);
            Ok(()) // Treat as success; setup stays idempotent.
        }
        // Handle any other Docker API errors.
        Err(e) => {
            error!("Failed to create network '{}': {:?}", name, e);
            // Wrap the error and provide context.
            Err(anyhow!(HomestackError::DockerApi { source: e })
                .context(format!("Failed to create shared network '{}'", name)))
        }
    }
}

// --- Unit Tests ---
// Exercising the creation path requires a running Docker daemon, so the
// round-trip test follows the same `#[ignore]` policy as the connection test.
#[cfg(test)]
mod tests {
    use super::*;

    /// Creating the same network twice must succeed both times: the second
    /// call takes the 409 path. Requires a running Docker daemon.
    #[tokio::test]
    #[ignore] // Requires a running Docker daemon.
    async fn test_create_shared_network_idempotent() {
        let name = "homestack-test-network";
        assert!(create_shared_network(name).await.is_ok());
        // Second creation hits the duplicate path and still succeeds.
        assert!(create_shared_network(name).await.is_ok());

        // Best-effort cleanup so repeated local runs start clean.
        if let Ok(docker) = connect_docker().await {
            let _ = docker.remove_network(name).await;
        }
    }
}
