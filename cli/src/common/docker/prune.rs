//! # HomeStack System Prune Operations
//!
//! File: cli/src/common/docker/prune.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/homestack
//!
//! ## Overview
//!
//! This module implements the host-level prune operations behind
//! `homestack cleanup`: removing stopped containers, dangling images, unused
//! volumes, and unused networks through the Docker Engine API. These
//! operations are host-wide and deliberately not scoped to a service group —
//! the stacks share images and networks, so per-group pruning would either
//! miss resources or remove ones another group still needs.
//!
//! ## Architecture
//!
//! One function per resource kind, each following the same shape: connect,
//! call the corresponding bollard prune endpoint with no filters, and fold
//! the response into a `PruneSummary` (items removed + bytes reclaimed). The
//! `cleanup` handler runs the four sequentially and prints one line per
//! category.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::docker::prune;
//!
//! let summary = prune::prune_containers().await?;
//! println!("containers: {}", summary.render());
//! ```
//!
use crate::core::error::{HomestackError, Result};
use anyhow::anyhow;
use bollard::container::PruneContainersOptions;
use bollard::image::PruneImagesOptions;
use bollard::network::PruneNetworksOptions;
use bollard::volume::PruneVolumesOptions;
use tracing::{debug, info, instrument};

use super::connect::connect_docker;

/// Outcome of one prune call: how many resources went away and how many
/// bytes came back. Network prunes report no size; `space_reclaimed` stays 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PruneSummary {
    pub items: usize,
    pub space_reclaimed: i64,
}

impl PruneSummary {
    /// One-line human rendering, e.g. `3 removed, 1.2 GiB reclaimed`.
    pub fn render(&self) -> String {
        if self.space_reclaimed > 0 {
            format!(
                "{} removed, {} reclaimed",
                self.items,
                format_bytes(self.space_reclaimed)
            )
        } else {
            format!("{} removed", self.items)
        }
    }
}

/// Removes all stopped containers.
#[instrument]
pub async fn prune_containers() -> Result<PruneSummary> {
    let docker = connect_docker().await?;
    info!("Pruning stopped containers...");
    let response = docker
        .prune_containers(None::<PruneContainersOptions<String>>)
        .await
        .map_err(|e| anyhow!(HomestackError::DockerApi { source: e }))?;
    debug!("Container prune response: {:?}", response);
    Ok(PruneSummary {
        items: response.containers_deleted.map_or(0, |v| v.len()),
        space_reclaimed: response.space_reclaimed.unwrap_or(0),
    })
}

/// Removes dangling images.
#[instrument]
pub async fn prune_images() -> Result<PruneSummary> {
    let docker = connect_docker().await?;
    info!("Pruning unused images...");
    let response = docker
        .prune_images(None::<PruneImagesOptions<String>>)
        .await
        .map_err(|e| anyhow!(HomestackError::DockerApi { source: e }))?;
    debug!("Image prune response: {:?}", response);
    Ok(PruneSummary {
        items: response.images_deleted.map_or(0, |v| v.len()),
        space_reclaimed: response.space_reclaimed.unwrap_or(0),
    })
}

/// Removes volumes not referenced by any container.
#[instrument]
pub async fn prune_volumes() -> Result<PruneSummary> {
    let docker = connect_docker().await?;
    info!("Pruning unused volumes...");
    let response = docker
        .prune_volumes(None::<PruneVolumesOptions<String>>)
        .await
        .map_err(|e| anyhow!(HomestackError::DockerApi { source: e }))?;
    debug!("Volume prune response: {:?}", response);
    Ok(PruneSummary {
        items: response.volumes_deleted.map_or(0, |v| v.len()),
        space_reclaimed: response.space_reclaimed.unwrap_or(0),
    })
}

/// Removes networks with no attached containers.
#[instrument]
pub async fn prune_networks() -> Result<PruneSummary> {
    let docker = connect_docker().await?;
    info!("Pruning unused networks...");
    let response = docker
        .prune_networks(None::<PruneNetworksOptions<String>>)
        .await
        .map_err(|e| anyhow!(HomestackError::DockerApi { source: e }))?;
    debug!("Network prune response: {:?}", response);
    Ok(PruneSummary {
        items: response.networks_deleted.map_or(0, |v| v.len()),
        // The networks endpoint reports no reclaimed space.
        space_reclaimed: 0,
    })
}

/// Renders a byte count the way `docker system prune` does (binary units).
fn format_bytes(bytes: i64) -> String {
    const UNITS: [&str; 5] = ["B", "KiB", "MiB", "GiB", "TiB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} {}", bytes, UNITS[unit])
    } else {
        format!("{:.1} {}", value, UNITS[unit])
    }
}
