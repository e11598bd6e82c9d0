//! # HomeStack Update Handler
//!
//! File: cli/src/commands/update.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/homestack
//!
//! ## Overview
//!
//! This module implements the `homestack update` command. For each selected
//! group it invokes the external compose command twice, in order: `pull` to
//! fetch the latest images, then `up -d` so running services are re-created
//! on the new images. Both invocations happen per group before the loop moves
//! to the next group, so a half-updated host is at worst one group behind.
//!
//! ## Architecture
//!
//! The two-phase behavior is expressed as an action *sequence* passed to the
//! shared invoker (`[Pull, Up]`): `common::compose::run_for_groups` runs the
//! sequence per group and stops that group's sequence at the first failing
//! action (a failed pull does not re-create containers on stale images).
//!
//! ## Usage
//!
//! ```bash
//! # Update everything, in declared group order
//! homestack update
//!
//! # Update one group
//! homestack update productivity
//! ```
//!
use crate::{
    common::compose::{self, ComposeAction},
    core::{
        config,
        error::Result,
        groups::{resolve_groups, ServiceGroup},
    },
};
use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};

/// # Update Arguments (`UpdateArgs`)
#[derive(Parser, Debug)]
#[command(about = "Pull latest images for the selected group(s), then bring them up")]
pub struct UpdateArgs {
    /// Optional: the service group to update (`infrastructure`, `media`,
    /// `productivity`, or `all`). Defaults to all groups.
    service: Option<String>,

    /// Extra arguments forwarded verbatim to both compose invocations, after `--`.
    #[arg(last = true)]
    extra: Vec<String>,
}

/// Handler for `homestack update`: `pull` then `up -d` per resolved group.
pub async fn handle_update(args: UpdateArgs) -> Result<()> {
    info!("Handling update command...");
    debug!("Update args: {:?}", args);

    let cfg = config::load_config().context("Failed to load HomeStack configuration")?;
    let groups = resolve_groups(&ServiceGroup::ALL, args.service.as_deref())?;

    println!("⬆️  Updating {} service group(s)...", groups.len());
    compose::run_for_groups(
        &cfg,
        &groups,
        &[ComposeAction::Pull, ComposeAction::Up],
        &args.extra,
    )
    .await?;

    println!("✅ Update complete.");
    Ok(())
}
