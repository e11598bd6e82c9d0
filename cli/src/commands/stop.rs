//! # HomeStack Stop Handler
//!
//! File: cli/src/commands/stop.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/homestack
//!
//! ## Overview
//!
//! This module implements the `homestack stop` command. It tears the selected
//! service group(s) down by invoking the external compose command with `down`
//! inside each group's stack directory, in declared group order.
//!
//! ## Usage
//!
//! ```bash
//! # Tear every group down
//! homestack stop
//!
//! # Tear down a single group
//! homestack stop infrastructure
//! ```
//!
//! Stopping a group whose stack directory does not exist is an error for that
//! group: nothing is spawned, and a specifically named group fails the whole
//! invocation.
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

/// # Stop Arguments (`StopArgs`)
///
/// Defines the command-line arguments accepted by the `homestack stop` command.
#[derive(Parser, Debug)]
#[command(about = "Tear service group(s) down")]
pub struct StopArgs {
    /// Optional: the service group to stop (`infrastructure`, `media`,
    /// `productivity`, or `all`). Defaults to all groups.
    service: Option<String>,

    /// Extra arguments forwarded verbatim to the compose invocation, after `--`.
    #[arg(last = true)]
    extra: Vec<String>,
}

/// Handler for `homestack stop`: resolve the selector, then run `down` per
/// group via the shared sequential invoker.
pub async fn handle_stop(args: StopArgs) -> Result<()> {
    info!("Handling stop command...");
    debug!("Stop args: {:?}", args);

    let cfg = config::load_config().context("Failed to load HomeStack configuration")?;
    let groups = resolve_groups(&ServiceGroup::ALL, args.service.as_deref())?;

    println!("🛑 Stopping {} service group(s)...", groups.len());
    compose::run_for_groups(&cfg, &groups, &[ComposeAction::Down], &args.extra).await?;

    println!("✅ Stop complete.");
    Ok(())
}
