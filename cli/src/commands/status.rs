//! # HomeStack Status Handler
//!
//! File: cli/src/commands/status.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/homestack
//!
//! ## Overview
//!
//! This module implements the `homestack status` command: the external
//! compose command is invoked with `ps` inside each selected group's stack
//! directory, so the user sees one container listing per group, in declared
//! order. The listing itself is compose's output, streamed straight through.
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

/// # Status Arguments (`StatusArgs`)
#[derive(Parser, Debug)]
#[command(about = "List container status for the selected group(s)")]
pub struct StatusArgs {
    /// Optional: the service group to inspect (`infrastructure`, `media`,
    /// `productivity`, or `all`). Defaults to all groups.
    service: Option<String>,

    /// Extra arguments forwarded verbatim to the compose invocation, after `--`.
    #[arg(last = true)]
    extra: Vec<String>,
}

/// Handler for `homestack status`.
pub async fn handle_status(args: StatusArgs) -> Result<()> {
    info!("Handling status command...");
    debug!("Status args: {:?}", args);

    let cfg = config::load_config().context("Failed to load HomeStack configuration")?;
    let groups = resolve_groups(&ServiceGroup::ALL, args.service.as_deref())?;

    compose::run_for_groups(&cfg, &groups, &[ComposeAction::Ps], &args.extra).await
}
