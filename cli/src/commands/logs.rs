//! # HomeStack Logs Handler
//!
//! File: cli/src/commands/logs.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/homestack
//!
//! ## Overview
//!
//! This module implements the `homestack logs` command: the external compose
//! command is invoked with `logs -f` inside one named group's stack
//! directory, streaming the follow output until the user interrupts it.
//!
//! Unlike the other lifecycle commands, `logs` requires an explicit single
//! group: following interleaved logs from three compose projects at once is
//! not meaningful, so `all` (and omitting the group) are rejected before
//! anything is spawned. Clap enforces the missing-argument case; the `all`
//! token is rejected here with an argument error.
//!
//! ## Usage
//!
//! ```bash
//! # Follow the media group's logs
//! homestack logs media
//!
//! # Limit the backlog via extra compose arguments
//! homestack logs media -- --tail 100
//! ```
//!
use crate::{
    common::compose::{self, ComposeAction},
    core::{
        config,
        error::{HomestackError, Result},
        groups::{resolve_groups, ServiceGroup, ALL_TOKEN},
    },
};
use anyhow::{anyhow, Context};
use clap::Parser;
use tracing::{debug, info};

/// # Logs Arguments (`LogsArgs`)
///
/// Defines the command-line arguments accepted by the `homestack logs` command.
/// The service group is a required positional: clap itself produces the
/// usage error when it is missing.
#[derive(Parser, Debug)]
#[command(about = "Follow compose logs for one named service group")]
pub struct LogsArgs {
    /// The service group to follow (`infrastructure`, `media`, or
    /// `productivity`). Required; `all` is not accepted.
    service: String,

    /// Extra arguments forwarded verbatim to the compose invocation, after
    /// `--` (e.g. `-- --tail 100`).
    #[arg(last = true)]
    extra: Vec<String>,
}

/// Handler for `homestack logs`: validate the single-group requirement, then
/// run `logs -f` in that group's stack directory until interrupted.
pub async fn handle_logs(args: LogsArgs) -> Result<()> {
    info!("Handling logs command...");
    debug!("Logs args: {:?}", args);

    // `logs` is the one command where `all` is a user error.
    if args.service == ALL_TOKEN {
        return Err(anyhow!(HomestackError::ArgumentParsing(
            "'logs' requires a single named service group; 'all' is not supported.".to_string()
        )));
    }

    let cfg = config::load_config().context("Failed to load HomeStack configuration")?;
    let groups = resolve_groups(&ServiceGroup::ALL, Some(args.service.as_str()))?;

    // Exactly one group resolves here; the invoker checks its directory and
    // streams the follow output until the user interrupts.
    compose::run_for_groups(&cfg, &groups, &[ComposeAction::Logs], &args.extra).await
}
