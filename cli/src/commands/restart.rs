//! # HomeStack Restart Handler
//!
//! File: cli/src/commands/restart.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/homestack
//!
//! ## Overview
//!
//! This module implements the `homestack restart` command: the external
//! compose command is invoked with `restart` inside each selected group's
//! stack directory. Services are restarted in place; configuration changes
//! that require re-creation need `stop` + `start` instead.
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

/// # Restart Arguments (`RestartArgs`)
#[derive(Parser, Debug)]
#[command(about = "Restart the services of the selected group(s)")]
pub struct RestartArgs {
    /// Optional: the service group to restart (`infrastructure`, `media`,
    /// `productivity`, or `all`). Defaults to all groups.
    service: Option<String>,

    /// Extra arguments forwarded verbatim to the compose invocation, after `--`.
    #[arg(last = true)]
    extra: Vec<String>,
}

/// Handler for `homestack restart`.
pub async fn handle_restart(args: RestartArgs) -> Result<()> {
    info!("Handling restart command...");
    debug!("Restart args: {:?}", args);

    let cfg = config::load_config().context("Failed to load HomeStack configuration")?;
    let groups = resolve_groups(&ServiceGroup::ALL, args.service.as_deref())?;

    println!("🔄 Restarting {} service group(s)...", groups.len());
    compose::run_for_groups(&cfg, &groups, &[ComposeAction::Restart], &args.extra).await?;

    println!("✅ Restart complete.");
    Ok(())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restart_args_parsing() {
        let args = RestartArgs::try_parse_from(["restart", "productivity"]).unwrap();
        assert_eq!(args.service, Some("productivity".to_string()));

        let args_default = RestartArgs::try_parse_from(["restart"]).unwrap();
        assert!(args_default.service.is_none());
    }
}
