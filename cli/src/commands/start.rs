//! # HomeStack Start Handler
//!
//! File: cli/src/commands/start.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/homestack
//!
//! ## Overview
//!
//! This module implements the `homestack start` command. Its purpose is to
//! bring the selected service group(s) up in detached mode, by invoking the
//! external compose command with `up -d` inside each group's stack directory.
//!
//! ## Architecture
//!
//! The command flow involves these steps:
//! 1. Parse command-line arguments (`StartArgs`) using `clap`, capturing the optional `service` selector and any extra compose arguments after `--`.
//! 2. Load the HomeStack configuration (`core::config`) to locate the stacks root and the compose command.
//! 3. Resolve the selector against the fixed group table (`core::groups::resolve_groups`): absent/`all` → every group in declared order, an exact name → that group, anything else → an unknown-service error.
//! 4. Call `common::compose::run_for_groups` with the `Up` action. The loop is strictly sequential; each group's directory is checked immediately before use, and per-group outcomes are collected so one failing group does not hide behind the others.
//! 5. Report success, or propagate the (possibly aggregated) failure.
//!
//! ## Usage
//!
//! ```bash
//! # Bring every group up, in declared order
//! homestack start
//! homestack start all
//!
//! # Bring up a single group
//! homestack start media
//!
//! # Forward extra arguments to compose
//! homestack start media -- --remove-orphans
//! ```
//!
use crate::{
    common::compose::{self, ComposeAction}, // The shared compose invoker.
    core::{
        config, // Access configuration loading.
        error::Result, // Standard Result type.
        groups::{resolve_groups, ServiceGroup}, // Group table and resolver.
    },
};
use anyhow::Context; // For adding context to errors.
use clap::Parser; // For parsing command-line arguments.
use tracing::{debug, info}; // Logging framework utilities.

/// # Start Arguments (`StartArgs`)
///
/// Defines the command-line arguments accepted by the `homestack start` command.
/// Uses the `clap` crate for parsing and validation.
#[derive(Parser, Debug)]
#[command(about = "Bring service group(s) up in detached mode")]
pub struct StartArgs {
    /// Optional: the service group to start (`infrastructure`, `media`,
    /// `productivity`, or `all`). Defaults to all groups.
    service: Option<String>,

    /// Extra arguments forwarded verbatim to the compose invocation,
    /// after `--` (e.g. `-- --remove-orphans`).
    #[arg(last = true)]
    extra: Vec<String>,
}

/// # Handle Start Command (`handle_start`)
///
/// The main asynchronous handler function for the `homestack start` command.
///
/// ## Workflow:
/// 1.  Logs the start and parsed arguments.
/// 2.  Loads the HomeStack configuration.
/// 3.  Resolves the service selector into target groups (declared order for `all`).
/// 4.  Runs `up -d` per group via the shared invoker, collecting per-group outcomes.
///
/// ## Arguments
///
/// * `args`: The parsed `StartArgs` struct containing the optional `service` selector and extra compose arguments.
///
/// ## Returns
///
/// * `Result<()>`: `Ok(())` if every targeted group came up; an `Err` carrying
///   the per-group or aggregated failure otherwise.
pub async fn handle_start(args: StartArgs) -> Result<()> {
    info!("Handling start command..."); // Log entry point.
    debug!("Start args: {:?}", args); // Log arguments if debug enabled.

    // 1. Load configuration - stacks root and compose command.
    let cfg = config::load_config().context("Failed to load HomeStack configuration")?;

    // 2. Resolve the selector against the fixed group table.
    let groups = resolve_groups(&ServiceGroup::ALL, args.service.as_deref())?;

    // 3. Bring each group up, strictly sequentially.
    println!("🚀 Starting {} service group(s)...", groups.len());
    compose::run_for_groups(&cfg, &groups, &[ComposeAction::Up], &args.extra).await?;

    println!("✅ Start complete.");
    Ok(())
}
