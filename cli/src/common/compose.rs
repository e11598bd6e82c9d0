//! # HomeStack Compose Invoker (`common::compose`)
//!
//! File: cli/src/common/compose.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/homestack
//!
//! ## Overview
//!
//! This module executes the external container-orchestration command (Docker
//! Compose by default) inside a service group's stack directory. Every
//! lifecycle command other than `setup` and `cleanup` funnels through here.
//!
//! ## Architecture
//!
//! - **`ComposeAction`**: the fixed lookup table from lifecycle semantics to
//!   compose argument suffixes (`up -d`, `down`, `restart`, `logs -f`, `ps`,
//!   `pull`). There are no transitions; a command is a single table entry.
//! - **`run_compose`**: spawns the configured compose command with one
//!   action's suffix plus any caller-supplied extra arguments, with the
//!   working directory set to the stack directory and stdio inherited so
//!   output streams straight to the caller's terminal. The wrapper blocks
//!   until the child exits; a non-zero status becomes
//!   `HomestackError::ExternalCommand`.
//! - **`run_for_groups`**: the strictly sequential per-group loop. Outcomes
//!   are collected explicitly per group: a failure (missing stack directory
//!   or failed compose invocation) never aborts the remaining groups, and the
//!   final result reflects whether any group failed
//!   (`HomestackError::GroupFailures`). A single named group propagates its
//!   error directly.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::compose::{self, ComposeAction};
//!
//! // `homestack start media` boils down to:
//! compose::run_for_groups(&cfg, &groups, &[ComposeAction::Up], &[]).await?;
//!
//! // `homestack update all` runs two actions per group, in order:
//! compose::run_for_groups(&cfg, &groups, &[ComposeAction::Pull, ComposeAction::Up], &[]).await?;
//! ```
//!
use crate::core::{
    config::Config,
    error::{HomestackError, Result},
    groups::ServiceGroup,
};
use anyhow::{anyhow, Context};
use std::path::Path;
use tokio::process::Command;
use tracing::{debug, error, info};

/// A lifecycle operation expressed as the fixed argument suffix passed to the
/// external compose command. One entry per wrapper command; no state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposeAction {
    /// Bring the stack up, detached (`up -d`).
    Up,
    /// Tear the stack down (`down`).
    Down,
    /// Restart the stack's services (`restart`).
    Restart,
    /// Follow service logs (`logs -f`).
    Logs,
    /// List service status (`ps`).
    Ps,
    /// Pull the latest images (`pull`).
    Pull,
}

impl ComposeAction {
    /// The fixed argument suffix for this action.
    pub fn args(&self) -> &'static [&'static str] {
        match self {
            ComposeAction::Up => &["up", "-d"],
            ComposeAction::Down => &["down"],
            ComposeAction::Restart => &["restart"],
            ComposeAction::Logs => &["logs", "-f"],
            ComposeAction::Ps => &["ps"],
            ComposeAction::Pull => &["pull"],
        }
    }
}

/// Runs one compose action inside a stack directory and waits for it.
///
/// The argv is the configured compose command prefix, the action's fixed
/// suffix, then any caller-supplied extra arguments. Stdin/stdout/stderr are
/// inherited, so compose output (including followed logs) streams directly to
/// the user until the child exits.
///
/// # Errors
///
/// - Spawn failures (e.g. the compose binary is not installed) are wrapped
///   with context naming the command.
/// - A non-zero exit becomes `HomestackError::ExternalCommand` carrying the
///   rendered command line and exit status.
pub async fn run_compose(
    cfg: &Config,
    dir: &Path,
    action: ComposeAction,
    extra: &[String],
) -> Result<()> {
    let argv: Vec<&str> = cfg
        .compose
        .command
        .iter()
        .map(String::as_str)
        .chain(action.args().iter().copied())
        .chain(extra.iter().map(String::as_str))
        .collect();
    let rendered = argv.join(" ");
    debug!("Running '{}' in {}", rendered, dir.display());

    // `status()` inherits stdio from the parent, which is exactly the
    // streaming behavior we want for long-running invocations like `logs -f`.
    let status = Command::new(argv[0])
        .args(&argv[1..])
        .current_dir(dir)
        .status()
        .await
        .with_context(|| format!("Failed to spawn '{}' in {}", rendered, dir.display()))?;

    if status.success() {
        info!("'{}' completed successfully in {}", rendered, dir.display());
        Ok(())
    } else {
        let status_str = status
            .code()
            .map_or_else(|| "terminated by signal".to_string(), |c| c.to_string());
        error!(
            "'{}' failed in {} (status: {})",
            rendered,
            dir.display(),
            status_str
        );
        Err(anyhow!(HomestackError::ExternalCommand {
            cmd: rendered,
            status: status_str,
        }))
    }
}

/// Runs a sequence of compose actions for every resolved group, strictly
/// sequentially and in the given group order.
///
/// Per-group outcomes are collected explicitly rather than ignored: a group
/// whose stack directory is missing, or whose compose invocation fails, is
/// recorded and the remaining groups still run. Afterwards:
///
/// - no failures → `Ok(())`;
/// - a single named group → its error is propagated directly (so
///   `stop infrastructure` with no such directory fails before anything is
///   spawned);
/// - multiple groups → each failure is reported on stderr and the call
///   returns `HomestackError::GroupFailures`, making the process exit status
///   reflect partial failure.
pub async fn run_for_groups(
    cfg: &Config,
    groups: &[ServiceGroup],
    actions: &[ComposeAction],
    extra: &[String],
) -> Result<()> {
    let mut failures: Vec<(ServiceGroup, anyhow::Error)> = Vec::new();

    for group in groups {
        match run_group(cfg, *group, actions, extra).await {
            Ok(()) => {}
            Err(e) => {
                error!("Operation failed for service group '{}': {:?}", group, e);
                failures.push((*group, e));
            }
        }
    }

    if failures.is_empty() {
        return Ok(());
    }

    if groups.len() == 1 {
        // A specifically named group: surface its error as-is, so the user
        // sees the underlying message (missing directory, failed command).
        let (_, e) = failures.remove(0);
        return Err(e);
    }

    // `all` mode: report every failed group, then fail the whole invocation.
    eprintln!("\nErrors occurred while processing service groups:");
    for (group, err) in &failures {
        eprintln!("- {}: {}", group, err);
    }
    Err(anyhow!(HomestackError::GroupFailures {
        failed: failures.len(),
        total: groups.len(),
    }))
}

/// Runs all actions for one group. The directory existence check happens
/// immediately before use, per the stack-directory invariant.
async fn run_group(
    cfg: &Config,
    group: ServiceGroup,
    actions: &[ComposeAction],
    extra: &[String],
) -> Result<()> {
    let dir = cfg.stack_dir(group);
    if !dir.is_dir() {
        return Err(anyhow!(HomestackError::StackNotFound {
            group: group.name().to_string(),
            path: dir.display().to_string(),
        }));
    }

    println!("📦 {} ({})", group, dir.display());
    for action in actions {
        run_compose(cfg, &dir, *action, extra).await?;
    }
    Ok(())
}
