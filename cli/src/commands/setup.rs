//! # HomeStack Setup Handler
//!
//! File: cli/src/commands/setup.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/homestack
//!
//! ## Overview
//!
//! This module implements the `homestack setup` command, the one-shot
//! bootstrap run before any stack is started on a fresh host. It is
//! idempotent: every step either creates something missing or confirms it is
//! already in place, so re-running after a partial failure is safe.
//!
//! ## Architecture
//!
//! The bootstrap performs three steps, in order:
//! 1. **Shared network**: create the bridge network every group attaches to
//!    (`common::docker::network`). An already-existing network is reported as
//!    a warning and treated as success.
//! 2. **Directory tree**: create each group's stack directory and its fixed
//!    per-service configuration subdirectories (`common::fs::io`,
//!    `mkdir -p` semantics).
//! 3. **Media ownership**: apply the configured `owner_uid:owner_gid` and
//!    group-writable permissions to the media subtree
//!    (`common::fs::perms`). This step is **best-effort**: the host may not
//!    permit ownership changes (e.g. running unprivileged on a mount that
//!    forbids chown), so a failure here is captured and logged as a warning
//!    instead of failing the whole setup.
//!
//! ## Usage
//!
//! ```bash
//! homestack setup
//!
//! # A service argument is accepted for symmetry with the other commands,
//! # but setup always bootstraps every group and ignores it.
//! homestack setup media
//! ```
//!
use crate::{
    common::{docker, fs},
    core::{
        config::{self, Config},
        error::Result,
        groups::ServiceGroup,
    },
};
use anyhow::Context;
use clap::Parser;
use tracing::{debug, info, warn};

/// # Setup Arguments (`SetupArgs`)
///
/// Defines the command-line arguments accepted by the `homestack setup` command.
#[derive(Parser, Debug)]
#[command(about = "Bootstrap the shared network, stack directories, and media ownership")]
pub struct SetupArgs {
    /// Accepted for symmetry with the other commands; setup always
    /// bootstraps every group and ignores this argument.
    service: Option<String>,
}

/// # Handle Setup Command (`handle_setup`)
///
/// The main asynchronous handler function for the `homestack setup` command.
///
/// ## Workflow:
/// 1.  Logs the start and parsed arguments (noting an ignored service token).
/// 2.  Loads the HomeStack configuration.
/// 3.  Creates the shared Docker network (409 duplicate → warning, success).
/// 4.  Creates the per-group stack directories and configuration subtrees.
/// 5.  Applies ownership/permissions to the media subtree, best-effort: a
///     failure is downgraded to a warning because the host may not permit
///     ownership changes.
///
/// ## Returns
///
/// * `Result<()>`: `Ok(())` once the network exists and the directory tree is
///   in place; the ownership outcome never fails the command.
pub async fn handle_setup(args: SetupArgs) -> Result<()> {
    info!("Handling setup command...");
    debug!("Setup args: {:?}", args);
    if let Some(service) = &args.service {
        debug!("'setup' bootstraps every group; ignoring service '{}'.", service);
    }

    let cfg = config::load_config().context("Failed to load HomeStack configuration")?;

    // 1. Shared network (idempotent; duplicate is a warning).
    docker::network::create_shared_network(&cfg.network.name).await?;

    // 2. Stack directory tree for every group.
    create_stack_tree(&cfg)?;

    // 3. Best-effort ownership pass over the media subtree.
    let media_dir = cfg.stack_dir(ServiceGroup::Media);
    match fs::perms::apply_owner_recursive(&media_dir, cfg.setup.owner_uid, cfg.setup.owner_gid) {
        Ok(touched) => {
            info!(
                "Applied {}:{} to {} entries under {}",
                cfg.setup.owner_uid,
                cfg.setup.owner_gid,
                touched,
                media_dir.display()
            );
            println!(
                "✅ Applied ownership {}:{} to the media subtree.",
                cfg.setup.owner_uid, cfg.setup.owner_gid
            );
        }
        Err(e) => {
            // The host may not allow chown; setup still counts as done.
            warn!("Ownership pass on {} failed: {:?}", media_dir.display(), e);
            println!(
                "⚠️  Could not apply ownership to '{}' ({}). Fix ownership manually if media services cannot write their config.",
                media_dir.display(),
                e
            );
        }
    }

    println!("✅ Setup complete.");
    Ok(())
}

/// Creates every group's stack directory plus its fixed configuration
/// subdirectories. `mkdir -p` semantics throughout, so re-runs are no-ops.
fn create_stack_tree(cfg: &Config) -> Result<()> {
    for group in ServiceGroup::ALL {
        let dir = cfg.stack_dir(group);
        fs::io::ensure_dir_exists(&dir)?;
        for sub in group.config_subdirs() {
            fs::io::ensure_dir_exists(&dir.join(sub))?;
        }
        println!("📁 {} ({})", group, dir.display());
    }
    Ok(())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::StacksConfig;
    use tempfile::tempdir;

    /// Test parsing arguments: bare, and with the ignored service token.
    #[test]
    fn test_setup_args_parsing() {
        let args = SetupArgs::try_parse_from(["setup"]).unwrap();
        assert!(args.service.is_none());

        // A service token parses and is simply ignored by the handler.
        let args_ignored = SetupArgs::try_parse_from(["setup", "media"]).unwrap();
        assert_eq!(args_ignored.service, Some("media".to_string()));
    }

    /// The directory tree covers every group and subdirectory, and creating
    /// it twice is a no-op (idempotency of repeated setup runs).
    #[test]
    fn test_create_stack_tree_idempotent() {
        let temp = tempdir().unwrap();
        let cfg = Config {
            stacks: StacksConfig {
                root: temp.path().to_string_lossy().to_string(),
            },
            ..Default::default()
        };

        create_stack_tree(&cfg).unwrap();
        for group in ServiceGroup::ALL {
            let dir = cfg.stack_dir(group);
            assert!(dir.is_dir());
            for sub in group.config_subdirs() {
                assert!(dir.join(sub).is_dir(), "missing {}/{}", group, sub);
            }
        }

        // Second run must not error.
        create_stack_tree(&cfg).unwrap();
    }

    // Note: `handle_setup` end-to-end (network creation included) requires a
    // running Docker daemon; that path is covered by the ignored integration
    // test in `tests/setup.rs`.
}
