//! # HomeStack Service Group Model
//!
//! File: cli/src/core/groups.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/homestack
//!
//! ## Overview
//!
//! This module defines the static model of the three **service groups** managed
//! by HomeStack (`infrastructure`, `media`, `productivity`) and the resolver
//! that maps a user-supplied service token onto one or more of them.
//!
//! Each group is backed by a Docker Compose directory of the same name under
//! the configured stacks root, plus a fixed tree of per-service configuration
//! subdirectories that `homestack setup` creates.
//!
//! ## Architecture
//!
//! - `ServiceGroup`: a `Copy` enum with constant metadata (name, declared
//!   order, configuration subdirectories). Identity is the name; there is no
//!   mutable state.
//! - `resolve_groups`: maps `None` / `"all"` to the full table in declared
//!   order, an exact group name to a single group, and anything else to
//!   `HomestackError::UnknownService`. The group table is passed in explicitly
//!   rather than referenced as ambient state, so the resolver stays a pure
//!   function of its inputs.
//!
//! ## Examples
//!
//! ```rust
//! use crate::core::groups::{resolve_groups, ServiceGroup};
//!
//! // `start` with no service operates on every group, in declared order.
//! let all = resolve_groups(&ServiceGroup::ALL, None)?;
//! assert_eq!(all.len(), 3);
//!
//! // `start media` operates on the media group only.
//! let media = resolve_groups(&ServiceGroup::ALL, Some("media"))?;
//! assert_eq!(media, vec![ServiceGroup::Media]);
//! ```
//!
use crate::core::error::{HomestackError, Result};
use anyhow::anyhow;
use std::fmt;

/// Service token that selects every group at once.
pub const ALL_TOKEN: &str = "all";

/// One of the three fixed deployment categories managed by HomeStack.
///
/// Each variant corresponds to a compose directory of the same name under the
/// stacks root (see `core::config::Config::stack_dir`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceGroup {
    /// Reverse proxy, dashboard, and other host plumbing.
    Infrastructure,
    /// Media server and its companion download/indexing services.
    Media,
    /// Self-hosted productivity applications (files, passwords, documents).
    Productivity,
}

impl ServiceGroup {
    /// All groups, in the fixed declared order used by `all` operations.
    pub const ALL: [ServiceGroup; 3] = [
        ServiceGroup::Infrastructure,
        ServiceGroup::Media,
        ServiceGroup::Productivity,
    ];

    /// The group's canonical name, which is also its directory name.
    pub fn name(&self) -> &'static str {
        match self {
            ServiceGroup::Infrastructure => "infrastructure",
            ServiceGroup::Media => "media",
            ServiceGroup::Productivity => "productivity",
        }
    }

    /// Parses an exact group name. Returns `None` for anything else,
    /// including the `all` token (callers treat that separately).
    pub fn parse(token: &str) -> Option<ServiceGroup> {
        ServiceGroup::ALL.iter().copied().find(|g| g.name() == token)
    }

    /// Per-service configuration subdirectories created by `homestack setup`
    /// inside this group's stack directory. These back the bind mounts
    /// referenced by each group's compose file.
    pub fn config_subdirs(&self) -> &'static [&'static str] {
        match self {
            ServiceGroup::Infrastructure => &["traefik", "traefik/dynamic", "portainer", "homepage"],
            ServiceGroup::Media => &["jellyfin", "sonarr", "radarr", "prowlarr", "qbittorrent"],
            ServiceGroup::Productivity => &["nextcloud", "vaultwarden", "paperless"],
        }
    }
}

impl fmt::Display for ServiceGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolves a service selector into the list of target groups.
///
/// `groups` is the table of known groups (normally `ServiceGroup::ALL`,
/// injected explicitly so the resolver has no ambient state). The selector
/// rules are:
///
/// - `None` or `Some("all")` → every group in `groups`, in table order.
/// - An exact group name → that single group.
/// - Anything else → `HomestackError::UnknownService`.
///
/// # Errors
///
/// Returns `HomestackError::UnknownService` for a token that names no group.
pub fn resolve_groups(groups: &[ServiceGroup], selector: Option<&str>) -> Result<Vec<ServiceGroup>> {
    match selector {
        None => Ok(groups.to_vec()),
        Some(ALL_TOKEN) => Ok(groups.to_vec()),
        Some(token) => match ServiceGroup::parse(token) {
            Some(group) if groups.contains(&group) => Ok(vec![group]),
            _ => Err(anyhow!(HomestackError::UnknownService {
                name: token.to_string(),
            })),
        },
    }
}
