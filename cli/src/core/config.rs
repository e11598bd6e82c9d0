//! # HomeStack Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/homestack
//!
//! ## Overview
//!
//! This module implements the configuration system for HomeStack, handling loading,
//! merging, validation, and access to configuration data. It supports a multi-level
//! configuration approach that combines defaults, user settings, and host-specific
//! overrides.
//!
//! All defaults reproduce the wrapper's out-of-the-box behavior: stacks live in
//! the current working directory, the external tool is `docker compose`, the
//! shared network is called `homestack`, and the setup ownership pass targets
//! uid/gid 1000.
//!
//! ## Architecture
//!
//! The configuration system follows these principles:
//! - Configuration is loaded from multiple sources in order of precedence
//! - Paths are validated and expanded (e.g., `~` to home directory)
//! - Configuration is validated for correctness before use
//! - Structured data models ensure type safety
//!
//! Configuration sources (in order of precedence):
//! 1. Host-specific `.homestack.toml` in current directory or ancestors
//! 2. User-specific `~/.config/homestack/config.toml`
//! 3. Default values defined in the code
//!
//! ## Examples
//!
//! Loading and using configuration:
//!
//! ```rust
//! let cfg = config::load_config()?;
//!
//! // Where does the media stack live?
//! let media_dir = cfg.stack_dir(ServiceGroup::Media);
//!
//! // What do we invoke to realize lifecycle operations?
//! let argv = &cfg.compose.command; // e.g. ["docker", "compose"]
//! ```
//!
//! The configuration is loaded once per command execution and passed
//! to the modules that need it.
//!
use crate::core::error::{HomestackError, Result};
use crate::core::groups::ServiceGroup;
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)] // Error if unknown fields are in TOML
pub struct Config {
    #[serde(default)]
    pub stacks: StacksConfig,
    #[serde(default)]
    pub compose: ComposeConfig,
    #[serde(default)]
    pub network: NetworkConfig,
    #[serde(default)]
    pub setup: SetupConfig,
    // Add other top-level configuration sections here
}

/// Configuration for the stack directory layout.
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct StacksConfig {
    /// Root directory containing the per-group compose directories (can use ~).
    /// Will be expanded. Defaults to the current working directory.
    #[serde(default = "default_stacks_root")]
    pub root: String,
}

/// Configuration for the external container-orchestration command.
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct ComposeConfig {
    /// The command invoked per stack directory, as an argv prefix.
    /// The fixed subcommand suffix (`up -d`, `down`, ...) is appended to it.
    #[serde(default = "default_compose_command")]
    pub command: Vec<String>,
}

/// Configuration for the shared Docker network created by `homestack setup`.
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct NetworkConfig {
    /// Name of the shared bridge network that stacks attach to.
    #[serde(default = "default_network_name")]
    pub name: String,
}

/// Configuration for the setup ownership pass over the media subtree.
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct SetupConfig {
    /// Owner uid applied to the media configuration subtree.
    #[serde(default = "default_owner_id")]
    pub owner_uid: u32,
    /// Owner gid applied to the media configuration subtree.
    #[serde(default = "default_owner_id")]
    pub owner_gid: u32,
}

impl Default for StacksConfig {
    fn default() -> Self {
        StacksConfig {
            root: default_stacks_root(),
        }
    }
}

impl Default for ComposeConfig {
    fn default() -> Self {
        ComposeConfig {
            command: default_compose_command(),
        }
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        NetworkConfig {
            name: default_network_name(),
        }
    }
}

impl Default for SetupConfig {
    fn default() -> Self {
        SetupConfig {
            owner_uid: default_owner_id(),
            owner_gid: default_owner_id(),
        }
    }
}

fn default_stacks_root() -> String {
    ".".to_string() // Stacks live where the wrapper is invoked unless overridden
}
fn default_compose_command() -> Vec<String> {
    vec!["docker".to_string(), "compose".to_string()]
}
fn default_network_name() -> String {
    "homestack".to_string()
}
fn default_owner_id() -> u32 {
    1000
}

impl Config {
    /// The expanded stacks root as a path.
    pub fn stacks_root(&self) -> PathBuf {
        PathBuf::from(&self.stacks.root)
    }

    /// The compose directory backing a service group.
    pub fn stack_dir(&self, group: ServiceGroup) -> PathBuf {
        self.stacks_root().join(group.name())
    }
}

const HOST_CONFIG_FILENAME: &str = ".homestack.toml";

pub fn load_config() -> Result<Config> {
    let user_config = load_user_config()?;
    let host_config = load_host_config()?;
    let mut merged_config = merge_configs(user_config.unwrap_or_default(), host_config);
    expand_config_paths(&mut merged_config).context("Failed to expand paths in configuration")?;
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "HomeStack", "homestack") {
        let config_dir = proj_dirs.config_dir();
        let config_path = config_dir.join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_host_config() -> Result<Option<Config>> {
    if let Some(host_config_path) = find_host_config_path()? {
        info!(
            "Loading host configuration from: {}",
            host_config_path.display()
        );
        load_config_from_path(&host_config_path).map(Some)
    } else {
        debug!(
            "No host configuration file (.homestack.toml) found in current directory or ancestors."
        );
        Ok(None)
    }
}

fn find_host_config_path() -> Result<Option<PathBuf>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    let mut path: &Path = &current_dir;
    loop {
        let host_config = path.join(HOST_CONFIG_FILENAME);
        let git_dir = path.join(".git");
        if host_config.exists() && host_config.is_file() {
            return Ok(Some(host_config));
        }
        if git_dir.exists() && git_dir.is_dir() {
            debug!(
                "Found .git directory at {}, stopping host config search.",
                path.display()
            );
            return Ok(None);
        }
        match path.parent() {
            Some(parent) => path = parent,
            None => break,
        }
    }
    Ok(None)
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

fn merge_configs(user: Config, host: Option<Config>) -> Config {
    let host_cfg = match host {
        Some(h) => h,
        None => return user,
    };
    let mut merged = Config::default();
    merged.stacks.root = if host_cfg.stacks.root != default_stacks_root() {
        host_cfg.stacks.root
    } else {
        user.stacks.root
    };
    merged.compose.command = if host_cfg.compose.command != default_compose_command() {
        host_cfg.compose.command
    } else {
        user.compose.command
    };
    merged.network.name = if host_cfg.network.name != default_network_name() {
        host_cfg.network.name
    } else {
        user.network.name
    };
    merged.setup.owner_uid = if host_cfg.setup.owner_uid != default_owner_id() {
        host_cfg.setup.owner_uid
    } else {
        user.setup.owner_uid
    };
    merged.setup.owner_gid = if host_cfg.setup.owner_gid != default_owner_id() {
        host_cfg.setup.owner_gid
    } else {
        user.setup.owner_gid
    };
    merged
}

fn expand_config_paths(config: &mut Config) -> Result<()> {
    debug!("Expanding paths in configuration...");
    config.stacks.root = shellexpand::tilde(&config.stacks.root).into_owned();
    debug!("Expanded stacks root: {}", config.stacks.root);
    Ok(())
}

fn validate_config(config: &Config) -> Result<()> {
    info!("Validating final configuration...");
    if config.stacks.root.is_empty() {
        return Err(anyhow!(HomestackError::Config(
            "Stacks root cannot be empty.".to_string()
        )));
    }
    let root = PathBuf::from(&config.stacks.root);
    if root.exists() && !root.is_dir() {
        return Err(anyhow!(HomestackError::Config(format!(
            "Configured stacks root '{}' exists but is not a directory.",
            root.display()
        ))));
    }
    if !root.exists() {
        warn!(
            "Configured stacks root '{}' does not exist yet. Run 'homestack setup' to create it.",
            root.display()
        );
    }
    if config.compose.command.is_empty() {
        return Err(anyhow!(HomestackError::Config(
            "Compose command cannot be empty.".to_string()
        )));
    }
    if config.network.name.is_empty() {
        return Err(anyhow!(HomestackError::Config(
            "Shared network name cannot be empty.".to_string()
        )));
    }
    info!("Configuration validation successful.");
    Ok(())
}
