//! # HomeStack Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/homestack
//!
//! ## Overview
//!
//! This module centralizes the fundamental filesystem operations required by
//! the setup routine. It provides a convenient, robust wrapper around the
//! standard library `std::fs` functions for ensuring directories exist.
//!
//! ## Architecture
//!
//! - **`ensure_dir_exists`**: Checks if a directory exists at the given path.
//!   If not, it creates the directory, including any necessary parent
//!   directories (`fs::create_dir_all`). It also validates that if a path
//!   *does* exist, it is actually a directory. Because creation is
//!   `mkdir -p`-shaped, repeated `homestack setup` runs are idempotent.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::fs::io;
//! use crate::core::error::Result;
//! use std::path::Path;
//!
//! # fn run_example() -> Result<()> {
//! let config_dir = Path::new("./media/jellyfin");
//!
//! // Ensure a directory exists, creating intermediates if needed.
//! io::ensure_dir_exists(config_dir)?;
//! # Ok(())
//! # }
//! ```
//!
use crate::core::error::{HomestackError, Result}; // Use standard Result and custom Error types
use anyhow::Context; // For adding context to errors
use std::fs; // Standard filesystem module
use std::path::Path; // Filesystem path type
use tracing::{debug, info}; // Logging utilities

/// Ensures that a directory exists at the specified path.
///
/// If the path does not exist, this function attempts to create the directory,
/// including any necessary parent directories (similar to `mkdir -p`).
/// If the path already exists but is not a directory (e.g., it's a file),
/// an error (`HomestackError::FileSystem`) is returned.
///
/// # Arguments
///
/// * `path` - A `&Path` reference to the directory path to ensure exists.
///
/// # Returns
///
/// * `Result<()>` - Returns `Ok(())` if the directory exists or was successfully created.
///
/// # Errors
///
/// Returns an `Err` if:
/// - The path exists but is not a directory.
/// - Creating the directory fails (e.g., due to permissions).
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    // Check if the path exists in the filesystem.
    if !path.exists() {
        // Path does not exist, attempt to create it recursively.
        fs::create_dir_all(path)
            // Add context to any error occurring during directory creation.
            .with_context(|| format!("Failed to create directory {:?}", path))?;
        // Log the successful creation.
        info!("Created directory: {:?}", path);
    }
    // Path exists, check if it's actually a directory.
    else if !path.is_dir() {
        // It exists but is not a directory (e.g., a file). Return an error.
        anyhow::bail!(HomestackError::FileSystem(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    }
    // Path exists and is already a directory.
    else {
        // Log that no action was needed (debug level).
        debug!("Directory already exists: {:?}", path);
    }
    // If we reach here, the directory exists (either pre-existing or newly created).
    Ok(())
}
