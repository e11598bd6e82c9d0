//! # HomeStack Ownership & Permission Utilities
//!
//! File: cli/src/common/fs/perms.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/homestack
//!
//! ## Overview
//!
//! This module applies ownership and permissions to the media configuration
//! subtree during `homestack setup`. Media services (Jellyfin and the *arr
//! stack) run as an unprivileged uid/gid inside their containers and need to
//! write to their bind-mounted configuration directories, so setup chowns the
//! subtree to the configured owner and makes directories group-writable.
//!
//! The caller treats this step as best-effort: the wrapper may be running as
//! a user that is not allowed to change ownership, in which case the error is
//! reported as a warning rather than failing the whole setup.
//!
//! ## Architecture
//!
//! - **`apply_owner_recursive`**: walks the subtree with `walkdir`, chowns
//!   every entry to the given uid/gid, and sets mode `0o775` on directories.
//!   Returns the number of entries touched. On non-Unix hosts the function
//!   is a warning no-op (ownership is a Unix concept).
//!
use crate::core::error::Result;
use std::path::Path;
use tracing::debug;

/// Recursively applies `uid:gid` ownership to every entry under `root`, and
/// group-writable permissions (`0o775`) to directories. Returns the number
/// of filesystem entries touched.
///
/// # Errors
///
/// Returns an `Err` on the first entry whose ownership or permissions cannot
/// be changed (typically `EPERM` when not running as root or the owner).
/// Callers that want best-effort semantics catch this and downgrade it to a
/// warning.
#[cfg(unix)]
pub fn apply_owner_recursive(root: &Path, uid: u32, gid: u32) -> Result<usize> {
    use anyhow::Context;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use walkdir::WalkDir;

    let mut touched = 0;
    for entry in WalkDir::new(root) {
        let entry =
            entry.with_context(|| format!("Failed to walk subtree {:?}", root))?;
        let path = entry.path();

        std::os::unix::fs::chown(path, Some(uid), Some(gid))
            .with_context(|| format!("Failed to change ownership of {:?}", path))?;

        if entry.file_type().is_dir() {
            fs::set_permissions(path, fs::Permissions::from_mode(0o775))
                .with_context(|| format!("Failed to set permissions on {:?}", path))?;
        }
        touched += 1;
    }
    debug!(
        "Applied {}:{} ownership to {} entries under {:?}",
        uid, gid, touched, root
    );
    Ok(touched)
}

/// Ownership is a Unix concept; on other hosts this step does nothing.
#[cfg(not(unix))]
pub fn apply_owner_recursive(root: &Path, _uid: u32, _gid: u32) -> Result<usize> {
    tracing::warn!(
        "Skipping ownership pass on {:?}: not supported on this platform",
        root
    );
    Ok(0)
}
