//! # HomeStack Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/homestack
//!
//! ## Overview
//!
//! This module defines the error types and error handling mechanisms used throughout
//! the HomeStack application. It provides a consistent approach to error management
//! with detailed error information and context.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `HomestackError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! The error types cover various domains:
//! - Configuration errors
//! - Filesystem errors
//! - Docker Engine API errors
//! - Service-group resolution errors
//! - External compose command failures
//!
//! ## Examples
//!
//! Using the error system:
//!
//! ```rust
//! // Return a specific error type
//! if !dir.is_dir() {
//!     return Err(HomestackError::StackNotFound {
//!         group: "media".into(),
//!         path: dir.display().to_string(),
//!     })?;
//! }
//!
//! // Add context to errors using anyhow
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read file: {}", path.display()))?;
//! ```
//!
//! The error system provides detailed error messages to the user and
//! includes context information for debugging.
//!
use thiserror::Error;

/// Custom error type for the HomeStack application.
// Removed PartialEq derive because source fields don't implement it.
#[derive(Error, Debug)]
pub enum HomestackError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    #[error("Docker API interaction failed: {source}")]
    DockerApi {
        #[from]
        source: bollard::errors::Error,
    },

    #[error("Unknown service group '{name}'. Valid groups: infrastructure, media, productivity, all.")]
    UnknownService { name: String },

    #[error("Stack directory for '{group}' not found at '{path}'. Run 'homestack setup' first.")]
    StackNotFound { group: String, path: String },

    #[error("External command failed: {cmd} (status: {status})")]
    ExternalCommand { cmd: String, status: String },

    #[error("Argument parsing error: {0}")]
    ArgumentParsing(String),

    #[error("Operation failed for {failed} of {total} service group(s).")]
    GroupFailures { failed: usize, total: usize },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
/// Anyhow allows for easy context addition and flexible error handling.
pub type Result<T> = anyhow::Result<T>;

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let config_err = HomestackError::Config("Missing setting 'foo'".to_string());
        assert_eq!(
            config_err.to_string(),
            "Configuration error: Missing setting 'foo'"
        );

        let unknown_service = HomestackError::UnknownService {
            name: "mediaa".into(),
        };
        assert_eq!(
            unknown_service.to_string(),
            "Unknown service group 'mediaa'. Valid groups: infrastructure, media, productivity, all."
        );

        let stack_not_found = HomestackError::StackNotFound {
            group: "media".into(),
            path: "/srv/stacks/media".into(),
        };
        assert_eq!(
            stack_not_found.to_string(),
            "Stack directory for 'media' not found at '/srv/stacks/media'. Run 'homestack setup' first."
        );

        let group_failures = HomestackError::GroupFailures {
            failed: 1,
            total: 3,
        };
        assert_eq!(
            group_failures.to_string(),
            "Operation failed for 1 of 3 service group(s)."
        );
    }
}
