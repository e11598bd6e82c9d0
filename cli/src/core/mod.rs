//! # HomeStack Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/homestack
//!
//! ## Overview
//!
//! This module groups the foundational infrastructure shared by every command
//! in the HomeStack CLI:
//!
//! - **`config`**: Loading, merging, and validating configuration
//!   (stacks root, compose command, network name, setup ownership).
//! - **`error`**: The `HomestackError` enum and the application `Result` alias.
//! - **`groups`**: The static service-group model and the selector resolver.
//!
//! ## Usage
//!
//! ```rust
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{HomestackError, Result}; // For error handling
//! use crate::core::groups::{resolve_groups, ServiceGroup}; // For group resolution
//! ```
//!
//! These modules provide foundational capabilities that are used across
//! different parts of the application, ensuring consistent behavior.
//!
pub mod config;
pub mod error;
pub mod groups;
