//! # HomeStack Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/homestack
//!
//! ## Overview
//!
//! This file serves as the main entry point for the HomeStack CLI application.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to appropriate command handlers
//!
//! ## Architecture
//!
//! The application is a thin dispatch layer over the external compose tool:
//! - Each lifecycle command (`start`, `stop`, `logs`, etc.) is a variant in the `Commands` enum
//! - Commands are mapped to handler functions in their respective modules
//! - All errors are propagated to this level for consistent handling
//!
//! ## Examples
//!
//! Basic HomeStack usage:
//!
//! ```bash
//! # Get help
//! homestack --help
//!
//! # Run a command with increased verbosity
//! homestack -vv start media
//! ```
//!
//! Command processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level
//! 3. Route to appropriate command handler
//! 4. Format and display any errors that occur
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

// Declare the top-level modules of the CLI crate.
mod commands; // Handles specific command logic (start, stop, setup, etc.)
mod common; // Contains shared utilities (compose, docker, fs)
mod core; // Core infrastructure (errors, config, service groups)

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "homestack",
    about = "🏠 HomeStack 📦: Grouped Compose Stack Orchestration for a Single Host",
    long_about = "Manage grouped containerized services (infrastructure, media, productivity)\n\
                  through high-level lifecycle commands dispatched to Docker Compose.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// Enum defining all available lifecycle commands.
#[derive(Parser, Debug)]
enum Commands {
    /// Bootstrap the shared network, stack directories, and media ownership.
    Setup(commands::setup::SetupArgs),
    /// Bring service group(s) up in detached mode.
    Start(commands::start::StartArgs),
    /// Tear service group(s) down.
    Stop(commands::stop::StopArgs),
    /// Restart the services of the selected group(s).
    Restart(commands::restart::RestartArgs),
    /// Follow compose logs for one named service group.
    Logs(commands::logs::LogsArgs),
    /// List container status for the selected group(s).
    Status(commands::status::StatusArgs),
    /// Pull latest images for the selected group(s), then bring them up.
    Update(commands::update::UpdateArgs),
    /// Prune stopped containers and unused images, volumes, and networks.
    Cleanup(commands::cleanup::CleanupArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Use anyhow::Result directly
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.command {
        Commands::Setup(args) => commands::setup::handle_setup(args).await,
        Commands::Start(args) => commands::start::handle_start(args).await,
        Commands::Stop(args) => commands::stop::handle_stop(args).await,
        Commands::Restart(args) => commands::restart::handle_restart(args).await,
        Commands::Logs(args) => commands::logs::handle_logs(args).await,
        Commands::Status(args) => commands::status::handle_status(args).await,
        Commands::Update(args) => commands::update::handle_update(args).await,
        Commands::Cleanup(args) => commands::cleanup::handle_cleanup(args).await,
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

// --- Basic Integration Tests ---
#[cfg(test)]
mod tests {
    use assert_cmd::Command;
    use predicates::prelude::*;
    fn homestack_cmd() -> Command {
        Command::cargo_bin("homestack").expect("Failed to find homestack binary for testing")
    }
    #[test]
    fn test_main_help_flag() {
        homestack_cmd().arg("--help").assert().success();
    }
    #[test]
    fn test_main_version_flag() {
        homestack_cmd()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}
