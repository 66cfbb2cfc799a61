//! # bloatwatch Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the bloatwatch CLI.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Loading configuration and applying command-line overrides
//! - Routing execution to appropriate command handlers
//!
//! ## Examples
//!
//! ```bash
//! # Get help
//! bloatwatch --help
//!
//! # Size report with debug logging, using a specific cargo
//! bloatwatch -vv --cargo ~/.cargo/bin/cargo size
//! ```
//!
//! Command processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level
//! 3. Load configuration, apply `--cargo` / `BLOATWATCH_CARGO`
//! 4. Route to appropriate command handler
//! 5. Format and display any errors that occur
//!
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // Command handlers (versions, size, tree, ...)
mod common; // Process execution, collectors, snapshots
mod core; // Errors and configuration

use crate::core::error::BloatError;

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "bloatwatch",
    about = "Binary-size and dependency-tree snapshots for Cargo projects",
    long_about = "Collects crate-level binary size (cargo bloat), dependency trees (cargo tree)\n\
                  and toolchain versions, and compares snapshots taken at different commits.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Cargo program to invoke (overrides the configuration file).
    #[arg(long, env = "BLOATWATCH_CARGO", global = true)]
    cargo: Option<String>,
}

/// Enum defining all available top-level commands.
#[derive(Subcommand, Debug)]
enum Commands {
    #[command(alias = "v")]
    Versions(commands::versions::VersionsArgs),
    Install(commands::install::InstallArgs),
    #[command(alias = "s")]
    Size(commands::size::SizeArgs),
    #[command(alias = "t")]
    Tree(commands::tree::TreeArgs),
    Packages(commands::packages::PackagesArgs),
    Snapshot(commands::snapshot::SnapshotArgs),
    Compare(commands::compare::CompareArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
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

    if let Err(e) = run(cli).await {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        if let Some(hint) = e.downcast_ref::<BloatError>().and_then(hint_for) {
            eprintln!("Hint: {}", hint);
        }
        std::process::exit(1);
    }

    Ok(())
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = crate::core::config::load_config()?;
    config.apply_overrides(cli.cargo.as_deref());

    match cli.command {
        Commands::Versions(args) => commands::versions::handle_versions(args, &config).await,
        Commands::Install(args) => commands::install::handle_install(args, &config).await,
        Commands::Size(args) => commands::size::handle_size(args, &config).await,
        Commands::Tree(args) => commands::tree::handle_tree(args, &config).await,
        Commands::Packages(args) => commands::packages::handle_packages(args, &config).await,
        Commands::Snapshot(args) => commands::snapshot::handle_snapshot(args, &config).await,
        Commands::Compare(args) => commands::compare::handle_compare(args).await,
    }
}

/// Follow-up advice printed after an error, if any applies.
fn hint_for(err: &BloatError) -> Option<&'static str> {
    if err.is_execution() {
        Some("check that the tool is on PATH; `bloatwatch install` installs cargo-bloat and cargo-tree.")
    } else if err.is_parse() {
        Some("the tool printed something unexpected; rerun with -vv to see the command lines.")
    } else {
        None
    }
}
