//! # bloatwatch Versions Handler
//!
//! File: cli/src/commands/versions.rs
//!
//! ## Overview
//!
//! Implements `bloatwatch versions`, which reports the active toolchain and
//! the versions of `rustc`, `cargo-bloat` and `cargo-tree`.
//!
//! ## Usage
//!
//! ```bash
//! bloatwatch versions
//! bloatwatch versions --json
//! ```
//!
use crate::{
    common::{process::SystemRunner, toolchain::versions},
    core::{config::Config, error::Result},
};
use anyhow::Context;
use clap::Parser;
use tracing::info;

#[derive(Parser, Debug)]
#[command(about = "Show the active toolchain and tool versions")]
pub struct VersionsArgs {
    /// Print the versions as a JSON object.
    #[arg(long)]
    json: bool,
}

pub async fn handle_versions(args: VersionsArgs, config: &Config) -> Result<()> {
    info!("Handling versions command (json: {})", args.json);
    let info = versions::collect_versions(&SystemRunner, &config.tools).await?;
    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&info).context("Failed to serialize versions")?
        );
    } else {
        println!("{}", info);
    }
    Ok(())
}
