//! # bloatwatch Snapshot Handler
//!
//! File: cli/src/commands/snapshot.rs
//!
//! ## Overview
//!
//! Implements `bloatwatch snapshot`, which runs every collector (versions,
//! package list, size report, one dependency tree per package) and emits the
//! result as a single JSON document.
//!
//! ## Architecture
//!
//! 1. Collect the snapshot via `common::snapshot::collect_snapshot`.
//! 2. Decide the destination:
//!    * `--output FILE`: that file (parent directories are created).
//!    * `--save`: `<snapshot.directory>/snapshot-<UTC timestamp>.json` from the configuration.
//!    * neither: standard output.
//! 3. Write pretty-printed JSON.
//!
//! Collection happens before anything is written, so a failing tool never
//! leaves a truncated snapshot file behind.
//!
//! ## Usage
//!
//! ```bash
//! bloatwatch snapshot > before.json
//! bloatwatch snapshot --output target/bloat/after.json
//! bloatwatch snapshot --save
//! ```
//!
use crate::{
    common::{process::SystemRunner, snapshot},
    core::{config::Config, error::Result},
};
use anyhow::Context;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser, Debug)]
#[command(about = "Collect versions, sizes and dependency trees into one JSON snapshot")]
pub struct SnapshotArgs {
    /// Write the snapshot to this file instead of standard output.
    #[arg(short, long, conflicts_with = "save")]
    output: Option<PathBuf>,

    /// Write the snapshot into the configured snapshot directory.
    #[arg(long)]
    save: bool,
}

/// Where the snapshot should go, resolved from the arguments and configuration.
fn destination(args: &SnapshotArgs, config: &Config, file_name: &Path) -> Option<PathBuf> {
    match (&args.output, args.save) {
        (Some(path), _) => Some(path.clone()),
        (None, true) => Some(PathBuf::from(&config.snapshot.directory).join(file_name)),
        (None, false) => None,
    }
}

pub async fn handle_snapshot(args: SnapshotArgs, config: &Config) -> Result<()> {
    info!("Handling snapshot command with args: {:?}", args);
    let snap = snapshot::collect_snapshot(&SystemRunner, &config.tools).await?;

    match destination(&args, config, &snapshot::default_file_name(&snap)) {
        Some(path) => {
            snapshot::save(&path, &snap)?;
            println!("Snapshot written to {}", path.display());
        }
        None => println!(
            "{}",
            serde_json::to_string_pretty(&snap).context("Failed to serialize snapshot")?
        ),
    }
    Ok(())
}
