//! # bloatwatch Compare Handler
//!
//! File: cli/src/commands/compare.rs
//!
//! ## Overview
//!
//! Implements `bloatwatch compare OLD NEW`, which loads two snapshot files
//! written by `bloatwatch snapshot` and reports how the binary changed
//! between them. No external tools are invoked.
//!
//! ## Usage
//!
//! ```bash
//! bloatwatch snapshot -o before.json
//! # ... change code ...
//! bloatwatch snapshot -o after.json
//! bloatwatch compare before.json after.json
//! ```
//!
use crate::{
    common::snapshot::{self, diff},
    core::error::Result,
};
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(about = "Compare two snapshot files")]
pub struct CompareArgs {
    /// Baseline snapshot.
    old: PathBuf,

    /// Snapshot to compare against the baseline.
    new: PathBuf,

    /// Print the comparison as JSON.
    #[arg(long)]
    json: bool,
}

pub async fn handle_compare(args: CompareArgs) -> Result<()> {
    info!(
        "Comparing snapshots {} -> {}",
        args.old.display(),
        args.new.display()
    );
    let old = snapshot::load(&args.old)
        .with_context(|| format!("Failed to load snapshot {}", args.old.display()))?;
    let new = snapshot::load(&args.new)
        .with_context(|| format!("Failed to load snapshot {}", args.new.display()))?;

    let result = diff::compare_snapshots(&old, &new);
    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&result).context("Failed to serialize comparison")?
        );
    } else {
        println!("{}", result);
    }
    Ok(())
}
