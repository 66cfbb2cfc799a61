//! # Size Report Collector (`common::toolchain::bloat`)
//!
//! File: cli/src/common/toolchain/bloat.rs
//!
//! ## Overview
//!
//! Runs `cargo bloat` in crates mode over a release, all-features build and
//! parses its JSON report. The attribution of bytes to crates is done
//! entirely by `cargo-bloat`; this module only mirrors its output schema.
//!
//! ## Output Schema
//!
//! ```json
//! {
//!   "file-size": 3940400,
//!   "text-section-size": 1220920,
//!   "crates": [
//!     { "name": "std", "size": 450000 },
//!     { "name": "serde_json", "size": 91000 }
//!   ]
//! }
//! ```
//!
use crate::{
    common::process::CommandRunner,
    core::{
        config::ToolsConfig,
        error::{BloatError, Result},
    },
};
use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Arguments for an unlimited, crate-level, JSON size report.
pub const BLOAT_ARGS: [&str; 7] = [
    "bloat",
    "--release",
    "--message-format=json",
    "--all-features",
    "--crates",
    "-n",
    "0",
];

/// Size breakdown of the compiled binary as reported by `cargo bloat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SizeReport {
    /// Size of the whole binary file in bytes.
    pub file_size: u64,
    /// Size of the `.text` section in bytes.
    pub text_section_size: u64,
    /// Per-crate contributions, in the order `cargo bloat` printed them.
    pub crates: Vec<ComponentSize>,
}

/// One crate's contribution to the `.text` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentSize {
    pub name: String,
    pub size: u64,
}

/// Builds the project with `cargo bloat` and returns the parsed report.
pub async fn collect_size_report<R: CommandRunner>(
    runner: &R,
    tools: &ToolsConfig,
) -> Result<SizeReport> {
    info!("Collecting size report with cargo bloat...");
    let output = runner.capture(&tools.cargo, &BLOAT_ARGS).await?;
    let report = parse_size_report(&output)?;
    debug!(
        "Size report: file {} bytes, text {} bytes, {} crates",
        report.file_size,
        report.text_section_size,
        report.crates.len()
    );
    Ok(report)
}

/// Parses the JSON document printed by `cargo bloat --message-format=json`.
pub fn parse_size_report(output: &str) -> Result<SizeReport> {
    serde_json::from_str(output).map_err(|source| {
        anyhow!(BloatError::Json {
            what: "cargo bloat output".to_string(),
            source,
        })
    })
}
