//! # Toolchain Version Discovery (`common::toolchain::versions`)
//!
//! File: cli/src/common/toolchain/versions.rs
//!
//! ## Overview
//!
//! Asks the toolchain manager, the compiler and both cargo plugins for their
//! versions and gathers the results into a single `VersionInfo`.
//!
//! | Field       | Command                        | Extracted from             |
//! |-------------|--------------------------------|----------------------------|
//! | `toolchain` | `rustup show active-toolchain` | first token                |
//! | `rustc`     | `rustc --version`              | second token               |
//! | `bloat`     | `cargo bloat --version`        | whole banner, trimmed      |
//! | `tree`      | `cargo tree --version`         | second token               |
//!
//! Token positions depend on the exact banner format of each tool. The
//! extraction functions are pure and fail with `BloatError::UnexpectedOutput`
//! when the expected token is missing, instead of returning an empty string.
//! They do not check that the token *looks* like a version.
//!
use crate::{
    common::process::{command_line, CommandRunner},
    core::{
        config::ToolsConfig,
        error::{BloatError, Result},
    },
};
use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};

/// Versions of every tool involved in producing a size report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionInfo {
    pub rustc: String,
    pub toolchain: String,
    pub bloat: String,
    pub tree: String,
}

impl fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "toolchain:   {}", self.toolchain)?;
        writeln!(f, "rustc:       {}", self.rustc)?;
        writeln!(f, "cargo-bloat: {}", self.bloat)?;
        write!(f, "cargo-tree:  {}", self.tree)
    }
}

/// Runs the four version queries in sequence and parses their output.
pub async fn collect_versions<R: CommandRunner>(
    runner: &R,
    tools: &ToolsConfig,
) -> Result<VersionInfo> {
    info!("Collecting toolchain versions...");

    let toolchain_args = ["show", "active-toolchain"];
    let toolchain_out = runner.capture(&tools.rustup, &toolchain_args).await?;
    let toolchain = parse_toolchain(&command_line(&tools.rustup, &toolchain_args), &toolchain_out)?;

    let rustc_out = runner.capture(&tools.rustc, &["--version"]).await?;
    let rustc = parse_rustc_version(&command_line(&tools.rustc, &["--version"]), &rustc_out)?;

    let bloat_args = ["bloat", "--version"];
    let bloat_out = runner.capture(&tools.cargo, &bloat_args).await?;
    let bloat = parse_bloat_version(&command_line(&tools.cargo, &bloat_args), &bloat_out)?;

    let tree_args = ["tree", "--version"];
    let tree_out = runner.capture(&tools.cargo, &tree_args).await?;
    let tree = parse_tree_version(&command_line(&tools.cargo, &tree_args), &tree_out)?;

    debug!(
        "Toolchain: {} with rustc {}, cargo-bloat {} and cargo-tree {}",
        toolchain, rustc, bloat, tree
    );

    Ok(VersionInfo {
        rustc,
        toolchain,
        bloat,
        tree,
    })
}

/// `"stable-x86_64-unknown-linux-gnu (default)"` -> `"stable-x86_64-unknown-linux-gnu"`.
pub fn parse_toolchain(cmd: &str, output: &str) -> Result<String> {
    nth_token(cmd, output, 0)
}

/// `"rustc 1.70.0 (90c541806 2023-05-09)"` -> `"1.70.0"`.
pub fn parse_rustc_version(cmd: &str, output: &str) -> Result<String> {
    nth_token(cmd, output, 1)
}

/// The whole `cargo bloat --version` banner, trimmed.
pub fn parse_bloat_version(cmd: &str, output: &str) -> Result<String> {
    let trimmed = output.trim();
    if trimmed.is_empty() {
        return Err(unexpected(cmd, output));
    }
    Ok(trimmed.to_string())
}

/// `"cargo 1.70.0 (ec8a8a0ca 2023-04-25)"` -> `"1.70.0"`.
pub fn parse_tree_version(cmd: &str, output: &str) -> Result<String> {
    nth_token(cmd, output, 1)
}

fn nth_token(cmd: &str, output: &str, n: usize) -> Result<String> {
    output
        .split_whitespace()
        .nth(n)
        .map(str::to_string)
        .ok_or_else(|| unexpected(cmd, output))
}

fn unexpected(cmd: &str, output: &str) -> anyhow::Error {
    anyhow!(BloatError::UnexpectedOutput {
        cmd: cmd.to_string(),
        output: output.to_string(),
    })
}
