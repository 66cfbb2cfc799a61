//! # Dependency Tree Collector (`common::toolchain::tree`)
//!
//! File: cli/src/common/toolchain/tree.rs
//!
//! Renders the dependency tree of one workspace package with
//! `cargo tree --prefix-depth --all-features -p <package>`.
//!
//! With `--prefix-depth` every line starts with its depth instead of
//! box-drawing connectors, which keeps the text stable and easy to diff:
//!
//! ```text
//! 0my-app v0.1.0 (/work/my-app)
//! 1serde v1.0.188
//! 2serde_derive v1.0.188 (proc-macro)
//! ```
//!
//! The first line names the package itself (with its version and path) and
//! is dropped, so only the dependencies remain.
//!
use crate::{
    common::process::CommandRunner,
    core::{config::ToolsConfig, error::Result},
};
use tracing::info;

/// Returns the dependency tree of `package` without its leading banner line.
pub async fn collect_tree<R: CommandRunner>(
    runner: &R,
    tools: &ToolsConfig,
    package: &str,
) -> Result<String> {
    info!("Collecting dependency tree for package '{}'", package);
    let args = ["tree", "--prefix-depth", "--all-features", "-p", package];
    let output = runner.capture(&tools.cargo, &args).await?;
    Ok(strip_banner(&output))
}

/// Drops everything up to and including the first `'\n'`.
///
/// Lines are split on `'\n'` only, so any `'\r'` stays part of its line.
pub fn strip_banner(output: &str) -> String {
    output.split('\n').skip(1).collect::<Vec<_>>().join("\n")
}
