//! # Package List Collector (`common::toolchain::metadata`)
//!
//! File: cli/src/common/toolchain/metadata.rs
//!
//! Lists the workspace's own packages via
//! `cargo metadata --no-deps --format-version=1`. Only package names are
//! kept; every other field of the metadata document is ignored.
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

pub const METADATA_ARGS: [&str; 3] = ["metadata", "--no-deps", "--format-version=1"];

/// Subset of the `cargo metadata` document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageList {
    pub packages: Vec<Package>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    pub name: String,
}

impl PackageList {
    /// Package names in metadata order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.packages.iter().map(|p| p.name.as_str())
    }
}

pub async fn collect_packages<R: CommandRunner>(
    runner: &R,
    tools: &ToolsConfig,
) -> Result<PackageList> {
    info!("Listing workspace packages with cargo metadata...");
    let output = runner.capture(&tools.cargo, &METADATA_ARGS).await?;
    let packages = parse_package_list(&output)?;
    debug!("Found {} package(s)", packages.packages.len());
    Ok(packages)
}

pub fn parse_package_list(output: &str) -> Result<PackageList> {
    serde_json::from_str(output).map_err(|source| {
        anyhow!(BloatError::Json {
            what: "cargo metadata output".to_string(),
            source,
        })
    })
}
