//! # bloatwatch Snapshots (`common::snapshot`)
//!
//! File: cli/src/common/snapshot/mod.rs
//!
//! ## Overview
//!
//! A snapshot records everything bloatwatch can learn about a project at one
//! point in time: tool versions, the crate-level size report, and the
//! dependency tree of every workspace package. Snapshots taken on different
//! commits can be compared with `diff::compare_snapshots`.
//!
//! ## Collection Order
//!
//! 1. `versions::collect_versions`
//! 2. `metadata::collect_packages`
//! 3. `bloat::collect_size_report`
//! 4. `tree::collect_tree` once per package, in metadata order
//!
//! Each step waits for the previous one. The first failure aborts the
//! snapshot; no partially filled snapshot is ever returned.
//!
use crate::{
    common::{
        fs::io,
        process::CommandRunner,
        toolchain::{
            bloat::{self, SizeReport},
            metadata, tree,
            versions::{self, VersionInfo},
        },
    },
    core::{config::ToolsConfig, error::Result},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};
use tracing::info;

pub mod diff;

/// Everything collected about a project by one `bloatwatch snapshot` run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub created_at: DateTime<Utc>,
    pub versions: VersionInfo,
    pub size: SizeReport,
    /// Dependency tree text keyed by package name.
    pub trees: BTreeMap<String, String>,
}

/// Runs every collector in sequence and assembles a `Snapshot`.
pub async fn collect_snapshot<R: CommandRunner>(runner: &R, tools: &ToolsConfig) -> Result<Snapshot> {
    let versions = versions::collect_versions(runner, tools).await?;
    let packages = metadata::collect_packages(runner, tools).await?;
    let size = bloat::collect_size_report(runner, tools).await?;

    let mut trees = BTreeMap::new();
    for name in packages.names() {
        let text = tree::collect_tree(runner, tools, name).await?;
        trees.insert(name.to_string(), text);
    }

    info!(
        "Snapshot complete: {} crates, {} package tree(s)",
        size.crates.len(),
        trees.len()
    );
    Ok(Snapshot {
        created_at: Utc::now(),
        versions,
        size,
        trees,
    })
}

/// Loads a snapshot previously written by `save`.
pub fn load(path: &Path) -> Result<Snapshot> {
    io::read_json(path)
}

/// Writes `snapshot` to `path` as pretty JSON.
pub fn save(path: &Path, snapshot: &Snapshot) -> Result<()> {
    io::write_json(path, snapshot)
}

/// File name used by `snapshot --save`, e.g. `snapshot-20231005T141502Z.json`.
pub fn default_file_name(snapshot: &Snapshot) -> PathBuf {
    PathBuf::from(format!(
        "snapshot-{}.json",
        snapshot.created_at.format("%Y%m%dT%H%M%SZ")
    ))
}
