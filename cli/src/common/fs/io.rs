//! # bloatwatch Filesystem I/O Utilities (`common::fs::io`)
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! Snapshot files are the only files bloatwatch writes. This module holds the
//! small set of helpers for reading and writing them as JSON:
//!
//! - `ensure_dir_exists`: `mkdir -p`, failing if the path is a file.
//! - `read_json`: read a file and deserialize it.
//! - `write_json`: serialize a value as pretty JSON, creating parent directories.
//!
//! Deserialization failures are reported as `BloatError::Json` so that a
//! corrupt snapshot surfaces the same way as corrupt tool output.
//!
use crate::core::error::{BloatError, Result};
use anyhow::{anyhow, Context};
use serde::{de::DeserializeOwned, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Ensures that a directory exists at the specified path, creating parents as needed.
///
/// # Errors
///
/// Returns an `Err` if the path exists but is not a directory, or if creating
/// the directory fails (e.g., due to permissions).
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {:?}", path))?;
        info!("Created directory: {:?}", path);
    } else if !path.is_dir() {
        anyhow::bail!(BloatError::FileSystem(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    } else {
        debug!("Directory already exists: {:?}", path);
    }
    Ok(())
}

/// Reads `path` and deserializes its JSON content.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read file {:?}", path))?;
    serde_json::from_str(&content).map_err(|source| {
        anyhow!(BloatError::Json {
            what: path.display().to_string(),
            source,
        })
    })
}

/// Writes `value` to `path` as pretty-printed JSON, overwriting any existing file.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir_exists(parent)?;
    }
    let mut content =
        serde_json::to_string_pretty(value).context("Failed to serialize value as JSON")?;
    content.push('\n');
    fs::write(path, content).with_context(|| format!("Failed to write to file {:?}", path))?;
    info!("Wrote {:?}", path);
    Ok(())
}
