//! # bloatwatch Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module handles loading, merging, validation, and access to
//! configuration data. Configuration tells bloatwatch which programs to invoke
//! for `cargo`, `rustup` and `rustc`, and where `snapshot --save` stores its
//! files.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Command-line flags / `BLOATWATCH_CARGO` (applied by the caller via `apply_overrides`)
//! 2. Project-specific `.bloatwatch.toml` in current directory or ancestors
//! 3. User-specific `<config dir>/bloatwatch/config.toml`
//! 4. Default values defined in the code
//!
//! The project search stops at the first directory containing `.git`.
//!
//! ## Examples
//!
//! ```toml
//! [tools]
//! cargo = "/opt/rust/bin/cargo"
//!
//! [snapshot]
//! directory = "~/bloat-snapshots"
//! ```
//!
//! ```rust
//! let mut cfg = config::load_config()?;
//! cfg.apply_overrides(cli.cargo.as_deref());
//! let report = bloat::collect_size_report(&runner, &cfg.tools).await?;
//! ```
//!
use crate::core::error::{BloatError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub tools: ToolsConfig,
    #[serde(default)]
    pub snapshot: SnapshotConfig,
}

/// Programs invoked by the collectors. Each value is either a bare name
/// resolved on `PATH` or a path to an executable.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ToolsConfig {
    /// Program used for every cargo subcommand (`bloat`, `tree`, `metadata`, `install`).
    #[serde(default = "default_cargo")]
    pub cargo: String,
    /// Toolchain manager used to report the active toolchain.
    #[serde(default = "default_rustup")]
    pub rustup: String,
    /// Compiler queried for its version.
    #[serde(default = "default_rustc")]
    pub rustc: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            cargo: default_cargo(),
            rustup: default_rustup(),
            rustc: default_rustc(),
        }
    }
}

/// Settings for `bloatwatch snapshot --save`.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SnapshotConfig {
    /// Directory where saved snapshots are written (can use ~). Will be expanded.
    #[serde(default = "default_snapshot_dir")]
    pub directory: String,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            directory: default_snapshot_dir(),
        }
    }
}

fn default_cargo() -> String {
    "cargo".to_string()
}
fn default_rustup() -> String {
    "rustup".to_string()
}
fn default_rustc() -> String {
    "rustc".to_string()
}
fn default_snapshot_dir() -> String {
    "~/.local/share/bloatwatch/snapshots".to_string()
}

const PROJECT_CONFIG_FILENAME: &str = ".bloatwatch.toml";

impl Config {
    /// Applies command-line overrides on top of the file-based configuration.
    pub fn apply_overrides(&mut self, cargo: Option<&str>) {
        if let Some(cargo) = cargo {
            debug!("Overriding cargo program with '{}'", cargo);
            self.tools.cargo = cargo.to_string();
        }
    }
}

/// Loads the merged user + project configuration, expanded and validated.
pub fn load_config() -> Result<Config> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    load_config_from(&current_dir)
}

/// Same as `load_config`, but searches for the project file starting at `start`.
pub fn load_config_from(start: &Path) -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = match find_project_config_path(start) {
        Some(path) => {
            info!("Loading project configuration from: {}", path.display());
            Some(load_config_from_path(&path)?)
        }
        None => {
            debug!("No project configuration file (.bloatwatch.toml) found.");
            None
        }
    };
    let mut merged_config = merge_configs(user_config.unwrap_or_default(), project_config);
    expand_config_paths(&mut merged_config);
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<Config>> {
    let Some(proj_dirs) = ProjectDirs::from("", "", "bloatwatch") else {
        warn!("Could not determine user config directory.");
        return Ok(None);
    };
    let config_path = proj_dirs.config_dir().join("config.toml");
    if config_path.exists() {
        info!("Loading user configuration from: {}", config_path.display());
        load_config_from_path(&config_path).map(Some)
    } else {
        debug!(
            "User configuration file not found at {}",
            config_path.display()
        );
        Ok(None)
    }
}

fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Project values win wherever they differ from the built-in defaults.
fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let Some(project_cfg) = project else {
        return user;
    };
    let pick = |project: String, user: String, default: String| {
        if project != default {
            project
        } else {
            user
        }
    };
    Config {
        tools: ToolsConfig {
            cargo: pick(project_cfg.tools.cargo, user.tools.cargo, default_cargo()),
            rustup: pick(project_cfg.tools.rustup, user.tools.rustup, default_rustup()),
            rustc: pick(project_cfg.tools.rustc, user.tools.rustc, default_rustc()),
        },
        snapshot: SnapshotConfig {
            directory: pick(
                project_cfg.snapshot.directory,
                user.snapshot.directory,
                default_snapshot_dir(),
            ),
        },
    }
}

fn expand_config_paths(config: &mut Config) {
    config.snapshot.directory = shellexpand::tilde(&config.snapshot.directory).into_owned();
    debug!("Expanded snapshot directory: {}", config.snapshot.directory);
}

fn validate_config(config: &Config) -> Result<()> {
    for (key, value) in [
        ("tools.cargo", &config.tools.cargo),
        ("tools.rustup", &config.tools.rustup),
        ("tools.rustc", &config.tools.rustc),
    ] {
        if value.trim().is_empty() {
            return Err(anyhow!(BloatError::Config(format!(
                "'{}' cannot be empty.",
                key
            ))));
        }
    }
    let snapshot_dir = PathBuf::from(&config.snapshot.directory);
    if snapshot_dir.exists() && !snapshot_dir.is_dir() {
        return Err(anyhow!(BloatError::Config(format!(
            "Configured snapshot path '{}' exists but is not a directory.",
            snapshot_dir.display()
        ))));
    }
    Ok(())
}
