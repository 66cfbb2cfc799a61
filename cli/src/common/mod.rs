//! # bloatwatch Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared building blocks used by the command handlers in `commands::`.
//!
//! - **`process`**: spawning external programs behind the `CommandRunner` trait.
//! - **`toolchain`**: collectors that call `rustup`, `rustc` and `cargo` and parse their output.
//! - **`snapshot`**: assembling, storing and comparing full snapshots.
//! - **`fs`**: JSON file helpers used for snapshots.
//! - **`ui`**: byte-size formatting for text output.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::{process::SystemRunner, toolchain::versions};
//!
//! let info = versions::collect_versions(&SystemRunner, &cfg.tools).await?;
//! ```
//!

/// JSON file helpers.
pub mod fs;
/// External process execution.
pub mod process;
/// Snapshot collection and comparison.
pub mod snapshot;
/// Collectors built on top of the toolchain's command-line tools.
pub mod toolchain;
/// Terminal output formatting.
pub mod ui;
