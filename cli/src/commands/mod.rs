//! # bloatwatch Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the top-level commands of the bloatwatch CLI. Each
//! command module defines a Clap `...Args` struct and an async `handle_...`
//! function that `main.rs` dispatches to.
//!
//! ## Commands
//!
//! - `versions`: toolchain and plugin versions
//! - `install`: install `cargo-bloat` and `cargo-tree`
//! - `size`: crate-level binary size report
//! - `tree`: dependency tree of one package
//! - `packages`: workspace package names
//! - `snapshot`: all of the above in one JSON document
//! - `compare`: difference between two snapshots
//!
//! Handlers stay thin: they parse arguments, call into `common::`, and print.
//!

/// Command for comparing two saved snapshots.
pub mod compare;
/// Command for installing the required cargo plugins.
pub mod install;
/// Command for listing workspace packages.
pub mod packages;
/// Command for the crate-level size report.
pub mod size;
/// Command for collecting a full snapshot.
pub mod snapshot;
/// Command for printing a package's dependency tree.
pub mod tree;
/// Command for reporting tool versions.
pub mod versions;
