//! # bloatwatch Toolchain Collectors (`common::toolchain`)
//!
//! File: cli/src/common/toolchain/mod.rs
//!
//! ## Overview
//!
//! Thin callers on top of `common::process`. Each collector issues exactly one
//! kind of request to an external tool through a `CommandRunner`, waits for
//! it, and turns the captured text into typed data:
//!
//! - **`versions`**: `rustup`, `rustc`, `cargo bloat`, `cargo tree` version banners.
//! - **`install`**: `cargo install` of the `cargo-bloat` and `cargo-tree` plugins.
//! - **`bloat`**: crate-level size report from `cargo bloat` (JSON).
//! - **`tree`**: dependency tree text from `cargo tree`.
//! - **`metadata`**: workspace package names from `cargo metadata` (JSON).
//!
//! Collectors never retry and never return partial results; the first failing
//! subprocess or parse aborts the call.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::{process::SystemRunner, toolchain::{bloat, metadata}};
//!
//! let runner = SystemRunner;
//! let packages = metadata::collect_packages(&runner, &cfg.tools).await?;
//! let report = bloat::collect_size_report(&runner, &cfg.tools).await?;
//! ```
//!

/// Crate-level binary size report (`cargo bloat`).
pub mod bloat;
/// Plugin installation (`cargo install`).
pub mod install;
/// Workspace package listing (`cargo metadata`).
pub mod metadata;
/// Dependency tree rendering (`cargo tree`).
pub mod tree;
/// Toolchain and plugin version discovery.
pub mod versions;
