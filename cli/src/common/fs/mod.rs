//! # bloatwatch Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! Filesystem helpers used by the snapshot commands. Import from the
//! submodule directly, e.g. `use crate::common::fs::io::write_json;`.
//!

/// JSON file reading/writing and directory creation.
pub mod io;
