//! # bloatwatch Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout bloatwatch. Every
//! operation either shells out to an external tool or parses what that tool
//! printed, so the taxonomy is small:
//!
//! - **Execution errors** (`ExternalCommand`): the program could not be
//!   spawned (e.g., not on `PATH`) or exited with a non-zero status.
//! - **Parse errors** (`Json`, `UnexpectedOutput`): the captured output is not
//!   the JSON document we expected, or a version banner does not contain the
//!   token we extract from it.
//! - **Ambient errors** (`Config`, `FileSystem`): configuration loading and
//!   snapshot file handling.
//!
//! ## Architecture
//!
//! - `BloatError`: a `thiserror` enum with the variants above.
//! - `Result<T>`: a type alias for `anyhow::Result<T>`. Functions return
//!   `Err(anyhow!(BloatError::...))` and callers that care about the kind use
//!   `downcast_ref::<BloatError>()`.
//!
//! ## Examples
//!
//! ```rust
//! match versions::collect_versions(&runner, &tools).await {
//!     Ok(v) => println!("{}", v.rustc),
//!     Err(e) if e.downcast_ref::<BloatError>().is_some_and(BloatError::is_execution) => {
//!         eprintln!("a tool failed to run: {}", e);
//!     }
//!     Err(e) => return Err(e),
//! }
//! ```
//!
use thiserror::Error;

/// Custom error type for bloatwatch.
#[derive(Error, Debug)]
pub enum BloatError {
    #[error("External command failed: {cmd}, Status: {status}, Output:\n{output}")]
    ExternalCommand {
        cmd: String,
        status: String,
        output: String,
    },

    #[error("Failed to parse {what} as JSON: {source}")]
    Json {
        what: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unexpected output from '{cmd}': {output:?}")]
    UnexpectedOutput { cmd: String, output: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),
}

impl BloatError {
    /// True for failures to spawn or run an external program.
    pub fn is_execution(&self) -> bool {
        matches!(self, BloatError::ExternalCommand { .. })
    }

    /// True for failures to interpret a program's output.
    pub fn is_parse(&self) -> bool {
        matches!(
            self,
            BloatError::Json { .. } | BloatError::UnexpectedOutput { .. }
        )
    }
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
