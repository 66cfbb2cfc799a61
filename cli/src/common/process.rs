//! # bloatwatch Process Execution Utilities (`common::process`)
//!
//! File: cli/src/common/process.rs
//!
//! ## Overview
//!
//! Every piece of data bloatwatch reports comes from an external program
//! (`rustup`, `rustc`, `cargo` and its plugins). This module is the single
//! place where those programs are spawned.
//!
//! ## Architecture
//!
//! - **`CommandRunner`**: the seam between the collectors and the operating
//!   system. Collectors receive a runner instead of spawning processes
//!   themselves, so tests can hand them canned output.
//! - **`SystemRunner`**: the real runner, built on `tokio::process::Command`.
//!   - `capture` pipes stdout (returned) and stderr (used in error reports).
//!   - `run_streamed` inherits stdio so the user sees progress (e.g., `cargo install`).
//!
//! Both methods suspend the caller until the child exits. There is no timeout:
//! a hung child hangs the caller.
//!
//! ## Error Handling
//!
//! A program that cannot be spawned (not on `PATH`, permission denied) or that
//! exits non-zero yields `BloatError::ExternalCommand`. Nothing is retried.
//!
//! ## Usage
//!
//! ```rust
//! let runner = SystemRunner;
//! let banner = runner.capture("rustc", &["--version"]).await?;
//! runner.run_streamed("cargo", &["install", "cargo-bloat"]).await?;
//! ```
//!
use crate::core::error::{BloatError, Result};
use anyhow::anyhow;
use std::process::Stdio;
use tracing::{debug, error, info};

/// Something that can execute an external program.
///
/// Arguments are passed to the program verbatim; no quoting or validation is
/// performed at this layer.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Runs `program` with `args`, waits for it to exit and returns everything
    /// it wrote to standard output.
    async fn capture(&self, program: &str, args: &[&str]) -> Result<String>;

    /// Runs `program` with `args` attached to the terminal and waits for it to exit.
    async fn run_streamed(&self, program: &str, args: &[&str]) -> Result<()>;
}

/// `CommandRunner` that spawns real child processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    async fn capture(&self, program: &str, args: &[&str]) -> Result<String> {
        let cmd = command_line(program, args);
        debug!("Capturing output of: {}", cmd);

        let output = tokio::process::Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| spawn_error(&cmd, e))?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        if !output.status.success() {
            let status = exit_code(&output.status);
            error!("Command '{}' failed with exit code {}", cmd, status);
            return Err(anyhow!(BloatError::ExternalCommand {
                cmd,
                status,
                output: stderr.into_owned(),
            }));
        }
        if !stderr.trim().is_empty() {
            debug!("stderr of '{}':\n{}", cmd, stderr.trim_end());
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    async fn run_streamed(&self, program: &str, args: &[&str]) -> Result<()> {
        let cmd = command_line(program, args);
        info!("Executing command: {}", cmd);

        let status = tokio::process::Command::new(program)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| spawn_error(&cmd, e))?;

        if !status.success() {
            let exit_code = exit_code(&status);
            error!("Command '{}' failed with exit code {}", cmd, exit_code);
            return Err(anyhow!(BloatError::ExternalCommand {
                cmd,
                status: exit_code,
                output: "Command failed. See terminal output above for details.".to_string(),
            }));
        }

        info!("Command '{}' completed successfully.", cmd);
        Ok(())
    }
}

/// Renders a program and its arguments as a single display string.
pub fn command_line(program: &str, args: &[&str]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    }
}

fn exit_code(status: &std::process::ExitStatus) -> String {
    status.code().map_or("?".to_string(), |c| c.to_string())
}

fn spawn_error(cmd: &str, e: std::io::Error) -> anyhow::Error {
    let status = if e.kind() == std::io::ErrorKind::NotFound {
        "not found".to_string()
    } else {
        "spawn failed".to_string()
    };
    error!("Failed to execute '{}': {}", cmd, e);
    anyhow!(BloatError::ExternalCommand {
        cmd: cmd.to_string(),
        status,
        output: format!("{}. Is it installed and in PATH?", e),
    })
}

/// Canned-output runner for unit tests.
#[cfg(test)]
pub(crate) mod fake {
    use super::*;
    use std::{collections::HashMap, sync::Mutex};

    enum Response {
        Output(String),
        Exit(i32),
    }

    /// Answers each full command line with a canned response. Command lines
    /// without a registered response behave like a missing program.
    #[derive(Default)]
    pub(crate) struct FakeRunner {
        responses: HashMap<String, Response>,
        calls: Mutex<Vec<String>>,
    }

    impl FakeRunner {
        pub(crate) fn new() -> Self {
            Self::default()
        }

        pub(crate) fn with_output(mut self, cmd: &str, stdout: &str) -> Self {
            self.responses
                .insert(cmd.to_string(), Response::Output(stdout.to_string()));
            self
        }

        pub(crate) fn with_exit(mut self, cmd: &str, code: i32) -> Self {
            self.responses.insert(cmd.to_string(), Response::Exit(code));
            self
        }

        /// Command lines executed so far, in order.
        pub(crate) fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn respond(&self, program: &str, args: &[&str]) -> Result<String> {
            let cmd = command_line(program, args);
            self.calls.lock().unwrap().push(cmd.clone());
            match self.responses.get(&cmd) {
                Some(Response::Output(out)) => Ok(out.clone()),
                Some(Response::Exit(code)) => Err(anyhow!(BloatError::ExternalCommand {
                    cmd,
                    status: code.to_string(),
                    output: "fake failure".to_string(),
                })),
                None => Err(anyhow!(BloatError::ExternalCommand {
                    cmd,
                    status: "not found".to_string(),
                    output: String::new(),
                })),
            }
        }
    }

    impl CommandRunner for FakeRunner {
        async fn capture(&self, program: &str, args: &[&str]) -> Result<String> {
            self.respond(program, args)
        }

        async fn run_streamed(&self, program: &str, args: &[&str]) -> Result<()> {
            self.respond(program, args).map(|_| ())
        }
    }
}
