//! # bloatwatch Install Handler
//!
//! File: cli/src/commands/install.rs
//!
//! ## Overview
//!
//! Implements `bloatwatch install`, which installs the `cargo-bloat` and
//! `cargo-tree` plugins with `cargo install ... --debug`. Cargo's own output
//! is streamed to the terminal while it runs.
//!
//! ## Usage
//!
//! ```bash
//! bloatwatch install
//! ```
//!
use crate::{
    common::{
        process::SystemRunner,
        toolchain::install::{self, REQUIRED_PLUGINS},
    },
    core::{config::Config, error::Result},
};
use clap::Parser;
use tracing::info;

#[derive(Parser, Debug, Default)]
#[command(
    about = "Install the cargo plugins bloatwatch depends on",
    long_about = "Runs `cargo install cargo-bloat cargo-tree --debug` using the configured cargo.\n\
                  Succeeds only if cargo exits with status zero."
)]
pub struct InstallArgs {}

pub async fn handle_install(_args: InstallArgs, config: &Config) -> Result<()> {
    info!("Handling install command...");
    println!("Installing {}...", REQUIRED_PLUGINS.join(" and "));
    install::install_plugins(&SystemRunner, &config.tools).await?;
    println!("✅ Plugins installed.");
    Ok(())
}
