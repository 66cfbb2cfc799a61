//! # bloatwatch Packages Handler
//!
//! File: cli/src/commands/packages.rs
//!
//! Implements `bloatwatch packages`, listing the workspace's own packages
//! (one name per line, or the parsed metadata subset with `--json`).
//!
use crate::{
    common::{process::SystemRunner, toolchain::metadata},
    core::{config::Config, error::Result},
};
use anyhow::Context;
use clap::Parser;
use tracing::info;

#[derive(Parser, Debug)]
#[command(about = "List the packages of the current workspace")]
pub struct PackagesArgs {
    /// Print the package list as JSON.
    #[arg(long)]
    json: bool,
}

pub async fn handle_packages(args: PackagesArgs, config: &Config) -> Result<()> {
    info!("Handling packages command (json: {})", args.json);
    let list = metadata::collect_packages(&SystemRunner, &config.tools).await?;
    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&list).context("Failed to serialize package list")?
        );
    } else {
        for name in list.names() {
            println!("{}", name);
        }
    }
    Ok(())
}
