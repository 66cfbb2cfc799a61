//! # bloatwatch Tree Handler
//!
//! File: cli/src/commands/tree.rs
//!
//! Implements `bloatwatch tree -p <PACKAGE>`, printing the package's
//! depth-prefixed dependency tree (all features enabled) without the leading
//! line that names the package itself.
//!
use crate::{
    common::{process::SystemRunner, toolchain::tree},
    core::{config::Config, error::Result},
};
use clap::Parser;
use tracing::info;

#[derive(Parser, Debug)]
#[command(about = "Print the dependency tree of a workspace package")]
pub struct TreeArgs {
    /// Workspace package whose dependencies are rendered.
    #[arg(short, long, required = true)]
    package: String,
}

pub async fn handle_tree(args: TreeArgs, config: &Config) -> Result<()> {
    info!("Handling tree command for package '{}'", args.package);
    let text = tree::collect_tree(&SystemRunner, &config.tools, &args.package).await?;
    print!("{}", text);
    if !text.is_empty() && !text.ends_with('\n') {
        println!();
    }
    Ok(())
}
