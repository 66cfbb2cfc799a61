//! # bloatwatch Size Handler
//!
//! File: cli/src/commands/size.rs
//!
//! ## Overview
//!
//! Implements `bloatwatch size`, which builds the project in release mode
//! through `cargo bloat` and prints how much of the `.text` section each
//! crate accounts for.
//!
//! ## Usage
//!
//! ```bash
//! # Table of the 20 largest crates
//! bloatwatch size
//!
//! # Every crate
//! bloatwatch size --top 0
//!
//! # Raw report, as produced by cargo bloat
//! bloatwatch size --json
//! ```
//!
use crate::{
    common::{
        process::SystemRunner,
        toolchain::bloat::{self, SizeReport},
        ui::{format_bytes, percent},
    },
    core::{config::Config, error::Result},
};
use anyhow::Context;
use clap::Parser;
use std::fmt::Write as FmtWrite;
use tracing::info;

#[derive(Parser, Debug)]
#[command(about = "Report the binary size contributed by each crate")]
pub struct SizeArgs {
    /// Print the report as JSON instead of a table.
    #[arg(long)]
    json: bool,

    /// Number of crates to list in the table (0 lists all of them).
    #[arg(long, short = 'n', default_value_t = 20)]
    top: usize,
}

pub async fn handle_size(args: SizeArgs, config: &Config) -> Result<()> {
    info!("Handling size command (json: {}, top: {})", args.json, args.top);
    let report = bloat::collect_size_report(&SystemRunner, &config.tools).await?;
    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to serialize size report")?
        );
    } else {
        print!("{}", render_table(&report, args.top));
    }
    Ok(())
}

/// Renders the report as a plain-text table, largest crates first.
fn render_table(report: &SizeReport, top: usize) -> String {
    let mut crates: Vec<_> = report.crates.iter().collect();
    crates.sort_by(|a, b| b.size.cmp(&a.size).then_with(|| a.name.cmp(&b.name)));
    let shown = if top == 0 { crates.len() } else { top.min(crates.len()) };

    let mut out = String::new();
    let _ = writeln!(out, "File size:    {}", format_bytes(report.file_size));
    let _ = writeln!(
        out,
        "Text section: {} ({:.1}% of file)",
        format_bytes(report.text_section_size),
        percent(report.text_section_size, report.file_size)
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "{:>6}  {:>10}  Crate", "Text%", "Size");
    for c in &crates[..shown] {
        let _ = writeln!(
            out,
            "{:>5.1}%  {:>10}  {}",
            percent(c.size, report.text_section_size),
            format_bytes(c.size),
            c.name
        );
    }
    if shown < crates.len() {
        let rest: u64 = crates[shown..].iter().map(|c| c.size).sum();
        let _ = writeln!(
            out,
            "{:>5.1}%  {:>10}  ({} more crates)",
            percent(rest, report.text_section_size),
            format_bytes(rest),
            crates.len() - shown
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::toolchain::bloat::parse_size_report;

    const SAMPLE: &str = r#"{"file-size":4096,"text-section-size":2048,"crates":[{"name":"app","size":256},{"name":"std","size":1024},{"name":"log","size":512}]}"#;

    #[test]
    fn test_size_args_parsing() {
        let args = SizeArgs::try_parse_from(["size"]).unwrap();
        assert!(!args.json);
        assert_eq!(args.top, 20);

        let args = SizeArgs::try_parse_from(["size", "--json", "-n", "5"]).unwrap();
        assert!(args.json);
        assert_eq!(args.top, 5);
    }

    #[test]
    fn test_render_table_orders_by_size() {
        let report = parse_size_report(SAMPLE).unwrap();
        let table = render_table(&report, 0);
        assert!(table.contains("Text section: 2.0 KiB (50.0% of file)"));

        let std_pos = table.find("std").unwrap();
        let log_pos = table.find("log").unwrap();
        let app_pos = table.find("app").unwrap();
        assert!(std_pos < log_pos && log_pos < app_pos);
        assert!(table.contains(" 50.0%     1.0 KiB  std"));
    }

    #[test]
    fn test_render_table_truncates() {
        let report = parse_size_report(SAMPLE).unwrap();
        let table = render_table(&report, 1);
        assert!(table.contains("std"));
        assert!(!table.contains("  log"));
        assert!(table.contains("768 B  (2 more crates)"));
    }
}
