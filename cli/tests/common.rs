//! # bloatwatch Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Each test file
//! declares `mod common;` and uses what it needs.
//!
//! The collector tests never call the real toolchain. Instead they write small
//! shell scripts that impersonate `cargo`, `rustc` and `rustup`, and point
//! bloatwatch at them through `--cargo` or a project `.bloatwatch.toml`.
//!

// Not every test file uses every helper.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::path::{Path, PathBuf};

/// `assert_cmd::Command` for the compiled `bloatwatch` binary.
///
/// `RUST_LOG` and `BLOATWATCH_CARGO` are cleared so the caller's environment
/// cannot change the outcome.
pub fn bloatwatch_cmd() -> Command {
    let mut cmd = Command::cargo_bin("bloatwatch").expect("Failed to find bloatwatch binary");
    cmd.env_remove("RUST_LOG").env_remove("BLOATWATCH_CARGO");
    cmd
}

/// Writes an executable `/bin/sh` script named `name` into `dir`.
#[cfg(unix)]
pub fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).expect("Failed to write script");
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
        .expect("Failed to make script executable");
    path
}

/// A fake `cargo` that answers every subcommand bloatwatch uses for a
/// workspace with the packages `app` and `app-core`.
pub const FAKE_CARGO: &str = r#"
case "$1" in
  metadata)
    echo '{"packages":[{"name":"app","version":"0.1.0"},{"name":"app-core","version":"0.1.0"}],"version":1}'
    ;;
  bloat)
    if [ "$2" = "--version" ]; then
      echo "cargo-bloat 0.11.1"
    else
      echo 'Compiling app v0.1.0' >&2
      echo '{"file-size":8192,"text-section-size":4096,"crates":[{"name":"std","size":2048},{"name":"app","size":1024},{"name":"serde","size":1024}]}'
    fi
    ;;
  tree)
    if [ "$2" = "--version" ]; then
      echo "cargo 1.70.0 (ec8a8a0ca 2023-04-25)"
    else
      last=""
      for arg in "$@"; do last="$arg"; done
      printf '0%s v0.1.0 (/work/%s)\n1serde v1.0.188\n2serde_derive v1.0.188 (proc-macro)\n' "$last" "$last"
    fi
    ;;
  install)
    echo "installing $*"
    ;;
  *)
    echo "unsupported: $*" >&2
    exit 101
    ;;
esac
"#;

/// A fake `rustup` reporting a stable toolchain.
pub const FAKE_RUSTUP: &str = r#"echo "stable-x86_64-unknown-linux-gnu (default)""#;

/// A fake `rustc` reporting version 1.70.0.
pub const FAKE_RUSTC: &str = r#"echo "rustc 1.70.0 (90c541806 2023-05-09)""#;
