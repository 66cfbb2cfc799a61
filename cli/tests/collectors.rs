//! # bloatwatch Collector Integration Tests
//!
//! File: cli/tests/collectors.rs
//!
//! ## Overview
//!
//! Runs the `versions`, `size`, `tree`, `packages`, `install` and `snapshot`
//! commands end to end against fake toolchain scripts (see `common.rs`).
//! Unix only, since the fakes are `/bin/sh` scripts.
//!
#![cfg(unix)]

mod common;
use common::*;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

/// Temp project dir with fake tools and a `.bloatwatch.toml` pointing at them.
fn fake_project() -> (TempDir, PathBuf) {
    let dir = tempdir().expect("Failed to create temp dir");
    let bin = dir.path().join("bin");
    std::fs::create_dir(&bin).unwrap();
    let cargo = write_script(&bin, "cargo", FAKE_CARGO);
    let rustup = write_script(&bin, "rustup", FAKE_RUSTUP);
    let rustc = write_script(&bin, "rustc", FAKE_RUSTC);
    std::fs::write(
        dir.path().join(".bloatwatch.toml"),
        format!(
            "[tools]\ncargo = {:?}\nrustup = {:?}\nrustc = {:?}\n\n[snapshot]\ndirectory = {:?}\n",
            cargo,
            rustup,
            rustc,
            dir.path().join("snaps")
        ),
    )
    .unwrap();
    // Marks the project root so the config search stops here.
    std::fs::create_dir(dir.path().join(".git")).unwrap();
    (dir, cargo)
}

fn cmd_in(dir: &Path) -> Command {
    let mut cmd = bloatwatch_cmd();
    cmd.current_dir(dir);
    cmd
}

#[test]
fn test_versions() {
    let (dir, _) = fake_project();
    cmd_in(dir.path())
        .arg("versions")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "toolchain:   stable-x86_64-unknown-linux-gnu\n",
        ))
        .stdout(predicate::str::contains("rustc:       1.70.0"))
        .stdout(predicate::str::contains("cargo-bloat: cargo-bloat 0.11.1"))
        .stdout(predicate::str::contains("cargo-tree:  1.70.0"));
}

#[test]
fn test_versions_json() {
    let (dir, _) = fake_project();
    let output = cmd_in(dir.path())
        .args(["versions", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["toolchain"], "stable-x86_64-unknown-linux-gnu");
    assert_eq!(value["rustc"], "1.70.0");
    assert_eq!(value["tree"], "1.70.0");
}

#[test]
fn test_packages() {
    let (dir, _) = fake_project();
    cmd_in(dir.path())
        .arg("packages")
        .assert()
        .success()
        .stdout("app\napp-core\n");
}

#[test]
fn test_tree_strips_first_line() {
    let (dir, _) = fake_project();
    cmd_in(dir.path())
        .args(["tree", "-p", "app-core"])
        .assert()
        .success()
        .stdout("1serde v1.0.188\n2serde_derive v1.0.188 (proc-macro)\n");
}

#[test]
fn test_size_table_and_json() {
    let (dir, _) = fake_project();
    cmd_in(dir.path())
        .arg("size")
        .assert()
        .success()
        .stdout(predicate::str::contains("File size:    8.0 KiB"))
        .stdout(predicate::str::contains(" 50.0%     2.0 KiB  std"));

    let output = cmd_in(dir.path()).args(["size", "--json"]).output().unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["file-size"], 8192);
    assert_eq!(value["crates"].as_array().unwrap().len(), 3);
}

#[test]
fn test_cargo_flag_overrides_config() {
    let (dir, _) = fake_project();
    let broken = write_script(dir.path(), "broken-cargo", "echo 'not json'");
    cmd_in(dir.path())
        .args(["--cargo", broken.to_str().unwrap(), "packages"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse cargo metadata output as JSON"));
}

#[test]
fn test_non_zero_exit_fails_command() {
    let (dir, _) = fake_project();
    let failing = write_script(dir.path(), "failing-cargo", "echo partial; exit 101");
    cmd_in(dir.path())
        .env("BLOATWATCH_CARGO", &failing)
        .arg("size")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Status: 101"));
}

#[test]
fn test_install() {
    let (dir, _) = fake_project();
    cmd_in(dir.path())
        .arg("install")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "installing install cargo-bloat cargo-tree --debug",
        ));
}

#[test]
fn test_snapshot_to_file() {
    let (dir, _) = fake_project();
    let out = dir.path().join("out/snap.json");
    cmd_in(dir.path())
        .args(["snapshot", "--output", out.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Snapshot written to"));

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(value["versions"]["rustc"], "1.70.0");
    assert_eq!(value["size"]["text-section-size"], 4096);
    assert_eq!(
        value["trees"]["app"],
        "1serde v1.0.188\n2serde_derive v1.0.188 (proc-macro)\n"
    );
    assert!(value["trees"]["app-core"].is_string());
    assert!(value["created_at"].is_string());
}

#[test]
fn test_snapshot_save_uses_configured_directory() {
    let (dir, _) = fake_project();
    cmd_in(dir.path())
        .args(["snapshot", "--save"])
        .assert()
        .success();

    let saved: Vec<_> = std::fs::read_dir(dir.path().join("snaps"))
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(saved.len(), 1);
    assert!(saved[0].starts_with("snapshot-") && saved[0].ends_with(".json"));
}

#[test]
fn test_snapshot_failure_writes_nothing() {
    let (dir, _) = fake_project();
    let out = dir.path().join("snap.json");
    let failing = write_script(dir.path(), "failing-cargo", "exit 1");
    cmd_in(dir.path())
        .args(["--cargo", failing.to_str().unwrap()])
        .args(["snapshot", "-o", out.to_str().unwrap()])
        .assert()
        .failure();
    assert!(!out.exists());
}
