//! # Snapshot Comparison (`common::snapshot::diff`)
//!
//! File: cli/src/common/snapshot/diff.rs
//!
//! Compares two snapshots: overall binary and `.text` growth, per-crate size
//! changes, and which packages ended up with a different dependency tree.
//!
use super::Snapshot;
use crate::common::ui::{format_bytes, format_delta};
use serde::Serialize;
use std::{
    collections::{BTreeMap, BTreeSet},
    fmt,
};

/// Old and new value of a single size, with the signed change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SizeDelta {
    pub old: u64,
    pub new: u64,
    pub delta: i64,
}

impl SizeDelta {
    fn new(old: u64, new: u64) -> Self {
        Self {
            old,
            new,
            delta: signed_delta(old, new),
        }
    }
}

/// Size change of one crate. `None` on a side means the crate is absent there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrateDelta {
    pub name: String,
    pub old: Option<u64>,
    pub new: Option<u64>,
    pub delta: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnapshotDiff {
    pub file_size: SizeDelta,
    pub text_section_size: SizeDelta,
    /// Crates whose size changed, largest absolute change first.
    pub crates: Vec<CrateDelta>,
    /// Packages whose dependency tree differs, including added/removed packages.
    pub changed_trees: Vec<String>,
}

/// Computes the difference going from `old` to `new`.
pub fn compare_snapshots(old: &Snapshot, new: &Snapshot) -> SnapshotDiff {
    let old_crates = crate_sizes(old);
    let new_crates = crate_sizes(new);

    let names: BTreeSet<&str> = old_crates.keys().chain(new_crates.keys()).copied().collect();
    let mut crates: Vec<CrateDelta> = names
        .into_iter()
        .filter_map(|name| {
            let before = old_crates.get(name).copied();
            let after = new_crates.get(name).copied();
            let delta = signed_delta(before.unwrap_or(0), after.unwrap_or(0));
            (delta != 0).then(|| CrateDelta {
                name: name.to_string(),
                old: before,
                new: after,
                delta,
            })
        })
        .collect();
    // `names` was sorted, and the sort is stable, so ties stay alphabetical.
    crates.sort_by_key(|c| std::cmp::Reverse(c.delta.unsigned_abs()));

    let changed_trees = old
        .trees
        .keys()
        .chain(new.trees.keys())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .filter(|pkg| old.trees.get(*pkg) != new.trees.get(*pkg))
        .cloned()
        .collect();

    SnapshotDiff {
        file_size: SizeDelta::new(old.size.file_size, new.size.file_size),
        text_section_size: SizeDelta::new(old.size.text_section_size, new.size.text_section_size),
        crates,
        changed_trees,
    }
}

// `cargo bloat --crates` already merges by name; summing keeps us safe if it ever doesn't.
fn crate_sizes(snapshot: &Snapshot) -> BTreeMap<&str, u64> {
    let mut sizes = BTreeMap::new();
    for c in &snapshot.size.crates {
        *sizes.entry(c.name.as_str()).or_insert(0) += c.size;
    }
    sizes
}

fn signed_delta(old: u64, new: u64) -> i64 {
    new as i64 - old as i64
}

impl fmt::Display for SnapshotDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "File size:    {} -> {} ({})",
            format_bytes(self.file_size.old),
            format_bytes(self.file_size.new),
            format_delta(self.file_size.delta)
        )?;
        writeln!(
            f,
            "Text section: {} -> {} ({})",
            format_bytes(self.text_section_size.old),
            format_bytes(self.text_section_size.new),
            format_delta(self.text_section_size.delta)
        )?;

        if self.crates.is_empty() {
            writeln!(f, "\nNo crate size changes.")?;
        } else {
            writeln!(f, "\nCrate size changes:")?;
            for c in &self.crates {
                let note = match (c.old, c.new) {
                    (None, Some(_)) => " (added)",
                    (Some(_), None) => " (removed)",
                    _ => "",
                };
                writeln!(f, "  {:>12}  {}{}", format_delta(c.delta), c.name, note)?;
            }
        }

        if self.changed_trees.is_empty() {
            write!(f, "\nNo dependency tree changes.")
        } else {
            write!(
                f,
                "\nDependency tree changed for: {}",
                self.changed_trees.join(", ")
            )
        }
    }
}
