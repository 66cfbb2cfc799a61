//! # bloatwatch Terminal Output Helpers (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//!
//! Formatting helpers shared by the text (non-`--json`) output of the
//! commands. Sizes use binary units with one decimal place.
//!

const UNITS: [&str; 4] = ["KiB", "MiB", "GiB", "TiB"];

/// `512` -> `"512 B"`, `1536` -> `"1.5 KiB"`, `3_145_728` -> `"3.0 MiB"`.
pub fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{} B", bytes);
    }
    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", value, UNITS[unit])
}

/// Signed size change, always with an explicit sign for non-zero values.
pub fn format_delta(delta: i64) -> String {
    let magnitude = format_bytes(delta.unsigned_abs());
    match delta.signum() {
        1 => format!("+{}", magnitude),
        -1 => format!("-{}", magnitude),
        _ => magnitude,
    }
}

/// Share of `part` in `total` as a percentage; zero when `total` is zero.
pub fn percent(part: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 * 100.0 / total as f64
    }
}
