//! Human-readable byte formatting.
//!
//! One implementation, shared by both output surfaces. Binary (1024-based)
//! units; a value is promoted to the next unit exactly at each power of
//! 1024, so 1023 bytes stays in bytes and 1024 bytes becomes "1.00 KB".

const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Format a byte count with binary units and two decimal places.
pub fn human_size(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{bytes} B");
    }
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.2} {}", UNITS[unit])
}
