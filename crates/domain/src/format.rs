//! Human-readable formatting for byte quantities.

const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Format a byte count as `"<value> <unit>"` using base-1024 scaling,
/// rounded to the nearest whole number in the chosen unit.
///
/// Zero is special-cased to `"0 B"` (the logarithm is undefined there),
/// and quantities beyond the unit table clamp to `TB`.
#[must_use]
pub fn format_bytes(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }
    let unit = ((bytes.ilog2() / 10) as usize).min(UNITS.len() - 1);
    let value = (bytes as f64 / 1024_f64.powi(unit as i32)).round();
    format!("{value:.0} {}", UNITS[unit])
}
