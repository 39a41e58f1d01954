// File: crates/chart-core/src/format.rs
// Summary: Number and clock formatting for tick labels and tooltips.

const UNITS: [&str; 5] = ["", "k", "M", "G", "T"];

/// Format a count with an SI suffix: `999`, `1.5k`, `23.1M`.
pub fn format_unit(value: f64) -> String {
    if !value.is_finite() {
        return "-".to_string();
    }
    let mut scaled = value;
    let mut unit = 0;
    while scaled.abs() >= 1000.0 && unit < UNITS.len() - 1 {
        scaled /= 1000.0;
        unit += 1;
    }
    if unit == 0 {
        return crate::axis::trim_decimals(scaled);
    }
    format!("{scaled:.1}{}", UNITS[unit])
}

/// Format seconds as `m:ss`; minutes are not wrapped into hours.
pub fn format_clock(seconds: f64) -> String {
    let total = seconds.max(0.0).round() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}
