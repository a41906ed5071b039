//! Benchmark measurement rows.

/// One row of the benchmark CSV.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeedupRecord {
    /// Machine the benchmark ran on.
    pub machine: String,
    /// Grid size (gateSize).
    pub grid: i64,
    /// Search density.
    pub rho: f64,
    /// Serial time divided by parallel time.
    pub speedup: f64,
}

/// Parse a decimal number that may use a comma as decimal separator.
///
/// Every `,` is replaced by `.` before parsing, so `"1,5"` reads as `1.5`.
pub fn parse_decimal(text: &str) -> Option<f64> {
    text.trim().replace(',', ".").parse().ok()
}
