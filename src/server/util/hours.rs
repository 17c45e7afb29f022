//! Flight hour arithmetic.
//!
//! Hours are logged to the hundredth (36 seconds). Stored values are normalized to that
//! precision and totals are summed as integer hundredths, so `day + night == total` holds
//! exactly rather than up to floating point drift.

/// Rounds `hours` to the nearest hundredth
pub fn normalize_hours(hours: f64) -> f64 {
    from_hundredths(to_hundredths(hours))
}

/// Converts hours to whole hundredths of an hour
pub fn to_hundredths(hours: f64) -> i64 {
    (hours * 100.0).round() as i64
}

/// Converts whole hundredths of an hour back to hours
pub fn from_hundredths(hundredths: i64) -> f64 {
    hundredths as f64 / 100.0
}
