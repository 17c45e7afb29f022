//! Date parsing utilities.

use chrono::{DateTime, NaiveDate};

/// Parses a flight date.
///
/// Accepts a calendar date (`2025-10-09`) or an RFC 3339 timestamp
/// (`2025-10-09T14:30:00Z`), in which case the date part in the timestamp's own offset is
/// kept. Returns `None` for anything else, including impossible dates like `2025-02-30`.
///
/// # Example
/// ```ignore
/// assert_eq!(parse_flight_date("2025-10-09"), NaiveDate::from_ymd_opt(2025, 10, 9));
/// assert_eq!(parse_flight_date("yesterday"), None);
/// ```
pub fn parse_flight_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }

    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|timestamp| timestamp.date_naive())
}
