//! Date parsing and display.
//!
//! Exercise dates are stored as milliseconds since the Unix epoch and are
//! always interpreted in UTC. A bare calendar date means midnight UTC.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};

const DAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "June", "July", "Aug", "Sept", "Oct", "Nov", "Dec",
];

/// Parse a client supplied date.
///
/// Accepts `YYYY-MM-DD`, an RFC 3339 timestamp, or a naive
/// `YYYY-MM-DDTHH:MM:SS` (read as UTC). Returns `None` for anything else.
pub fn parse_date(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|dt| dt.and_utc())
}

/// Same as [`parse_date`], as epoch milliseconds.
pub fn parse_timestamp(input: &str) -> Option<i64> {
    parse_date(input).map(|dt| dt.timestamp_millis())
}

/// Render as `"Mon Jan 1 2024"`.
pub fn format_date(date: &DateTime<Utc>) -> String {
    let day = DAYS[date.weekday().num_days_from_monday() as usize];
    let month = MONTHS[date.month0() as usize];
    format!("{} {} {} {}", day, month, date.day(), date.year())
}
