//! Human-friendly rendering of post timestamps.

use chrono::{NaiveDate, NaiveDateTime};

const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M"];
const DATE_FORMAT: &str = "%Y-%m-%d";
const DISPLAY_FORMAT: &str = "%b %d, %Y";

/// Renders `created_at` as e.g. "Mar 15, 2024".
///
/// Only the first 19 characters are considered, so timezone suffixes and
/// fractional seconds are ignored. Unparseable input degrades to its first
/// 10 characters.
pub fn human_date(created_at: &str) -> String {
    let head = prefix(created_at, 19);

    let parsed = DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(head, fmt).ok())
        .map(|dt| dt.date())
        .or_else(|| NaiveDate::parse_from_str(head, DATE_FORMAT).ok());

    match parsed {
        Some(date) => date.format(DISPLAY_FORMAT).to_string(),
        None => prefix(head, 10).to_string(),
    }
}

/// First `n` characters of `s`, never splitting a code point.
fn prefix(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
