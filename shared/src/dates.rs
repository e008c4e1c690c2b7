//! Calendar-date helpers. Expense dates carry no time-of-day meaning, so
//! anything after the `YYYY-MM-DD` prefix is dropped.

use chrono::{DateTime, NaiveDate};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses the calendar date out of a `YYYY-MM-DD` string or an RFC 3339
/// timestamp. The date is taken as written, not converted to another zone.
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        return Some(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.date_naive());
    }
    raw.get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, DATE_FORMAT).ok())
}

/// Truncates a backend date to the `YYYY-MM-DD` value a date input expects.
/// Unparseable input is returned unchanged.
pub fn calendar_date(raw: &str) -> String {
    match parse_calendar_date(raw) {
        Some(date) => date.format(DATE_FORMAT).to_string(),
        None => raw.to_string(),
    }
}

/// Formats a backend date for list display, e.g. "Mar 15, 2024".
pub fn display_date(raw: &str) -> String {
    match parse_calendar_date(raw) {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => raw.to_string(),
    }
}
