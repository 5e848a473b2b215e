//! Period keys for day, week, and month summaries.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

use super::{iso_week, TemporalError, TemporalResult};

/// Key for a day summary, e.g. `2025-10-15`.
pub fn day_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Key for an ISO week summary, e.g. `2025-W42`.
pub fn week_key(date: NaiveDate) -> String {
    let (year, week) = iso_week(date);
    format!("{:04}-W{:02}", year, week)
}

/// Key for a month summary, e.g. `2025-10`.
pub fn month_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

/// Parse a `YYYY-MM-DD` day key.
pub fn parse_day_key(key: &str) -> TemporalResult<NaiveDate> {
    NaiveDate::parse_from_str(key.trim(), "%Y-%m-%d")
        .map_err(|_| TemporalError::InvalidDay(key.to_string()))
}

/// Parse a local wall-clock instant, e.g. `2025-10-15T08:30:00`.
pub fn parse_instant(value: &str) -> TemporalResult<NaiveDateTime> {
    value
        .trim()
        .parse::<NaiveDateTime>()
        .map_err(|_| TemporalError::InvalidInstant(value.to_string()))
}
