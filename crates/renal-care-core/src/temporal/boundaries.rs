//! Day, week, and month boundaries.

use chrono::{Datelike, Days, Duration, DurationRound, Months, NaiveDate, NaiveDateTime};

/// Number of days in an ISO week.
pub const DAYS_PER_WEEK: u64 = 7;

/// Calendar day of an instant.
pub fn start_of_day(instant: NaiveDateTime) -> NaiveDate {
    instant.date()
}

/// Monday of the ISO week containing `date`.
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.weekday().num_days_from_monday()))
}

/// Sunday of the ISO week containing `date`.
pub fn end_of_week(date: NaiveDate) -> NaiveDate {
    start_of_week(date) + Days::new(DAYS_PER_WEEK - 1)
}

/// First day of the month containing `date`.
pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.day0()))
}

/// Last day of the month containing `date`.
pub fn end_of_month(date: NaiveDate) -> NaiveDate {
    start_of_month(date) + Days::new(u64::from(days_in_month(date)) - 1)
}

/// Number of days in the month containing `date`.
pub fn days_in_month(date: NaiveDate) -> u32 {
    let first = start_of_month(date);
    first
        .checked_add_months(Months::new(1))
        .map_or(31, |next| (next - first).num_days() as u32)
}

/// The seven days of the ISO week containing `date`, Monday first.
pub fn week_days(date: NaiveDate) -> Vec<NaiveDate> {
    start_of_week(date)
        .iter_days()
        .take(DAYS_PER_WEEK as usize)
        .collect()
}

/// Every day of the month containing `date`, first day first.
pub fn month_days(date: NaiveDate) -> Vec<NaiveDate> {
    start_of_month(date)
        .iter_days()
        .take(days_in_month(date) as usize)
        .collect()
}

/// ISO week-numbering year and week number (1-53).
pub fn iso_week(date: NaiveDate) -> (i32, u32) {
    let week = date.iso_week();
    (week.year(), week.week())
}

/// Round an instant down to a multiple of `granularity`.
///
/// Instants that cannot be truncated (out-of-range or non-positive
/// granularity) are returned unchanged.
pub fn round_down(instant: NaiveDateTime, granularity: Duration) -> NaiveDateTime {
    instant.duration_trunc(granularity).unwrap_or(instant)
}
