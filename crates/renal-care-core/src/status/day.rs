//! Per-day status derivation.
//!
//! Precedence, first match wins:
//! 1. Future day → `None`
//! 2. Before tracking started → `None`
//! 3. Nothing planned → `Today` on the current day, otherwise `None`
//! 4. Every planned type satisfied → `Complete`
//! 5. Current day → `Today` (an in-progress day is never `Missed`)
//! 6. Past day → `Missed`

use chrono::{NaiveDate, NaiveDateTime};

use crate::models::{DayDotStatus, DayStatuses, TreatmentDayBucket};
use crate::temporal::{day_key, start_of_day};

/// Derive the dot status for one day.
pub fn status_for(
    bucket: &TreatmentDayBucket,
    now: NaiveDateTime,
    tracking_start: Option<NaiveDate>,
) -> DayDotStatus {
    let today = start_of_day(now);

    if bucket.date > today {
        return DayDotStatus::None;
    }

    if tracking_start.is_some_and(|start| bucket.date < start) {
        return DayDotStatus::None;
    }

    if bucket.has_orphan_fluid_goal() {
        tracing::warn!(
            date = %day_key(bucket.date),
            goal_ml = bucket.fluid_goal_ml,
            "Fluid goal recorded without scheduled sessions; not treated as a plan"
        );
    }

    let is_today = bucket.date == today;

    if !bucket.has_plan() {
        return if is_today {
            DayDotStatus::Today
        } else {
            DayDotStatus::None
        };
    }

    match (bucket.is_satisfied(), is_today) {
        (true, _) => DayDotStatus::Complete,
        (false, true) => DayDotStatus::Today,
        (false, false) => DayDotStatus::Missed,
    }
}

/// Derive statuses for a run of buckets, keyed by day.
pub fn statuses_for(
    buckets: &[TreatmentDayBucket],
    now: NaiveDateTime,
    tracking_start: Option<NaiveDate>,
) -> DayStatuses {
    buckets
        .iter()
        .map(|bucket| (bucket.date, status_for(bucket, now, tracking_start)))
        .collect()
}
