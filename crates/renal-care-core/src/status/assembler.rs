//! Week and month status maps.

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime};

use crate::models::{DailySummary, DayStatuses, MonthlySummary, Schedule, TreatmentDayBucket};
use crate::temporal::month_days;

use super::{build_monthly_buckets, build_week_buckets, statuses_for};

/// Statuses for the seven days of the ISO week containing `week_start`.
///
/// `summaries` is sparse; days without an entry resolve as if nothing was
/// planned.
pub fn compute_week_statuses(
    week_start: NaiveDate,
    medication_schedules: &[Schedule],
    fluid_schedule: Option<&Schedule>,
    summaries: &HashMap<NaiveDate, DailySummary>,
    now: NaiveDateTime,
    tracking_start: Option<NaiveDate>,
) -> DayStatuses {
    let buckets = build_week_buckets(week_start, medication_schedules, fluid_schedule, summaries);
    statuses_for(&buckets, now, tracking_start)
}

/// Statuses for every day of the month containing `month_start`.
///
/// A missing or misaligned summary still yields one entry per day, each
/// resolved from an empty bucket.
pub fn compute_month_statuses(
    month_start: NaiveDate,
    summary: Option<&MonthlySummary>,
    now: NaiveDateTime,
    tracking_start: Option<NaiveDate>,
) -> DayStatuses {
    let buckets = build_monthly_buckets(month_start, summary).unwrap_or_else(|| {
        month_days(month_start)
            .into_iter()
            .map(TreatmentDayBucket::empty)
            .collect()
    });
    statuses_for(&buckets, now, tracking_start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DayDotStatus;

    fn day(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, m, d).unwrap()
    }

    fn now() -> NaiveDateTime {
        day(10, 15).and_hms_opt(9, 0, 0).unwrap()
    }

    #[test]
    fn test_week_normalized_to_monday() {
        let statuses = compute_week_statuses(day(10, 17), &[], None, &HashMap::new(), now(), None);

        let days: Vec<_> = statuses.keys().copied().collect();
        assert_eq!(days.len(), 7);
        assert_eq!(days[0], day(10, 13));
        assert_eq!(days[6], day(10, 19));
    }

    #[test]
    fn test_week_without_data() {
        let statuses = compute_week_statuses(day(10, 13), &[], None, &HashMap::new(), now(), None);

        assert_eq!(statuses[&day(10, 13)], DayDotStatus::None);
        assert_eq!(statuses[&day(10, 15)], DayDotStatus::Today);
        assert_eq!(statuses[&day(10, 19)], DayDotStatus::None);
    }

    #[test]
    fn test_week_mixed_adherence() {
        let mut summaries = HashMap::new();
        summaries.insert(
            day(10, 13),
            DailySummary {
                medication_total_doses: 2,
                medication_scheduled_doses: 2,
                ..Default::default()
            },
        );
        summaries.insert(
            day(10, 14),
            DailySummary {
                medication_total_doses: 1,
                medication_scheduled_doses: 2,
                ..Default::default()
            },
        );

        let statuses = compute_week_statuses(day(10, 13), &[], None, &summaries, now(), None);
        assert_eq!(statuses[&day(10, 13)], DayDotStatus::Complete);
        assert_eq!(statuses[&day(10, 14)], DayDotStatus::Missed);
    }

    #[test]
    fn test_month_has_entry_per_day() {
        let statuses = compute_month_statuses(day(2, 1), None, now(), None);
        assert_eq!(statuses.len(), 28);
        assert!(statuses.values().all(|s| *s == DayDotStatus::None));

        let statuses = compute_month_statuses(day(10, 1), None, now(), None);
        assert_eq!(statuses.len(), 31);
        assert_eq!(statuses[&day(10, 15)], DayDotStatus::Today);
    }

    #[test]
    fn test_month_misaligned_summary_falls_back_to_empty() {
        let summary = MonthlySummary {
            daily_medication_scheduled_doses: Some(vec![1; 30]),
            ..Default::default()
        };

        let statuses = compute_month_statuses(day(10, 1), Some(&summary), now(), None);
        assert_eq!(statuses.len(), 31);
        assert_eq!(statuses[&day(10, 3)], DayDotStatus::None);
    }
}
