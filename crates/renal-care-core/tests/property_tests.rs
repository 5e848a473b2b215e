//! Property tests for the status engine and cache.

use std::collections::HashMap;

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, Weekday};
use proptest::prelude::*;
use renal_care_core::cache::WeekStatusCache;
use renal_care_core::config::EngineConfig;
use renal_care_core::models::{DayDotStatus, MonthlySummary, TreatmentDayBucket};
use renal_care_core::status::{build_monthly_buckets, compute_week_statuses, status_for};
use renal_care_core::temporal::days_in_month;

fn base() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0u64..1100).prop_map(|offset| base() + Days::new(offset))
}

fn now_strategy() -> impl Strategy<Value = NaiveDateTime> {
    (date_strategy(), 0u32..24, 0u32..60, 0u32..60)
        .prop_map(|(date, h, m, s)| date.and_hms_opt(h, m, s).unwrap())
}

fn bucket_strategy() -> impl Strategy<Value = TreatmentDayBucket> {
    (
        date_strategy(),
        0u32..400,
        0u32..400,
        0u32..3,
        0u32..3,
        0u32..4,
        0u32..4,
    )
        .prop_map(
            |(date, volume, goal, scheduled_sessions, sessions, doses, scheduled_doses)| {
                TreatmentDayBucket {
                    date,
                    fluid_volume_ml: volume,
                    fluid_goal_ml: goal,
                    fluid_scheduled_sessions: scheduled_sessions,
                    fluid_session_count: sessions,
                    medication_doses: doses,
                    medication_scheduled_doses: scheduled_doses,
                }
            },
        )
}

proptest! {
    #[test]
    fn future_days_are_none(
        mut bucket in bucket_strategy(),
        now in now_strategy(),
        ahead in 1u64..60,
    ) {
        bucket.date = now.date() + Days::new(ahead);
        prop_assert_eq!(status_for(&bucket, now, None), DayDotStatus::None);
    }

    #[test]
    fn pre_tracking_days_are_none(
        bucket in bucket_strategy(),
        now in now_strategy(),
        later in 1u64..60,
    ) {
        let tracking_start = bucket.date + Days::new(later);
        prop_assert_eq!(status_for(&bucket, now, Some(tracking_start)), DayDotStatus::None);
    }

    #[test]
    fn today_is_never_missed(mut bucket in bucket_strategy(), now in now_strategy()) {
        bucket.date = now.date();
        let status = status_for(&bucket, now, None);
        prop_assert_ne!(status, DayDotStatus::Missed);
        prop_assert_ne!(status, DayDotStatus::None);
    }

    #[test]
    fn past_planned_days_resolve_by_satisfaction(
        bucket in bucket_strategy(),
        now in now_strategy(),
    ) {
        prop_assume!(bucket.date < now.date());
        prop_assume!(bucket.has_plan());

        let expected = if bucket.is_satisfied() {
            DayDotStatus::Complete
        } else {
            DayDotStatus::Missed
        };
        prop_assert_eq!(status_for(&bucket, now, None), expected);
    }

    #[test]
    fn no_plan_days_are_none_or_today(mut bucket in bucket_strategy(), now in now_strategy()) {
        bucket.fluid_scheduled_sessions = 0;
        bucket.medication_scheduled_doses = 0;

        let status = status_for(&bucket, now, None);
        if bucket.date == now.date() {
            prop_assert_eq!(status, DayDotStatus::Today);
        } else {
            prop_assert_eq!(status, DayDotStatus::None);
        }
    }

    #[test]
    fn week_covers_monday_to_sunday(week_start in date_strategy(), now in now_strategy()) {
        let statuses = compute_week_statuses(week_start, &[], None, &HashMap::new(), now, None);

        prop_assert_eq!(statuses.len(), 7);
        let first = *statuses.keys().next().unwrap();
        let last = *statuses.keys().last().unwrap();
        prop_assert_eq!(first.weekday(), Weekday::Mon);
        prop_assert_eq!(last.weekday(), Weekday::Sun);
        prop_assert!(first <= week_start && week_start <= last);
    }

    #[test]
    fn misaligned_month_is_rejected(
        month_start in date_strategy(),
        delta in 1usize..4,
        longer in any::<bool>(),
    ) {
        let days = days_in_month(month_start) as usize;
        let len = if longer { days + delta } else { days - delta };
        let summary = MonthlySummary {
            daily_medication_doses: Some(vec![1; len]),
            ..Default::default()
        };

        prop_assert!(build_monthly_buckets(month_start, Some(&summary)).is_none());
    }

    #[test]
    fn cache_never_exceeds_capacity(capacity in 1usize..15, weeks in 1u64..30) {
        let config = EngineConfig {
            cache_capacity: capacity,
            ..Default::default()
        };
        let mut cache = WeekStatusCache::new(&config);
        let now = base().and_hms_opt(12, 0, 0).unwrap();

        for week in 0..weeks {
            let monday = base() + Days::new(7 * week);
            cache.compute_week_statuses_memoized(monday, &[], None, &HashMap::new(), now, None);
            prop_assert!(cache.len() <= capacity);
        }

        prop_assert_eq!(cache.len(), capacity.min(weeks as usize));
        prop_assert_eq!(cache.stats().evictions, weeks.saturating_sub(capacity as u64));
    }
}
