//! Bucket construction from summaries and schedules.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::models::{DailySummary, MonthlySummary, Schedule, TreatmentDayBucket, TreatmentType};
use crate::temporal::{days_in_month, month_days, month_key, start_of_month, week_days};

/// Build one bucket per day of the month from a monthly summary.
///
/// Returns `None` when the summary is absent or when any present per-day
/// array does not hold exactly one element per day of the month. Partial
/// data is rejected whole rather than truncated or zero-padded.
pub fn build_monthly_buckets(
    month_start: NaiveDate,
    summary: Option<&MonthlySummary>,
) -> Option<Vec<TreatmentDayBucket>> {
    let summary = summary?;
    let month_start = start_of_month(month_start);
    let days = days_in_month(month_start) as usize;

    if let Some((field, len)) = summary.misaligned_array(days) {
        tracing::warn!(
            month = %month_key(month_start),
            field,
            len,
            expected = days,
            "Rejecting monthly summary with misaligned day arrays"
        );
        return None;
    }

    let buckets = month_days(month_start)
        .into_iter()
        .enumerate()
        .map(|(index, date)| TreatmentDayBucket::from_summary(date, &summary.day(index)))
        .collect();

    Some(buckets)
}

/// Build the seven buckets of the ISO week containing `week_start`.
///
/// Days without a summary get an empty bucket. Days with a summary that
/// reports nothing planned for a treatment type take the planned counts
/// from the schedules active that day.
pub fn build_week_buckets(
    week_start: NaiveDate,
    medication_schedules: &[Schedule],
    fluid_schedule: Option<&Schedule>,
    summaries: &HashMap<NaiveDate, DailySummary>,
) -> Vec<TreatmentDayBucket> {
    week_days(week_start)
        .into_iter()
        .map(|date| match summaries.get(&date) {
            Some(summary) => {
                let mut bucket = TreatmentDayBucket::from_summary(date, summary);
                backfill_planned(&mut bucket, medication_schedules, fluid_schedule);
                bucket
            }
            None => TreatmentDayBucket::empty(date),
        })
        .collect()
}

/// Fill planned counts the summary left at zero from active schedules.
fn backfill_planned(
    bucket: &mut TreatmentDayBucket,
    medication_schedules: &[Schedule],
    fluid_schedule: Option<&Schedule>,
) {
    let date = bucket.date;

    if bucket.medication_scheduled_doses == 0 {
        bucket.medication_scheduled_doses = medication_schedules
            .iter()
            .filter(|s| s.treatment_type == TreatmentType::Medication)
            .map(|s| s.expected_per_day(date))
            .sum();
    }

    if let Some(fluid) = fluid_schedule.filter(|s| s.treatment_type == TreatmentType::Fluid) {
        if bucket.fluid_scheduled_sessions == 0 {
            bucket.fluid_scheduled_sessions = fluid.expected_per_day(date);
        }
        if bucket.fluid_goal_ml == 0 {
            bucket.fluid_goal_ml = fluid.expected_volume_ml(date);
        }
    }
}
