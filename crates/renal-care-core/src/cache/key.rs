//! Composite cache key.

use std::collections::{BTreeMap, HashMap};

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::models::{DailySummary, Schedule};
use crate::temporal::{round_down, start_of_week};

/// Structural key over every input of a week status computation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct WeekCacheKey {
    /// Monday of the week
    pub week_start: NaiveDate,
    /// Medication schedules in caller order
    pub medication_schedules: Vec<Schedule>,
    pub fluid_schedule: Option<Schedule>,
    /// Day summaries in date order
    pub summaries: BTreeMap<NaiveDate, DailySummary>,
    pub tracking_start: Option<NaiveDate>,
    /// `now` rounded down to the key granularity
    pub now: NaiveDateTime,
}

impl WeekCacheKey {
    /// Build a key, normalizing the week start and rounding `now`.
    pub fn new(
        week_start: NaiveDate,
        medication_schedules: &[Schedule],
        fluid_schedule: Option<&Schedule>,
        summaries: &HashMap<NaiveDate, DailySummary>,
        now: NaiveDateTime,
        tracking_start: Option<NaiveDate>,
        granularity: Duration,
    ) -> Self {
        Self {
            week_start: start_of_week(week_start),
            medication_schedules: medication_schedules.to_vec(),
            fluid_schedule: fluid_schedule.cloned(),
            summaries: summaries
                .iter()
                .map(|(date, summary)| (*date, summary.clone()))
                .collect(),
            tracking_start,
            now: round_down(now, granularity),
        }
    }

    /// SHA-256 hex digest of the key's JSON form, for logs.
    pub fn fingerprint(&self) -> String {
        let json = serde_json::to_vec(self).unwrap_or_default();
        hex::encode(Sha256::digest(&json))
    }
}
