//! Day dot statuses and tallies.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Adherence status rendered as a calendar dot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, uniffi::Enum)]
#[serde(rename_all = "snake_case")]
pub enum DayDotStatus {
    /// Nothing planned, not yet tracked, or in the future
    None,
    /// The current day, still in progress
    Today,
    /// A past day with at least one planned treatment not fully given
    Missed,
    /// Every planned treatment fully given
    Complete,
}

/// Statuses keyed by calendar day, in date order.
pub type DayStatuses = BTreeMap<NaiveDate, DayDotStatus>;

/// Count of each status over a range of days.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusTally {
    pub none: u32,
    pub today: u32,
    pub missed: u32,
    pub complete: u32,
}

impl StatusTally {
    /// Tally the statuses of a day map.
    pub fn from_statuses(statuses: &DayStatuses) -> Self {
        statuses.values().fold(Self::default(), |mut tally, status| {
            match status {
                DayDotStatus::None => tally.none += 1,
                DayDotStatus::Today => tally.today += 1,
                DayDotStatus::Missed => tally.missed += 1,
                DayDotStatus::Complete => tally.complete += 1,
            }
            tally
        })
    }

    /// Share of evaluated days that were complete, as a percentage.
    ///
    /// `None` when no day resolved to complete or missed.
    pub fn adherence_percent(&self) -> Option<f64> {
        let evaluated = self.complete + self.missed;
        if evaluated == 0 {
            return None;
        }
        Some(f64::from(self.complete) * 100.0 / f64::from(evaluated))
    }
}
