//! Per-day treatment bucket consumed by the status calculator.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::summary::DailySummary;

/// Given vs. planned treatment totals for one calendar day.
///
/// A bucket whose planned fields are all zero means nothing was planned for
/// the day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct TreatmentDayBucket {
    /// Calendar day
    pub date: NaiveDate,
    /// Fluid volume given in mL
    pub fluid_volume_ml: u32,
    /// Fluid volume required in mL
    pub fluid_goal_ml: u32,
    /// Fluid sessions expected
    pub fluid_scheduled_sessions: u32,
    /// Fluid sessions completed
    pub fluid_session_count: u32,
    /// Medication doses given
    pub medication_doses: u32,
    /// Medication doses expected
    pub medication_scheduled_doses: u32,
}

impl TreatmentDayBucket {
    /// An all-zero bucket (no data for the day).
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            fluid_volume_ml: 0,
            fluid_goal_ml: 0,
            fluid_scheduled_sessions: 0,
            fluid_session_count: 0,
            medication_doses: 0,
            medication_scheduled_doses: 0,
        }
    }

    /// Build a bucket from a day summary.
    pub fn from_summary(date: NaiveDate, summary: &DailySummary) -> Self {
        Self {
            date,
            fluid_volume_ml: summary.fluid_total_volume_ml,
            fluid_goal_ml: summary.fluid_goal_ml,
            fluid_scheduled_sessions: summary.fluid_scheduled_sessions,
            fluid_session_count: summary.fluid_session_count,
            medication_doses: summary.medication_total_doses,
            medication_scheduled_doses: summary.medication_scheduled_doses,
        }
    }

    /// Any treatment type planned for the day.
    ///
    /// A fluid goal without scheduled sessions is a dosage target, not a plan.
    pub fn has_plan(&self) -> bool {
        self.fluid_scheduled_sessions > 0 || self.medication_scheduled_doses > 0
    }

    /// Fluid goal volume met or exceeded (or no fluid planned).
    pub fn fluid_satisfied(&self) -> bool {
        self.fluid_scheduled_sessions == 0 || self.fluid_volume_ml >= self.fluid_goal_ml
    }

    /// All scheduled doses given (or no medication planned).
    pub fn medication_satisfied(&self) -> bool {
        self.medication_scheduled_doses == 0
            || self.medication_doses >= self.medication_scheduled_doses
    }

    /// Every planned treatment type satisfied.
    pub fn is_satisfied(&self) -> bool {
        self.fluid_satisfied() && self.medication_satisfied()
    }

    /// Fluid goal recorded with no scheduled session count.
    pub fn has_orphan_fluid_goal(&self) -> bool {
        self.fluid_goal_ml > 0 && self.fluid_scheduled_sessions == 0
    }
}
