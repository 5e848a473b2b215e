//! Treatment schedule models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Kind of treatment a schedule describes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, uniffi::Enum)]
#[serde(rename_all = "snake_case")]
pub enum TreatmentType {
    /// Oral or injectable medication doses
    Medication,
    /// Subcutaneous fluid therapy sessions
    Fluid,
}

/// A recurring treatment schedule as currently configured for a pet.
///
/// Schedules are consumed read-only. They describe the plan as it stands
/// now; historical versions are not reconstructed here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Schedule {
    /// Schedule ID from the schedule source
    pub id: String,
    /// Medication or fluid
    pub treatment_type: TreatmentType,
    /// Display name (e.g., "Benazepril", "Lactated Ringer's")
    pub name: String,
    /// First day the schedule applies
    pub start_date: NaiveDate,
    /// Last day the schedule applies (open-ended when absent)
    pub end_date: Option<NaiveDate>,
    /// Doses (medication) or sessions (fluid) expected per day
    pub times_per_day: u32,
    /// Target volume per session in mL (fluid only)
    pub target_volume_ml: Option<u32>,
    /// Paused schedules are kept but expect nothing
    pub is_active: bool,
}

impl Schedule {
    /// Create an active medication schedule.
    pub fn medication(name: String, start_date: NaiveDate, doses_per_day: u32) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            treatment_type: TreatmentType::Medication,
            name,
            start_date,
            end_date: None,
            times_per_day: doses_per_day,
            target_volume_ml: None,
            is_active: true,
        }
    }

    /// Create an active fluid therapy schedule.
    pub fn fluid(start_date: NaiveDate, sessions_per_day: u32, target_volume_ml: u32) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            treatment_type: TreatmentType::Fluid,
            name: "Subcutaneous fluids".into(),
            start_date,
            end_date: None,
            times_per_day: sessions_per_day,
            target_volume_ml: Some(target_volume_ml),
            is_active: true,
        }
    }

    /// Check whether the schedule applies on the given day.
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        self.is_active
            && self.start_date <= date
            && self.end_date.map_or(true, |end| date <= end)
    }

    /// Doses or sessions expected on the given day.
    pub fn expected_per_day(&self, date: NaiveDate) -> u32 {
        if self.is_active_on(date) {
            self.times_per_day
        } else {
            0
        }
    }

    /// Total fluid volume expected on the given day (0 for medications).
    pub fn expected_volume_ml(&self, date: NaiveDate) -> u32 {
        match self.treatment_type {
            TreatmentType::Fluid => self
                .target_volume_ml
                .unwrap_or(0)
                .saturating_mul(self.expected_per_day(date)),
            TreatmentType::Medication => 0,
        }
    }
}
