//! Aggregated treatment summaries supplied by the summary source.

use serde::{Deserialize, Serialize};

/// Treatment totals for a single day.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(default)]
pub struct DailySummary {
    /// Medication doses given
    pub medication_total_doses: u32,
    /// Medication doses expected
    pub medication_scheduled_doses: u32,
    /// Fluid volume given in mL
    pub fluid_total_volume_ml: u32,
    /// Fluid volume required in mL
    pub fluid_goal_ml: u32,
    /// Fluid sessions completed
    pub fluid_session_count: u32,
    /// Fluid sessions expected
    pub fluid_scheduled_sessions: u32,
}

/// Month summary with parallel per-day arrays.
///
/// Element `i` of every array describes day `i + 1` of the month. An absent
/// array reads as zeros; a present array must hold exactly one element per
/// day of the month.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MonthlySummary {
    pub daily_volumes: Option<Vec<u32>>,
    pub daily_goals: Option<Vec<u32>>,
    pub daily_scheduled_sessions: Option<Vec<u32>>,
    pub daily_session_counts: Option<Vec<u32>>,
    pub daily_medication_doses: Option<Vec<u32>>,
    pub daily_medication_scheduled_doses: Option<Vec<u32>>,
}

impl MonthlySummary {
    /// All per-day arrays with their field names.
    pub fn arrays(&self) -> [(&'static str, Option<&[u32]>); 6] {
        [
            ("daily_volumes", self.daily_volumes.as_deref()),
            ("daily_goals", self.daily_goals.as_deref()),
            ("daily_scheduled_sessions", self.daily_scheduled_sessions.as_deref()),
            ("daily_session_counts", self.daily_session_counts.as_deref()),
            ("daily_medication_doses", self.daily_medication_doses.as_deref()),
            (
                "daily_medication_scheduled_doses",
                self.daily_medication_scheduled_doses.as_deref(),
            ),
        ]
    }

    /// Find the first present array whose length differs from `days`.
    ///
    /// Returns the field name and its actual length.
    pub fn misaligned_array(&self, days: usize) -> Option<(&'static str, usize)> {
        self.arrays()
            .into_iter()
            .find_map(|(name, values)| match values {
                Some(values) if values.len() != days => Some((name, values.len())),
                _ => None,
            })
    }

    /// Build the day summary for a zero-based day index.
    ///
    /// Callers check alignment first; out-of-range indexes read as zero.
    pub fn day(&self, index: usize) -> DailySummary {
        let at = |values: &Option<Vec<u32>>| {
            values
                .as_ref()
                .and_then(|v| v.get(index).copied())
                .unwrap_or(0)
        };

        DailySummary {
            medication_total_doses: at(&self.daily_medication_doses),
            medication_scheduled_doses: at(&self.daily_medication_scheduled_doses),
            fluid_total_volume_ml: at(&self.daily_volumes),
            fluid_goal_ml: at(&self.daily_goals),
            fluid_session_count: at(&self.daily_session_counts),
            fluid_scheduled_sessions: at(&self.daily_scheduled_sessions),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_misaligned_array_detected() {
        let summary = MonthlySummary {
            daily_volumes: Some(vec![0; 31]),
            daily_goals: Some(vec![0; 30]),
            ..Default::default()
        };

        assert_eq!(summary.misaligned_array(31), Some(("daily_goals", 30)));
        assert_eq!(summary.misaligned_array(30), Some(("daily_volumes", 31)));
    }

    #[test]
    fn test_absent_arrays_are_aligned() {
        let summary = MonthlySummary::default();
        assert_eq!(summary.misaligned_array(28), None);
        assert_eq!(summary.day(0), DailySummary::default());
    }

    #[test]
    fn test_day_reads_parallel_arrays() {
        let mut volumes = vec![0; 30];
        volumes[4] = 150;
        let mut doses = vec![0; 30];
        doses[4] = 2;

        let summary = MonthlySummary {
            daily_volumes: Some(volumes),
            daily_medication_doses: Some(doses),
            ..Default::default()
        };

        let day = summary.day(4);
        assert_eq!(day.fluid_total_volume_ml, 150);
        assert_eq!(day.medication_total_doses, 2);
        assert_eq!(day.fluid_goal_ml, 0);
    }

    #[test]
    fn test_deserialize_with_missing_fields() {
        let json = r#"{"daily_volumes":[100,0,50]}"#;
        let summary: MonthlySummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.daily_volumes, Some(vec![100, 0, 50]));
        assert!(summary.daily_goals.is_none());
    }
}
