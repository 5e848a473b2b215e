//! Renal-Care Core Library
//!
//! Treatment adherence engine for feline chronic kidney disease home care
//! (medication doses and subcutaneous fluid therapy).
//!
//! # Architecture
//!
//! ```text
//! Schedule source      Summary source
//!        │                    │
//!        └─────────┬──────────┘
//!                  ▼
//!           Bucket Builder          (one bucket per calendar day)
//!                  │
//!                  ▼
//!        Day Status Calculator      (none / today / missed / complete)
//!                  │
//!                  ▼
//!      Week / Month Assemblers      (date → status maps)
//!                  │
//!                  ▼
//!          Week Status Cache        (bounded, minute-tolerant keys)
//!                  │
//!                  ▼
//!          Calendar UI (host)
//! ```
//!
//! # Core Principle
//!
//! **An in-progress day is never reported as missed.** Today shows `Today`
//! until every planned treatment is given, then `Complete`.
//!
//! # Modules
//!
//! - [`models`]: Domain types (Schedule, DailySummary, TreatmentDayBucket, etc.)
//! - [`temporal`]: Day/week/month boundaries and period keys
//! - [`status`]: Bucket builder, day status calculator, assemblers
//! - [`cache`]: Memoized week statuses
//! - [`config`]: Engine tunables

pub mod cache;
pub mod config;
pub mod models;
pub mod status;
pub mod temporal;

// Re-export commonly used types
pub use cache::{CacheStats, WeekCacheKey, WeekStatusCache};
pub use config::EngineConfig;
pub use models::{
    DailySummary, DayDotStatus, DayStatuses, MonthlySummary, Schedule, StatusTally,
    TreatmentDayBucket, TreatmentType,
};
pub use status::{
    build_monthly_buckets, compute_month_statuses, compute_week_statuses, status_for,
};

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{NaiveDate, NaiveDateTime};

use temporal::{day_key, parse_day_key, parse_instant};

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum RenalCareError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<temporal::TemporalError> for RenalCareError {
    fn from(e: temporal::TemporalError) -> Self {
        RenalCareError::InvalidInput(e.to_string())
    }
}

impl From<config::ConfigError> for RenalCareError {
    fn from(e: config::ConfigError) -> Self {
        RenalCareError::ConfigError(e.to_string())
    }
}

impl<T> From<std::sync::PoisonError<T>> for RenalCareError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        RenalCareError::Internal(format!("Lock poisoned: {}", e))
    }
}

// =========================================================================
// Factory Functions (exported to FFI)
// =========================================================================

/// Create an engine with default configuration.
#[uniffi::export]
pub fn new_engine() -> Arc<RenalCareEngine> {
    Arc::new(RenalCareEngine::with_config(&EngineConfig::default()))
}

/// Create an engine from a JSON configuration.
#[uniffi::export]
pub fn new_engine_with_config(
    config_json: String,
) -> Result<Arc<RenalCareEngine>, RenalCareError> {
    let config = EngineConfig::from_json(&config_json)?;
    Ok(Arc::new(RenalCareEngine::with_config(&config)))
}

/// Count statuses and compute the adherence percentage.
#[uniffi::export]
pub fn tally_statuses(statuses: Vec<FfiDayStatus>) -> Result<FfiStatusTally, RenalCareError> {
    let statuses = statuses
        .into_iter()
        .map(|s| Ok((parse_day_key(&s.date)?, s.status)))
        .collect::<Result<DayStatuses, RenalCareError>>()?;
    Ok(StatusTally::from_statuses(&statuses).into())
}

// =========================================================================
// Main API Object
// =========================================================================

/// Thread-safe adherence engine for FFI.
///
/// Owns one week status cache; create one engine per pet.
#[derive(uniffi::Object)]
pub struct RenalCareEngine {
    cache: Mutex<WeekStatusCache>,
}

impl RenalCareEngine {
    fn with_config(config: &EngineConfig) -> Self {
        Self {
            cache: Mutex::new(WeekStatusCache::new(config)),
        }
    }
}

#[uniffi::export]
impl RenalCareEngine {
    // =========================================================================
    // Week Operations
    // =========================================================================

    /// Compute statuses for the ISO week containing `week_start`.
    pub fn compute_week_statuses(
        &self,
        week_start: String,
        medication_schedules: Vec<FfiSchedule>,
        fluid_schedule: Option<FfiSchedule>,
        summaries: HashMap<String, FfiDailySummary>,
        now: String,
        tracking_start: Option<String>,
    ) -> Result<Vec<FfiDayStatus>, RenalCareError> {
        let request = WeekRequest::parse(
            week_start,
            medication_schedules,
            fluid_schedule,
            summaries,
            now,
            tracking_start,
        )?;
        let statuses = status::compute_week_statuses(
            request.week_start,
            &request.medication_schedules,
            request.fluid_schedule.as_ref(),
            &request.summaries,
            request.now,
            request.tracking_start,
        );
        Ok(to_ffi_statuses(&statuses))
    }

    /// Same as `compute_week_statuses`, served from the cache when possible.
    pub fn compute_week_statuses_memoized(
        &self,
        week_start: String,
        medication_schedules: Vec<FfiSchedule>,
        fluid_schedule: Option<FfiSchedule>,
        summaries: HashMap<String, FfiDailySummary>,
        now: String,
        tracking_start: Option<String>,
    ) -> Result<Vec<FfiDayStatus>, RenalCareError> {
        let request = WeekRequest::parse(
            week_start,
            medication_schedules,
            fluid_schedule,
            summaries,
            now,
            tracking_start,
        )?;
        let mut cache = self.cache.lock()?;
        let statuses = cache.compute_week_statuses_memoized(
            request.week_start,
            &request.medication_schedules,
            request.fluid_schedule.as_ref(),
            &request.summaries,
            request.now,
            request.tracking_start,
        );
        Ok(to_ffi_statuses(&statuses))
    }

    // =========================================================================
    // Month Operations
    // =========================================================================

    /// Build one bucket per day of the month; `None` when the summary is
    /// missing or its arrays do not match the month length.
    pub fn build_monthly_treatment_buckets(
        &self,
        month_start: String,
        summary: Option<FfiMonthlySummary>,
    ) -> Result<Option<Vec<FfiDayBucket>>, RenalCareError> {
        let month_start = parse_day_key(&month_start)?;
        let summary = summary.map(MonthlySummary::from);
        let buckets = status::build_monthly_buckets(month_start, summary.as_ref());
        Ok(buckets.map(|b| b.into_iter().map(|bucket| bucket.into()).collect()))
    }

    /// Compute statuses for every day of the month containing `month_start`.
    pub fn compute_month_statuses(
        &self,
        month_start: String,
        summary: Option<FfiMonthlySummary>,
        now: String,
        tracking_start: Option<String>,
    ) -> Result<Vec<FfiDayStatus>, RenalCareError> {
        let month_start = parse_day_key(&month_start)?;
        let now = parse_instant(&now)?;
        let tracking_start = tracking_start.as_deref().map(parse_day_key).transpose()?;
        let summary = summary.map(MonthlySummary::from);

        let statuses =
            status::compute_month_statuses(month_start, summary.as_ref(), now, tracking_start);
        Ok(to_ffi_statuses(&statuses))
    }

    // =========================================================================
    // Cache Operations
    // =========================================================================

    /// Drop every cached week; call after the data source was refreshed.
    pub fn clear_cache(&self) -> Result<(), RenalCareError> {
        self.cache.lock()?.clear();
        Ok(())
    }

    /// Get cache counters.
    pub fn cache_stats(&self) -> Result<FfiCacheStats, RenalCareError> {
        let cache = self.cache.lock()?;
        Ok(cache.stats().into())
    }
}

/// Parsed arguments of a week computation.
struct WeekRequest {
    week_start: NaiveDate,
    medication_schedules: Vec<Schedule>,
    fluid_schedule: Option<Schedule>,
    summaries: HashMap<NaiveDate, DailySummary>,
    now: NaiveDateTime,
    tracking_start: Option<NaiveDate>,
}

impl WeekRequest {
    fn parse(
        week_start: String,
        medication_schedules: Vec<FfiSchedule>,
        fluid_schedule: Option<FfiSchedule>,
        summaries: HashMap<String, FfiDailySummary>,
        now: String,
        tracking_start: Option<String>,
    ) -> Result<Self, RenalCareError> {
        Ok(Self {
            week_start: parse_day_key(&week_start)?,
            medication_schedules: medication_schedules
                .into_iter()
                .map(Schedule::try_from)
                .collect::<Result<_, _>>()?,
            fluid_schedule: fluid_schedule.map(Schedule::try_from).transpose()?,
            summaries: summaries
                .into_iter()
                .map(|(date, summary)| Ok((parse_day_key(&date)?, summary.into())))
                .collect::<Result<_, RenalCareError>>()?,
            now: parse_instant(&now)?,
            tracking_start: tracking_start.as_deref().map(parse_day_key).transpose()?,
        })
    }
}

fn to_ffi_statuses(statuses: &DayStatuses) -> Vec<FfiDayStatus> {
    statuses
        .iter()
        .map(|(date, status)| FfiDayStatus {
            date: day_key(*date),
            status: *status,
        })
        .collect()
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe treatment schedule. Dates are `YYYY-MM-DD`.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiSchedule {
    pub id: String,
    pub treatment_type: TreatmentType,
    pub name: String,
    pub start_date: String,
    pub end_date: Option<String>,
    pub times_per_day: u32,
    pub target_volume_ml: Option<u32>,
    pub is_active: bool,
}

impl TryFrom<FfiSchedule> for Schedule {
    type Error = RenalCareError;

    fn try_from(schedule: FfiSchedule) -> Result<Self, Self::Error> {
        Ok(Schedule {
            id: schedule.id,
            treatment_type: schedule.treatment_type,
            name: schedule.name,
            start_date: parse_day_key(&schedule.start_date)?,
            end_date: schedule.end_date.as_deref().map(parse_day_key).transpose()?,
            times_per_day: schedule.times_per_day,
            target_volume_ml: schedule.target_volume_ml,
            is_active: schedule.is_active,
        })
    }
}

/// FFI-safe day summary.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiDailySummary {
    pub medication_total_doses: u32,
    pub medication_scheduled_doses: u32,
    pub fluid_total_volume_ml: u32,
    pub fluid_goal_ml: u32,
    pub fluid_session_count: u32,
    pub fluid_scheduled_sessions: u32,
}

impl From<FfiDailySummary> for DailySummary {
    fn from(summary: FfiDailySummary) -> Self {
        DailySummary {
            medication_total_doses: summary.medication_total_doses,
            medication_scheduled_doses: summary.medication_scheduled_doses,
            fluid_total_volume_ml: summary.fluid_total_volume_ml,
            fluid_goal_ml: summary.fluid_goal_ml,
            fluid_session_count: summary.fluid_session_count,
            fluid_scheduled_sessions: summary.fluid_scheduled_sessions,
        }
    }
}

/// FFI-safe monthly summary with parallel per-day arrays.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiMonthlySummary {
    pub daily_volumes: Option<Vec<u32>>,
    pub daily_goals: Option<Vec<u32>>,
    pub daily_scheduled_sessions: Option<Vec<u32>>,
    pub daily_session_counts: Option<Vec<u32>>,
    pub daily_medication_doses: Option<Vec<u32>>,
    pub daily_medication_scheduled_doses: Option<Vec<u32>>,
}

impl From<FfiMonthlySummary> for MonthlySummary {
    fn from(summary: FfiMonthlySummary) -> Self {
        MonthlySummary {
            daily_volumes: summary.daily_volumes,
            daily_goals: summary.daily_goals,
            daily_scheduled_sessions: summary.daily_scheduled_sessions,
            daily_session_counts: summary.daily_session_counts,
            daily_medication_doses: summary.daily_medication_doses,
            daily_medication_scheduled_doses: summary.daily_medication_scheduled_doses,
        }
    }
}

/// FFI-safe day bucket.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiDayBucket {
    pub date: String,
    pub fluid_volume_ml: u32,
    pub fluid_goal_ml: u32,
    pub fluid_scheduled_sessions: u32,
    pub fluid_session_count: u32,
    pub medication_doses: u32,
    pub medication_scheduled_doses: u32,
}

impl From<TreatmentDayBucket> for FfiDayBucket {
    fn from(bucket: TreatmentDayBucket) -> Self {
        Self {
            date: day_key(bucket.date),
            fluid_volume_ml: bucket.fluid_volume_ml,
            fluid_goal_ml: bucket.fluid_goal_ml,
            fluid_scheduled_sessions: bucket.fluid_scheduled_sessions,
            fluid_session_count: bucket.fluid_session_count,
            medication_doses: bucket.medication_doses,
            medication_scheduled_doses: bucket.medication_scheduled_doses,
        }
    }
}

/// FFI-safe status for one day.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct FfiDayStatus {
    pub date: String,
    pub status: DayDotStatus,
}

/// FFI-safe status tally.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiStatusTally {
    pub none: u32,
    pub today: u32,
    pub missed: u32,
    pub complete: u32,
    pub adherence_percent: Option<f64>,
}

impl From<StatusTally> for FfiStatusTally {
    fn from(tally: StatusTally) -> Self {
        Self {
            none: tally.none,
            today: tally.today,
            missed: tally.missed,
            complete: tally.complete,
            adherence_percent: tally.adherence_percent(),
        }
    }
}

/// FFI-safe cache statistics.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiCacheStats {
    pub entries: u32,
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
}

impl From<CacheStats> for FfiCacheStats {
    fn from(stats: CacheStats) -> Self {
        Self {
            entries: u32::try_from(stats.entries).unwrap_or(u32::MAX),
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
        }
    }
}
