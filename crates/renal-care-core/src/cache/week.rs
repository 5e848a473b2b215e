//! Bounded week status cache.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::config::EngineConfig;
use crate::models::{DailySummary, DayStatuses, Schedule};
use crate::status::compute_week_statuses;

use super::WeekCacheKey;

/// Cache counters since construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
}

/// Week status maps keyed by their inputs, evicted oldest-inserted first.
///
/// Lookups do not refresh an entry's position. The cache never learns when
/// upstream schedules or summaries change; callers that invalidate their
/// data source call [`WeekStatusCache::clear`].
pub struct WeekStatusCache {
    capacity: usize,
    granularity: Duration,
    entries: HashMap<WeekCacheKey, Arc<DayStatuses>>,
    /// Keys in insertion order, oldest first
    order: VecDeque<WeekCacheKey>,
    hits: u64,
    misses: u64,
    evictions: u64,
}

impl Default for WeekStatusCache {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}

impl WeekStatusCache {
    /// Create an empty cache.
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            capacity: config.cache_capacity.max(1),
            granularity: config.now_granularity(),
            entries: HashMap::new(),
            order: VecDeque::new(),
            hits: 0,
            misses: 0,
            evictions: 0,
        }
    }

    /// Week statuses, reusing a cached map when the inputs match.
    ///
    /// `now` only needs to match to the configured granularity. A hit
    /// returns the same `Arc` that was stored on the miss.
    pub fn compute_week_statuses_memoized(
        &mut self,
        week_start: NaiveDate,
        medication_schedules: &[Schedule],
        fluid_schedule: Option<&Schedule>,
        summaries: &HashMap<NaiveDate, DailySummary>,
        now: NaiveDateTime,
        tracking_start: Option<NaiveDate>,
    ) -> Arc<DayStatuses> {
        let key = WeekCacheKey::new(
            week_start,
            medication_schedules,
            fluid_schedule,
            summaries,
            now,
            tracking_start,
            self.granularity,
        );

        if let Some(statuses) = self.entries.get(&key) {
            self.hits += 1;
            tracing::debug!(key = %key.fingerprint(), "Week status cache hit");
            return Arc::clone(statuses);
        }

        self.misses += 1;
        tracing::debug!(key = %key.fingerprint(), "Week status cache miss");

        let statuses = Arc::new(compute_week_statuses(
            week_start,
            medication_schedules,
            fluid_schedule,
            summaries,
            now,
            tracking_start,
        ));
        self.insert(key, Arc::clone(&statuses));
        statuses
    }

    /// Check whether a key is cached.
    pub fn contains(&self, key: &WeekCacheKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Insert an entry, evicting the oldest insertions beyond capacity.
    fn insert(&mut self, key: WeekCacheKey, statuses: Arc<DayStatuses>) {
        if self.entries.contains_key(&key) {
            self.entries.insert(key, statuses);
            return;
        }

        while self.entries.len() >= self.capacity {
            let Some(oldest) = self.order.pop_front() else {
                break;
            };
            self.entries.remove(&oldest);
            self.evictions += 1;
            tracing::debug!(key = %oldest.fingerprint(), "Evicted week status entry");
        }

        self.order.push_back(key.clone());
        self.entries.insert(key, statuses);
    }

    /// Drop every cached entry. Counters are kept.
    pub fn clear(&mut self) {
        tracing::info!(entries = self.entries.len(), "Week status cache cleared");
        self.entries.clear();
        self.order.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Key time tolerance used when forming keys.
    pub fn granularity(&self) -> Duration {
        self.granularity
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.entries.len(),
            hits: self.hits,
            misses: self.misses,
            evictions: self.evictions,
        }
    }
}
