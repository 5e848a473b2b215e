//! Engine configuration.

use chrono::Duration;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Week maps kept by the status cache before the oldest is evicted.
pub const DEFAULT_CACHE_CAPACITY: usize = 10;

/// Granularity `now` is rounded down to when forming cache keys.
pub const DEFAULT_NOW_GRANULARITY_SECS: u32 = 60;

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config value: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Tunables for the adherence engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Maximum cached week maps
    pub cache_capacity: usize,
    /// Cache key time tolerance in seconds
    pub now_granularity_secs: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            now_granularity_secs: DEFAULT_NOW_GRANULARITY_SECS,
        }
    }
}

impl EngineConfig {
    /// Parse and validate a JSON config. Missing fields take defaults.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the cache cannot work with.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.cache_capacity == 0 {
            return Err(ConfigError::Invalid("cache_capacity must be at least 1".into()));
        }
        if u32::try_from(self.cache_capacity).is_err() {
            return Err(ConfigError::Invalid(format!(
                "cache_capacity must be at most {}",
                u32::MAX
            )));
        }
        if self.now_granularity_secs == 0 {
            return Err(ConfigError::Invalid(
                "now_granularity_secs must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Key time tolerance as a duration.
    pub fn now_granularity(&self) -> Duration {
        Duration::seconds(i64::from(self.now_granularity_secs))
    }
}
