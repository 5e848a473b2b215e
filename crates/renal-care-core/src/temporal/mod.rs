//! Calendar helpers: day/week/month boundaries and period keys.
//!
//! Weeks start on Monday (ISO 8601). All helpers work on local wall-clock
//! dates; time zones are resolved by the host before values reach the engine.

mod boundaries;
mod period;

pub use boundaries::*;
pub use period::*;

use thiserror::Error;

/// Errors parsing dates supplied by the host.
#[derive(Error, Debug, PartialEq)]
pub enum TemporalError {
    #[error("Invalid day key: {0}")]
    InvalidDay(String),

    #[error("Invalid instant: {0}")]
    InvalidInstant(String),
}

pub type TemporalResult<T> = Result<T, TemporalError>;
