//! Adherence status engine.
//!
//! Pipeline: Summaries → Buckets → Day Statuses → Week/Month Maps
//!
//! Everything here is a pure function of its inputs plus the current
//! instant. Malformed upstream data never fails: it degrades to
//! [`DayDotStatus::None`](crate::models::DayDotStatus::None) (or `Today`
//! for the current day).

mod assembler;
mod buckets;
mod day;

pub use assembler::*;
pub use buckets::*;
pub use day::*;
