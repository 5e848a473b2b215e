//! Domain models for the renal-care adherence engine.

mod bucket;
mod schedule;
mod status;
mod summary;

pub use bucket::*;
pub use schedule::*;
pub use status::*;
pub use summary::*;
