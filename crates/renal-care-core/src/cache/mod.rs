//! Memoization of week status maps.
//!
//! Keys compare by value: schedule lists are order-sensitive, summary maps
//! are order-insensitive, and `now` is rounded down to the configured
//! granularity so repeated renders within the same minute share an entry.

mod key;
mod week;

pub use key::*;
pub use week::*;
