//! # occasions
//!
//! Occasion date resolution for gift reminders: map a loosely specified
//! occasion label to the next concrete calendar date.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates.  Application code should depend on this
//! crate rather than the individual `occasions-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use occasions::resolve_occasion_date;
//!
//! // Pinning a year returns that year's occurrence.
//! assert_eq!(
//!     resolve_occasion_date("Thanksgiving", Some(2024)),
//!     Some("2024-11-28".to_string())
//! );
//!
//! // Free text has no deterministic date: ask the user.
//! assert_eq!(resolve_occasion_date("our first hike", None), None);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types and process-wide settings.
pub use occasions_core as core;

/// Calendar arithmetic, holiday calculators, and the resolver.
pub use occasions_time as time;

pub use occasions_time::{
    next_occurrence, next_occurrence_as_of, resolve_as_of, resolve_occasion_date, Date, MonthDay,
    Occasion, OccasionType, Weekday,
};
