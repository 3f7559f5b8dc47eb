//! # occasions-time
//!
//! Occasion date resolution: given a loosely specified occasion — a fixed
//! calendar holiday, a floating "Nth weekday" holiday, an equinox or
//! solstice, Easter, a lunisolar festival, or a free-form month/day — the
//! engine deterministically computes the next concrete occurrence, rolling
//! to next year when this year's instance has passed.
//!
//! The engine is a pure function library: no I/O, no shared mutable state
//! beyond the optional evaluation-date override in `occasions-core`, safe
//! to call concurrently.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Date` type (serial-number calendar date).
pub mod date;

/// Holiday calculators (fixed, floating, Easter, astronomical, lunar).
pub mod holidays;

/// `MonthDay` — a recurring annual date.
pub mod month_day;

/// `OccasionType` and the `Occasion` record.
pub mod occasion;

/// The unified resolver entry point.
pub mod resolver;

/// Roll-forward-to-future calculation.
pub mod roll;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::Date;
pub use month_day::MonthDay;
pub use occasion::{normalize, Occasion, OccasionType};
pub use resolver::{resolve_as_of, resolve_occasion_date};
pub use roll::{next_from_month_day, next_occurrence, next_occurrence_as_of, roll_forward};
pub use weekday::Weekday;
