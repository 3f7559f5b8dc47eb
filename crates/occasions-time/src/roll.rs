//! Roll-forward-to-future calculation.
//!
//! The single shared roll primitive: every calculator in the engine goes
//! through [`roll_forward`] or [`next_from_month_day`] with an explicit
//! `today`, captured once per resolution.  (The original engine re-read
//! the system clock inside each per-holiday recursion; taking `today` as
//! a parameter keeps one resolution internally consistent across a
//! midnight boundary.)

use crate::date::Date;
use crate::month_day::MonthDay;
use occasions_core::errors::Result;

/// Earliest occurrence of a recurring month/day that is on or after
/// `today`: materialise in `today`'s year, and re-materialise in the next
/// year if that instance has already passed.
pub fn next_from_month_day(md: MonthDay, today: Date) -> Result<Date> {
    let this_year = md.resolve(today.year())?;
    if this_year < today {
        md.resolve(today.year() + 1)
    } else {
        Ok(this_year)
    }
}

/// Roll a per-year calculation forward: evaluate it for `today`'s year,
/// and for the following year if the result has already passed.
///
/// `compute(y)` must return a date within year `y`, which every calculator
/// in this crate does; the rolled result is therefore always ≥ `today`.
pub fn roll_forward(today: Date, compute: impl Fn(u16) -> Result<Date>) -> Result<Date> {
    let d = compute(today.year())?;
    if d < today {
        compute(today.year() + 1)
    } else {
        Ok(d)
    }
}

/// Next occurrence of a date-like string, as a string.
///
/// Accepts `YYYY-MM-DD` (the year is discarded) or `MM-DD`.  Anything
/// else — a sentinel, a placeholder, a malformed month/day — is returned
/// unchanged: this surface must never block a calling workflow, so a
/// pass-through is always preferred over an error.
///
/// "Today" is read fresh from the clock on each call.
pub fn next_occurrence(input: &str) -> String {
    next_occurrence_as_of(input, Date::today())
}

/// [`next_occurrence`] with an explicit `today`.
pub fn next_occurrence_as_of(input: &str, today: Date) -> String {
    let md = match parse_date_like(input) {
        Some(md) => md,
        None => return input.to_string(),
    };
    match next_from_month_day(md, today) {
        Ok(d) => d.to_string(),
        Err(_) => input.to_string(),
    }
}

/// Extract the month/day from a `YYYY-MM-DD` or `MM-DD` string.
fn parse_date_like(input: &str) -> Option<MonthDay> {
    let b = input.as_bytes();
    let md_part = match b.len() {
        10 if b[4] == b'-' && b[..4].iter().all(u8::is_ascii_digit) => &input[5..],
        5 => input,
        _ => return None,
    };
    MonthDay::from_str_md(md_part).ok()
}
