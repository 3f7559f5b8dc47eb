//! `MonthDay` — a recurring annual date with no year.
//!
//! This is the representation used for birthdays and fixed holidays
//! before a concrete year is chosen.

use crate::date::Date;
use occasions_core::ensure;
use occasions_core::errors::{Error, Result};

/// A (month, day) pair recurring every year.
///
/// `month` is 1–12 and `day` 1–31; whether the day actually exists in the
/// month is decided only when the pair is materialised in a concrete year
/// (see [`MonthDay::resolve`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthDay {
    month: u8,
    day: u8,
}

impl MonthDay {
    /// Create a pair, validating `month` ∈ [1, 12] and `day` ∈ [1, 31].
    pub fn new(month: u8, day: u8) -> Result<Self> {
        ensure!((1..=12).contains(&month), "month {month} out of range [1, 12]");
        ensure!((1..=31).contains(&day), "day {day} out of range [1, 31]");
        Ok(MonthDay { month, day })
    }

    /// Create a pair from values known to be in range.
    pub(crate) const fn from_parts(month: u8, day: u8) -> Self {
        debug_assert!(1 <= month && month <= 12 && 1 <= day && day <= 31);
        MonthDay { month, day }
    }

    /// Parse a `MM-DD` string.
    pub fn from_str_md(s: &str) -> Result<Self> {
        let b = s.as_bytes();
        let well_formed = b.len() == 5
            && b[2] == b'-'
            && b.iter().enumerate().all(|(i, c)| i == 2 || c.is_ascii_digit());
        if !well_formed {
            return Err(Error::InvalidArgument(format!(
                "'{s}' is not an MM-DD month/day"
            )));
        }
        let month: u8 = s[0..2].parse().expect("two ASCII digits");
        let day: u8 = s[3..5].parse().expect("two ASCII digits");
        Self::new(month, day)
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Return the day (1–31).
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Materialise this pair in a concrete year.
    ///
    /// A day past the end of the month rolls into the following month
    /// (Feb 30 → Mar 1 in a leap year, Mar 2 otherwise), matching the
    /// permissive rollover of native date construction that callers of the
    /// original engine relied on.
    pub fn resolve(&self, year: u16) -> Result<Date> {
        let first = Date::from_ymd(year, self.month, 1)?;
        first.add_days(i32::from(self.day) - 1)
    }
}

impl std::fmt::Display for MonthDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_plain() {
        let md = MonthDay::new(12, 25).unwrap();
        assert_eq!(md.resolve(2025).unwrap().to_string(), "2025-12-25");
    }

    #[test]
    fn resolve_rolls_overflowing_day() {
        let md = MonthDay::new(2, 30).unwrap();
        assert_eq!(md.resolve(2024).unwrap().to_string(), "2024-03-01"); // leap
        assert_eq!(md.resolve(2025).unwrap().to_string(), "2025-03-02");
    }

    #[test]
    fn new_rejects_out_of_range() {
        assert!(MonthDay::new(0, 1).is_err());
        assert!(MonthDay::new(13, 1).is_err());
        assert!(MonthDay::new(6, 0).is_err());
        assert!(MonthDay::new(6, 32).is_err());
    }

    #[test]
    fn parse_md() {
        let md = MonthDay::from_str_md("06-01").unwrap();
        assert_eq!((md.month(), md.day()), (6, 1));
        assert!(MonthDay::from_str_md("6-1").is_err());
        assert!(MonthDay::from_str_md("99-99").is_err());
        assert!(MonthDay::from_str_md("soon").is_err());
    }
}
