//! The unified resolver — the one entry point external collaborators use.

use crate::date::Date;
use crate::holidays::{rule_for, Rule};
use crate::occasion::OccasionType;
use crate::roll::{next_from_month_day, roll_forward};

/// Resolve an occasion label to its next concrete date.
///
/// Returns the ISO-8601 `YYYY-MM-DD` of the nearest occurrence that is
/// today or later, or `None` when the occasion has no deterministic date
/// (free text, user-specific events) — callers treat `None` as "prompt
/// the user for a date".
///
/// An explicit `year` pins the computation to that year's occurrence and
/// bypasses the roll-forward check.  Never returns an error for any
/// string input.
///
/// The `Date` domain spans 1900–2199; pinning a year outside that range
/// resolves to `None` like an unrecognised occasion does.
///
/// ```
/// use occasions_time::resolve_occasion_date;
///
/// assert_eq!(
///     resolve_occasion_date("Thanksgiving", Some(2024)),
///     Some("2024-11-28".to_string())
/// );
/// assert_eq!(resolve_occasion_date("moms first day at new job", None), None);
/// ```
pub fn resolve_occasion_date(occasion_type: &str, year: Option<u16>) -> Option<String> {
    // "Today" is captured exactly once per resolution.
    let today = Date::today();
    resolve_as_of(&OccasionType::parse(occasion_type), year, today).map(|d| d.to_string())
}

/// Typed, clock-free resolution core.
///
/// `today` is supplied by the caller, so one logical batch of resolutions
/// can share a single consistent reference date.
pub fn resolve_as_of(kind: &OccasionType, year: Option<u16>, today: Date) -> Option<Date> {
    match rule_for(kind) {
        Rule::Fixed(md) => match year {
            Some(y) => md.resolve(y).ok(),
            None => next_from_month_day(md, today).ok(),
        },
        Rule::Variable(compute) => match year {
            Some(y) => compute(y).ok(),
            None => roll_forward(today, compute).ok(),
        },
        Rule::Unresolved => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn fixed_holiday_rolls_forward() {
        let kind = OccasionType::parse("christmas");
        let before = resolve_as_of(&kind, None, date(2025, 6, 15)).unwrap();
        assert_eq!(before, date(2025, 12, 25));
        let after = resolve_as_of(&kind, None, date(2025, 12, 26)).unwrap();
        assert_eq!(after, date(2026, 12, 25));
    }

    #[test]
    fn pinned_year_bypasses_roll() {
        let kind = OccasionType::parse("christmas");
        // 2020 is long past, but an explicit year is honoured as-is.
        let d = resolve_as_of(&kind, Some(2020), date(2025, 6, 15)).unwrap();
        assert_eq!(d, date(2020, 12, 25));
    }

    #[test]
    fn variable_holiday_rolls_forward() {
        let kind = OccasionType::parse("thanksgiving");
        // Thanksgiving 2025 = Nov 27; from Nov 28 it rolls to 2026.
        let d = resolve_as_of(&kind, None, date(2025, 11, 28)).unwrap();
        assert_eq!(d, date(2026, 11, 26));
    }

    #[test]
    fn pinned_year_outside_date_domain_is_none() {
        let today = date(2025, 6, 15);
        for kind in [
            OccasionType::Christmas,
            OccasionType::Thanksgiving,
            OccasionType::Easter,
            OccasionType::Diwali,
        ] {
            assert_eq!(resolve_as_of(&kind, Some(1776), today), None, "{kind}");
            assert_eq!(resolve_as_of(&kind, Some(2500), today), None, "{kind}");
        }
    }

    #[test]
    fn unknown_is_none_not_error() {
        let kind = OccasionType::parse("moms_first_day_at_new_job");
        assert_eq!(resolve_as_of(&kind, None, date(2025, 6, 15)), None);
        assert_eq!(resolve_as_of(&kind, Some(2025), date(2025, 6, 15)), None);
    }
}
