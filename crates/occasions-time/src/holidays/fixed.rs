//! Fixed-date holiday table.
//!
//! Holidays whose Gregorian month/day does not vary by year.  The table
//! is US-locale, matching the rest of the engine.

use crate::month_day::MonthDay;
use crate::occasion::OccasionType;

/// Look up the fixed month/day for an occasion.
///
/// Returns `None` for occasions without a fixed Gregorian date, so the
/// resolver can fall through to the variable-date calculators.
pub fn fixed_month_day(kind: &OccasionType) -> Option<MonthDay> {
    use OccasionType::*;
    let (month, day) = match kind {
        NewYearsDay => (1, 1),
        GroundhogDay => (2, 2),
        ValentinesDay => (2, 14),
        StPatricksDay => (3, 17),
        AprilFoolsDay => (4, 1),
        EarthDay => (4, 22),
        CincoDeMayo => (5, 5),
        Juneteenth => (6, 19),
        IndependenceDay => (7, 4),
        Halloween => (10, 31),
        VeteransDay => (11, 11),
        ChristmasEve => (12, 24),
        Christmas => (12, 25),
        Kwanzaa => (12, 26),
        NewYearsEve => (12, 31),
        _ => return None,
    };
    Some(MonthDay::from_parts(month, day))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_entries() {
        let md = fixed_month_day(&OccasionType::Christmas).unwrap();
        assert_eq!((md.month(), md.day()), (12, 25));
        let md = fixed_month_day(&OccasionType::Juneteenth).unwrap();
        assert_eq!((md.month(), md.day()), (6, 19));
    }

    #[test]
    fn variable_and_unknown_miss() {
        assert_eq!(fixed_month_day(&OccasionType::Easter), None);
        assert_eq!(fixed_month_day(&OccasionType::Diwali), None);
        assert_eq!(
            fixed_month_day(&OccasionType::Other("anniversary".into())),
            None
        );
    }
}
