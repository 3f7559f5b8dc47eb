//! Lunisolar holidays: Diwali, Holi, Hanukkah.
//!
//! These follow lunar/lunisolar calendars with no simple Gregorian rule,
//! so the engine keeps a table of observed dates for a maintained window
//! (currently 2024–2030) and falls back to a linear extrapolation outside
//! it: lunisolar dates drift about 11 days earlier per solar year, so the
//! nearest table edge is shifted by ±11 days per year of distance.  The
//! extrapolation is a rough approximation, not a calendrical computation;
//! the table is expected to be extended periodically instead.

use crate::date::Date;
use crate::month_day::MonthDay;
use occasions_core::errors::Result;

/// Approximate drift of a lunisolar date per solar year, in days.
const ANNUAL_DRIFT_DAYS: i32 = 11;

/// Observed dates, one entry per year of the maintained window.
/// Entries are (year, month, day) and must be consecutive by year.
type LunarTable = [(u16, u8, u8)];

/// Diwali (Lakshmi Puja day), 2024–2030.
const DIWALI: &LunarTable = &[
    (2024, 11, 1),
    (2025, 10, 20),
    (2026, 11, 8),
    (2027, 10, 29),
    (2028, 10, 17),
    (2029, 11, 5),
    (2030, 10, 26),
];

/// Holi, 2024–2030.
const HOLI: &LunarTable = &[
    (2024, 3, 25),
    (2025, 3, 14),
    (2026, 3, 4),
    (2027, 3, 22),
    (2028, 3, 11),
    (2029, 3, 1),
    (2030, 3, 20),
];

/// Hanukkah (first night), 2024–2030.
const HANUKKAH: &LunarTable = &[
    (2024, 12, 25),
    (2025, 12, 14),
    (2026, 12, 4),
    (2027, 12, 24),
    (2028, 12, 12),
    (2029, 12, 1),
    (2030, 12, 20),
];

/// Diwali in the given year (tabulated 2024–2030, extrapolated outside).
pub fn diwali(year: u16) -> Result<Date> {
    lunar_date(DIWALI, year)
}

/// Holi in the given year (tabulated 2024–2030, extrapolated outside).
pub fn holi(year: u16) -> Result<Date> {
    lunar_date(HOLI, year)
}

/// Hanukkah's first night in the given year (tabulated 2024–2030,
/// extrapolated outside).
pub fn hanukkah(year: u16) -> Result<Date> {
    lunar_date(HANUKKAH, year)
}

/// Table-first lookup with linear extrapolation beyond the window.
fn lunar_date(table: &LunarTable, year: u16) -> Result<Date> {
    let (first_year, ..) = table[0];
    let (last_year, ..) = table[table.len() - 1];

    if (first_year..=last_year).contains(&year) {
        let (y, m, d) = table[usize::from(year - first_year)];
        debug_assert_eq!(y, year, "lunar table entries must be consecutive");
        return Date::from_ymd(y, m, d);
    }

    // Outside the window: shift the nearest edge by the annual drift and
    // re-anchor the resulting month/day in the requested year.
    let (anchor, offset) = if year > last_year {
        let (y, m, d) = table[table.len() - 1];
        let gap = i32::from(year - y);
        (Date::from_ymd(y, m, d)?, -ANNUAL_DRIFT_DAYS * gap)
    } else {
        let (y, m, d) = table[0];
        let gap = i32::from(y - year);
        (Date::from_ymd(y, m, d)?, ANNUAL_DRIFT_DAYS * gap)
    };
    let shifted = anchor.add_days(offset)?;
    MonthDay::from_parts(shifted.month(), shifted.day_of_month()).resolve(year)
}
