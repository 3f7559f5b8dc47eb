//! Floating-weekday holidays ("Nth weekday of month" rules, US).

use crate::date::Date;
use crate::weekday::Weekday;
use occasions_core::errors::Result;

/// Thanksgiving — 4th Thursday of November.
pub fn thanksgiving(year: u16) -> Result<Date> {
    Date::nth_weekday(4, Weekday::Thursday, year, 11)
}

/// Mother's Day — 2nd Sunday of May.
pub fn mothers_day(year: u16) -> Result<Date> {
    Date::nth_weekday(2, Weekday::Sunday, year, 5)
}

/// Father's Day — 3rd Sunday of June.
pub fn fathers_day(year: u16) -> Result<Date> {
    Date::nth_weekday(3, Weekday::Sunday, year, 6)
}

/// Record Store Day — 3rd Saturday of April.
pub fn record_store_day(year: u16) -> Result<Date> {
    Date::nth_weekday(3, Weekday::Saturday, year, 4)
}
