//! Gregorian Easter Sunday.
//!
//! Anonymous Gregorian algorithm ("Meeus/Jones/Butcher").  Accurate for
//! 1900–2099; years outside that range are not rejected, matching the
//! permissiveness of the original engine, but results there are
//! unverified.

use crate::date::Date;
use occasions_core::errors::Result;

/// Easter Sunday of the given year.
pub fn easter(year: u16) -> Result<Date> {
    let y = i32::from(year);
    let a = y % 19;
    let b = y / 100;
    let c = y % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    Date::from_ymd(year, month as u8, day as u8)
}
