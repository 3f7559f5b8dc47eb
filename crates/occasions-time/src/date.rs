//! `Date` — a calendar date as a serial number of days.
//!
//! Serial 1 = January 1, 1900; the valid range runs through
//! December 31, 2199.  Dates are time-zone-naive: a `Date` stands for
//! local wall-clock midnight of that day.
//!
//! The serial ↔ year/month/day conversion uses the standard civil-days
//! algorithm rebased onto the 1900 epoch.

use crate::weekday::Weekday;
use chrono::Datelike;
use occasions_core::errors::{Error, Result};
use occasions_core::{fail, Settings};

/// A calendar date represented as a serial number (serial 1 = 1900-01-01).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

impl Date {
    /// Minimum valid date: January 1, 1900.
    pub const MIN: Date = Date(1);

    /// Maximum valid date: December 31, 2199.
    pub const MAX: Date = Date(109_573);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number.
    ///
    /// Returns an error if `serial` is not positive or exceeds the maximum.
    pub fn from_serial(serial: i32) -> Result<Self> {
        if serial <= 0 {
            fail!("serial number must be positive");
        }
        let d = Date(serial);
        if d > Self::MAX {
            fail!("serial {serial} exceeds maximum date");
        }
        Ok(d)
    }

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(1900..=2199).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [1900, 2199]"
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    /// Parse a strict ISO-8601 calendar date (`YYYY-MM-DD`).
    pub fn from_iso(s: &str) -> Result<Self> {
        let b = s.as_bytes();
        let well_formed = b.len() == 10
            && b[4] == b'-'
            && b[7] == b'-'
            && b.iter()
                .enumerate()
                .all(|(i, c)| i == 4 || i == 7 || c.is_ascii_digit());
        if !well_formed {
            return Err(Error::Date(format!("'{s}' is not a YYYY-MM-DD date")));
        }
        let year: u16 = s[0..4].parse().expect("four ASCII digits");
        let month: u8 = s[5..7].parse().expect("two ASCII digits");
        let day: u8 = s[8..10].parse().expect("two ASCII digits");
        Self::from_ymd(year, month, day)
    }

    /// Return "today" for roll-forward purposes.
    ///
    /// Uses the evaluation date pinned in [`Settings`] when one is set,
    /// otherwise the local wall-clock date via chrono.  Read fresh on every
    /// call; never cached.
    pub fn today() -> Self {
        if let Some(serial) = Settings::instance().evaluation_date_serial() {
            return Date::from_serial(serial).expect("pinned evaluation date out of range");
        }
        let now = chrono::Local::now().date_naive();
        Date::from_ymd(now.year() as u16, now.month() as u8, now.day() as u8)
            .expect("wall-clock date outside supported range")
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return the year (1900–2199).
    pub fn year(&self) -> u16 {
        ymd_from_serial(self.0).0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        ymd_from_serial(self.0).1
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return the day of the year (1–366).
    pub fn day_of_year(&self) -> u16 {
        let (y, m, d) = ymd_from_serial(self.0);
        let mut doy = u16::from(d);
        for mon in 1..m {
            doy += u16::from(days_in_month(y, mon));
        }
        doy
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // Serial 1 (1900-01-01) is a Monday.
        let w = ((self.0 - 1).rem_euclid(7) + 1) as u8;
        Weekday::from_ordinal(w).expect("rem_euclid always in 1..=7")
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.  Returns an error if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        let serial = self.0 + n;
        if serial <= 0 || Date(serial) > Self::MAX {
            fail!("date arithmetic: result {serial} out of range");
        }
        Ok(Date(serial))
    }

    /// Return the *n*-th occurrence of `weekday` in the month of
    /// `year`/`month` — the floating-holiday primitive (e.g. the 4th
    /// Thursday of November).
    ///
    /// # Errors
    /// Returns an error if `n` is zero, larger than the number of such
    /// weekdays in the month, or the result is out of range.
    pub fn nth_weekday(n: u8, weekday: Weekday, year: u16, month: u8) -> Result<Self> {
        if n == 0 {
            return Err(Error::Date("nth_weekday: n must be >= 1".into()));
        }
        let first = Date::from_ymd(year, month, 1)?;
        let first_wd = first.weekday().ordinal();
        let target_wd = weekday.ordinal();
        // Days from the 1st to the first occurrence of the target weekday
        let skip = ((target_wd as i32 - first_wd as i32).rem_euclid(7)) as u8;
        let day = 1 + skip + 7 * (n - 1);
        if day > days_in_month(year, month) {
            return Err(Error::Date(format!(
                "nth_weekday: {n}-th {weekday} does not exist in {year}-{month:02}"
            )));
        }
        Date::from_ymd(year, month, day)
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs).expect("date addition overflow")
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs).expect("date subtraction underflow")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    /// ISO-8601 `YYYY-MM-DD` — the engine's wire format.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({self})")
    }
}

// ── Serde (optional) ──────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl serde::Serialize for Date {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s: String = serde::Deserialize::deserialize(deserializer)?;
        Date::from_iso(&s).map_err(serde::de::Error::custom)
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => unreachable!(),
    }
}

/// Days from the 1970-01-01 epoch to serial 1 (1900-01-01) is -25567,
/// so serial = days-from-unix + 25568.
const UNIX_EPOCH_SERIAL: i64 = 25_568;

/// Convert (year, month, day) to a serial number via the civil-days
/// algorithm (months rebased so March = 0, pushing the leap day to the
/// end of the shifted year).
fn serial_from_ymd(year: u16, month: u8, day: u8) -> i32 {
    let y = i64::from(year) - i64::from(month <= 2);
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let mp = (i64::from(month) + 9) % 12;
    let doy = (153 * mp + 2) / 5 + i64::from(day) - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    let days_from_unix = era * 146_097 + doe - 719_468;
    (days_from_unix + UNIX_EPOCH_SERIAL) as i32
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: i32) -> (u16, u8, u8) {
    let z = i64::from(serial) - UNIX_EPOCH_SERIAL + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let y = if m <= 2 { y + 1 } else { y };
    (y as u16, m as u8, d as u8)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch() {
        let d = Date::from_ymd(1900, 1, 1).unwrap();
        assert_eq!(d.serial(), 1);
        assert_eq!(d, Date::MIN);
    }

    #[test]
    fn test_max() {
        let d = Date::from_ymd(2199, 12, 31).unwrap();
        assert_eq!(d, Date::MAX);
    }

    #[test]
    fn test_roundtrip() {
        let dates = [
            (1900, 1, 1),
            (1900, 12, 31),
            (2000, 2, 29), // leap
            (2100, 2, 28), // non-leap century
            (1970, 1, 1),
            (2025, 6, 15),
            (2199, 12, 31),
        ];
        for (y, m, d) in dates {
            let date = Date::from_ymd(y, m, d).unwrap();
            assert_eq!(date.year(), y, "year mismatch for {y}-{m:02}-{d:02}");
            assert_eq!(date.month(), m, "month mismatch for {y}-{m:02}-{d:02}");
            assert_eq!(date.day_of_month(), d, "day mismatch for {y}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn test_day_of_year() {
        assert_eq!(Date::from_ymd(2025, 1, 1).unwrap().day_of_year(), 1);
        assert_eq!(Date::from_ymd(2024, 3, 1).unwrap().day_of_year(), 61); // leap
        assert_eq!(Date::from_ymd(2025, 3, 1).unwrap().day_of_year(), 60);
        assert_eq!(Date::from_ymd(2024, 12, 31).unwrap().day_of_year(), 366);
        assert_eq!(Date::from_ymd(2025, 12, 31).unwrap().day_of_year(), 365);
    }

    #[test]
    fn test_from_serial_bounds() {
        assert!(Date::from_serial(0).is_err());
        assert!(Date::from_serial(-5).is_err());
        assert!(Date::from_serial(Date::MAX.serial() + 1).is_err());
        assert_eq!(Date::from_serial(1).unwrap(), Date::MIN);
    }

    #[test]
    fn unix_epoch_serial() {
        assert_eq!(Date::from_ymd(1970, 1, 1).unwrap().serial(), 25_568);
    }

    #[test]
    fn test_weekday() {
        // 1900-01-01 is a Monday
        assert_eq!(Date::MIN.weekday(), Weekday::Monday);
        // 2024-01-01 is a Monday, 2024-01-06 a Saturday
        assert_eq!(Date::from_ymd(2024, 1, 1).unwrap().weekday(), Weekday::Monday);
        assert_eq!(
            Date::from_ymd(2024, 1, 6).unwrap().weekday(),
            Weekday::Saturday
        );
    }

    #[test]
    fn test_iso_parse_and_display() {
        let d = Date::from_iso("2025-12-25").unwrap();
        assert_eq!(d, Date::from_ymd(2025, 12, 25).unwrap());
        assert_eq!(d.to_string(), "2025-12-25");

        assert!(Date::from_iso("2025-13-01").is_err());
        assert!(Date::from_iso("2025-02-30").is_err());
        assert!(Date::from_iso("12-25").is_err());
        assert!(Date::from_iso("someday").is_err());
    }

    #[test]
    fn test_arithmetic() {
        let d = Date::from_ymd(2023, 12, 31).unwrap();
        assert_eq!(d + 1, Date::from_ymd(2024, 1, 1).unwrap());
        assert_eq!(d - 30, Date::from_ymd(2023, 12, 1).unwrap());
        assert_eq!(Date::from_ymd(2024, 1, 31).unwrap() - d, 31);
    }

    #[test]
    fn test_nth_weekday() {
        // 4th Thursday of November 2024 = November 28
        let d = Date::nth_weekday(4, Weekday::Thursday, 2024, 11).unwrap();
        assert_eq!(d, Date::from_ymd(2024, 11, 28).unwrap());

        // 2nd Sunday of May 2025 = May 11
        let d2 = Date::nth_weekday(2, Weekday::Sunday, 2025, 5).unwrap();
        assert_eq!(d2, Date::from_ymd(2025, 5, 11).unwrap());

        // 1st Monday of January 2024 = January 1
        let d3 = Date::nth_weekday(1, Weekday::Monday, 2024, 1).unwrap();
        assert_eq!(d3, Date::from_ymd(2024, 1, 1).unwrap());
    }

    #[test]
    fn test_nth_weekday_out_of_range() {
        // There is no 5th Wednesday in February 2024
        assert!(Date::nth_weekday(5, Weekday::Wednesday, 2024, 2).is_err());
        assert!(Date::nth_weekday(0, Weekday::Monday, 2024, 1).is_err());
    }

    #[test]
    fn leap_years() {
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2100));
    }
}
