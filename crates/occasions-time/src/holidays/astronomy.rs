//! Equinox and solstice approximation.
//!
//! Truncated Meeus polynomial fits for the mean equinox/solstice instant
//! (Julian Ephemeris Day) as a function of `Y = (year − 2000) / 1000`,
//! good to within about a day for roughly 1951–2050.  The periodic
//! correction terms are intentionally omitted: this engine needs the
//! calendar day, not the instant, and an occasional one-day error is
//! acceptable for reminders.

use crate::date::Date;
use occasions_core::errors::Result;

/// JD 2440587.5 = 1970-01-01T00:00Z, the standard Julian-day anchor for
/// the Unix epoch.
const JD_UNIX_EPOCH: f64 = 2_440_587.5;

/// The four solar events of the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolarEvent {
    /// March equinox (northern spring).
    MarchEquinox,
    /// June solstice (northern summer).
    JuneSolstice,
    /// September equinox (northern autumn).
    SeptemberEquinox,
    /// December solstice (northern winter).
    DecemberSolstice,
}

/// Approximate calendar date of a solar event in the given year.
pub fn solar_event_date(event: SolarEvent, year: u16) -> Result<Date> {
    let y = (f64::from(year) - 2000.0) / 1000.0;
    let jde = match event {
        SolarEvent::MarchEquinox => {
            2_451_623.809_84 + 365_242.374_04 * y + 0.051_69 * y * y
                - 0.004_11 * y.powi(3)
                - 0.000_57 * y.powi(4)
        }
        SolarEvent::JuneSolstice => {
            2_451_716.567_67 + 365_241.626_03 * y + 0.003_25 * y * y + 0.008_88 * y.powi(3)
                - 0.000_30 * y.powi(4)
        }
        SolarEvent::SeptemberEquinox => {
            2_451_810.217_15 + 365_242.017_67 * y - 0.115_75 * y * y
                + 0.003_37 * y.powi(3)
                + 0.000_78 * y.powi(4)
        }
        SolarEvent::DecemberSolstice => {
            2_451_900.059_52 + 365_242.740_49 * y - 0.062_23 * y * y - 0.008_23 * y.powi(3)
                + 0.000_32 * y.powi(4)
        }
    };
    // Whole days since the Unix epoch; the fractional time of day is
    // discarded, as the engine is date-only.
    let days = (jde - JD_UNIX_EPOCH).floor() as i32;
    let unix_epoch = Date::from_ymd(1970, 1, 1)?;
    unix_epoch.add_days(days)
}
