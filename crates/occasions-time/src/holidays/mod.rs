//! Holiday calculators and the rule dispatch table.

use crate::date::Date;
use crate::month_day::MonthDay;
use crate::occasion::OccasionType;
use occasions_core::errors::Result;

/// Equinox/solstice approximation.
pub mod astronomy;

/// Gregorian Easter.
pub mod easter;

/// Fixed-date holiday table.
pub mod fixed;

/// Nth-weekday-of-month holidays.
pub mod floating;

/// Lunisolar holidays (tabulated with extrapolation).
pub mod lunar;

use astronomy::SolarEvent;

/// How an occasion's date is produced.
pub(crate) enum Rule {
    /// A fixed Gregorian month/day, recurring annually.
    Fixed(MonthDay),
    /// A per-year calculation (floating weekday, Easter, astronomical,
    /// lunisolar).
    Variable(fn(u16) -> Result<Date>),
    /// No deterministic date; the caller must ask the user.
    Unresolved,
}

/// Map an occasion to its resolution rule.
pub(crate) fn rule_for(kind: &OccasionType) -> Rule {
    use OccasionType::*;
    match kind {
        Thanksgiving => Rule::Variable(floating::thanksgiving),
        MothersDay => Rule::Variable(floating::mothers_day),
        FathersDay => Rule::Variable(floating::fathers_day),
        RecordStoreDay => Rule::Variable(floating::record_store_day),
        Easter => Rule::Variable(easter::easter),
        SpringEquinox => Rule::Variable(|y| astronomy::solar_event_date(SolarEvent::MarchEquinox, y)),
        AutumnEquinox => {
            Rule::Variable(|y| astronomy::solar_event_date(SolarEvent::SeptemberEquinox, y))
        }
        SummerSolstice => {
            Rule::Variable(|y| astronomy::solar_event_date(SolarEvent::JuneSolstice, y))
        }
        WinterSolstice => {
            Rule::Variable(|y| astronomy::solar_event_date(SolarEvent::DecemberSolstice, y))
        }
        Diwali => Rule::Variable(lunar::diwali),
        Holi => Rule::Variable(lunar::holi),
        Hanukkah => Rule::Variable(lunar::hanukkah),
        Other(_) => Rule::Unresolved,
        kind => match fixed::fixed_month_day(kind) {
            Some(md) => Rule::Fixed(md),
            None => Rule::Unresolved,
        },
    }
}
