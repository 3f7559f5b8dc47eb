//! `OccasionType` — the tagged set of occasions the engine can resolve.
//!
//! Occasion labels arrive as free text (user input, or candidates produced
//! by the AI extraction service), so parsing is total: every string maps
//! to a variant, with [`OccasionType::Other`] absorbing anything
//! unrecognised.  `Other` is the designed "no deterministic date — ask the
//! user" outcome, not an error.

use crate::date::Date;

/// A recognised occasion, or free text (`Other`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OccasionType {
    // ── Fixed Gregorian dates ────────────────────────────────────────────
    /// New Year's Day (January 1).
    NewYearsDay,
    /// Groundhog Day (February 2).
    GroundhogDay,
    /// Valentine's Day (February 14).
    ValentinesDay,
    /// St. Patrick's Day (March 17).
    StPatricksDay,
    /// April Fools' Day (April 1).
    AprilFoolsDay,
    /// Earth Day (April 22).
    EarthDay,
    /// Cinco de Mayo (May 5).
    CincoDeMayo,
    /// Juneteenth (June 19).
    Juneteenth,
    /// Independence Day (July 4).
    IndependenceDay,
    /// Halloween (October 31).
    Halloween,
    /// Veterans Day (November 11).
    VeteransDay,
    /// Christmas Eve (December 24).
    ChristmasEve,
    /// Christmas (December 25).
    Christmas,
    /// Kwanzaa, start date (December 26).
    Kwanzaa,
    /// New Year's Eve (December 31).
    NewYearsEve,

    // ── Floating weekday rules (US) ──────────────────────────────────────
    /// Thanksgiving — 4th Thursday of November.
    Thanksgiving,
    /// Mother's Day — 2nd Sunday of May.
    MothersDay,
    /// Father's Day — 3rd Sunday of June.
    FathersDay,
    /// Record Store Day — 3rd Saturday of April.
    RecordStoreDay,

    // ── Ecclesiastical ───────────────────────────────────────────────────
    /// Easter Sunday (Gregorian).
    Easter,

    // ── Astronomical ─────────────────────────────────────────────────────
    /// March equinox.
    SpringEquinox,
    /// September equinox.
    AutumnEquinox,
    /// June solstice.
    SummerSolstice,
    /// December solstice.
    WinterSolstice,

    // ── Lunisolar (tabulated + extrapolated) ─────────────────────────────
    /// Diwali (Lakshmi Puja day).
    Diwali,
    /// Holi.
    Holi,
    /// Hanukkah, first night.
    Hanukkah,

    /// Unrecognised / user-specific occasion (normalized label retained).
    Other(String),
}

impl OccasionType {
    /// Parse a free-text label.
    ///
    /// The label is normalized first (see [`normalize`]); anything that is
    /// not a recognised key becomes `Other` carrying the normalized form.
    /// Common aliases (`chanukah`, `mothersday`, `vernal_equinox`, …) fold
    /// into their canonical variants.
    pub fn parse(raw: &str) -> Self {
        use OccasionType::*;
        let key = normalize(raw);
        match key.as_str() {
            "new_years_day" | "new_years" => NewYearsDay,
            "groundhog_day" => GroundhogDay,
            "valentines_day" | "valentine_day" => ValentinesDay,
            "st_patricks_day" | "saint_patricks_day" => StPatricksDay,
            "april_fools_day" | "april_fools" => AprilFoolsDay,
            "earth_day" => EarthDay,
            "cinco_de_mayo" => CincoDeMayo,
            "juneteenth" => Juneteenth,
            "independence_day" | "fourth_of_july" | "4th_of_july" => IndependenceDay,
            "halloween" => Halloween,
            "veterans_day" => VeteransDay,
            "christmas_eve" => ChristmasEve,
            "christmas" | "christmas_day" | "xmas" => Christmas,
            "kwanzaa" => Kwanzaa,
            "new_years_eve" => NewYearsEve,
            "thanksgiving" | "thanksgiving_day" => Thanksgiving,
            "mothers_day" | "mothersday" => MothersDay,
            "fathers_day" | "fathersday" => FathersDay,
            "record_store_day" => RecordStoreDay,
            "easter" | "easter_sunday" => Easter,
            "spring_equinox" | "vernal_equinox" => SpringEquinox,
            "autumn_equinox" | "fall_equinox" => AutumnEquinox,
            "summer_solstice" => SummerSolstice,
            "winter_solstice" => WinterSolstice,
            "diwali" | "deepavali" => Diwali,
            "holi" => Holi,
            "hanukkah" | "chanukah" => Hanukkah,
            _ => Other(key),
        }
    }

    /// The canonical normalized key for this occasion.
    pub fn key(&self) -> &str {
        use OccasionType::*;
        match self {
            NewYearsDay => "new_years_day",
            GroundhogDay => "groundhog_day",
            ValentinesDay => "valentines_day",
            StPatricksDay => "st_patricks_day",
            AprilFoolsDay => "april_fools_day",
            EarthDay => "earth_day",
            CincoDeMayo => "cinco_de_mayo",
            Juneteenth => "juneteenth",
            IndependenceDay => "independence_day",
            Halloween => "halloween",
            VeteransDay => "veterans_day",
            ChristmasEve => "christmas_eve",
            Christmas => "christmas",
            Kwanzaa => "kwanzaa",
            NewYearsEve => "new_years_eve",
            Thanksgiving => "thanksgiving",
            MothersDay => "mothers_day",
            FathersDay => "fathers_day",
            RecordStoreDay => "record_store_day",
            Easter => "easter",
            SpringEquinox => "spring_equinox",
            AutumnEquinox => "autumn_equinox",
            SummerSolstice => "summer_solstice",
            WinterSolstice => "winter_solstice",
            Diwali => "diwali",
            Holi => "holi",
            Hanukkah => "hanukkah",
            Other(key) => key,
        }
    }
}

impl std::fmt::Display for OccasionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for OccasionType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for OccasionType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s: String = serde::Deserialize::deserialize(deserializer)?;
        Ok(OccasionType::parse(&s))
    }
}

/// Normalize an occasion label: lowercase, trim, strip apostrophes
/// (both `'` and `’`) and periods, collapse whitespace runs to a single
/// underscore.
///
/// `"Valentine's Day"` → `"valentines_day"`,
/// `"St. Patrick's Day"` → `"st_patricks_day"`.
pub fn normalize(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut in_gap = false;
    for c in lowered.chars() {
        if c == '\'' || c == '\u{2019}' || c == '.' {
            continue;
        }
        if c.is_whitespace() {
            in_gap = true;
            continue;
        }
        if in_gap && !out.is_empty() {
            out.push('_');
        }
        in_gap = false;
        out.push(c);
    }
    out
}

/// An occasion record as exchanged with the calling application.
///
/// The engine only ever fills in or corrects the `date` field; recipient
/// linkage and enabled/disabled flags live in the application layer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Occasion {
    /// The resolved concrete date.
    pub date: Date,
    /// The occasion this date was resolved for.
    pub occasion_type: OccasionType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_case_space_apostrophe() {
        assert_eq!(normalize("Valentine's Day"), "valentines_day");
        assert_eq!(normalize("  CHRISTMAS  "), "christmas");
        assert_eq!(normalize("St. Patrick’s   Day"), "st_patricks_day");
        assert_eq!(normalize("record store day"), "record_store_day");
    }

    #[test]
    fn parse_canonical_and_aliases() {
        assert_eq!(OccasionType::parse("Christmas"), OccasionType::Christmas);
        assert_eq!(OccasionType::parse("xmas"), OccasionType::Christmas);
        assert_eq!(OccasionType::parse("Chanukah"), OccasionType::Hanukkah);
        assert_eq!(OccasionType::parse("mothersday"), OccasionType::MothersDay);
        assert_eq!(
            OccasionType::parse("Vernal Equinox"),
            OccasionType::SpringEquinox
        );
    }

    #[test]
    fn parse_free_text_to_other() {
        assert_eq!(
            OccasionType::parse("Moms first day at new job"),
            OccasionType::Other("moms_first_day_at_new_job".into())
        );
    }

    #[test]
    fn occasion_record_carries_resolved_date() {
        let kind = OccasionType::Thanksgiving;
        let today = Date::from_ymd(2025, 6, 15).unwrap();
        let occasion = Occasion {
            date: crate::resolver::resolve_as_of(&kind, Some(2024), today).unwrap(),
            occasion_type: kind,
        };
        assert_eq!(occasion.date.to_string(), "2024-11-28");
        assert_eq!(occasion.occasion_type.key(), "thanksgiving");
    }

    #[test]
    fn parse_is_idempotent_through_key() {
        for raw in ["Valentine's Day", "THANKSGIVING", "weird  custom thing"] {
            let once = OccasionType::parse(raw);
            let twice = OccasionType::parse(once.key());
            assert_eq!(once, twice);
        }
    }
}
