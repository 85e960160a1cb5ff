//! Types for the 24 solar terms (节气).

use std::fmt::{Display, Formatter};

use jieqi_time::{EphemerisTime, UtcTime};

/// The 24 solar terms, ordered by apparent solar longitude from 0°.
///
/// Index 0 is the Spring Equinox; each following term is 15° further along
/// the ecliptic, so the winter terms from 小寒 onward fall in January–March
/// of a calendar year, before index 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SolarTerm {
    SpringEquinox,
    PureBrightness,
    GrainRain,
    StartOfSummer,
    GrainFull,
    GrainInEar,
    SummerSolstice,
    MinorHeat,
    MajorHeat,
    StartOfAutumn,
    EndOfHeat,
    WhiteDew,
    AutumnEquinox,
    ColdDew,
    FrostDescent,
    StartOfWinter,
    MinorSnow,
    MajorSnow,
    WinterSolstice,
    MinorCold,
    MajorCold,
    StartOfSpring,
    RainWater,
    AwakeningOfInsects,
}

/// All 24 terms in index (longitude) order.
pub const ALL_SOLAR_TERMS: [SolarTerm; 24] = [
    SolarTerm::SpringEquinox,
    SolarTerm::PureBrightness,
    SolarTerm::GrainRain,
    SolarTerm::StartOfSummer,
    SolarTerm::GrainFull,
    SolarTerm::GrainInEar,
    SolarTerm::SummerSolstice,
    SolarTerm::MinorHeat,
    SolarTerm::MajorHeat,
    SolarTerm::StartOfAutumn,
    SolarTerm::EndOfHeat,
    SolarTerm::WhiteDew,
    SolarTerm::AutumnEquinox,
    SolarTerm::ColdDew,
    SolarTerm::FrostDescent,
    SolarTerm::StartOfWinter,
    SolarTerm::MinorSnow,
    SolarTerm::MajorSnow,
    SolarTerm::WinterSolstice,
    SolarTerm::MinorCold,
    SolarTerm::MajorCold,
    SolarTerm::StartOfSpring,
    SolarTerm::RainWater,
    SolarTerm::AwakeningOfInsects,
];

impl SolarTerm {
    /// 0-based position in [`ALL_SOLAR_TERMS`].
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        if index < ALL_SOLAR_TERMS.len() {
            Some(ALL_SOLAR_TERMS[index])
        } else {
            None
        }
    }

    /// Apparent solar longitude that starts this term, degrees.
    pub const fn longitude_deg(self) -> f64 {
        15.0 * self.index() as f64
    }

    pub fn longitude_rad(self) -> f64 {
        self.longitude_deg().to_radians()
    }

    /// Chinese name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::SpringEquinox => "春分",
            Self::PureBrightness => "清明",
            Self::GrainRain => "谷雨",
            Self::StartOfSummer => "立夏",
            Self::GrainFull => "小满",
            Self::GrainInEar => "芒种",
            Self::SummerSolstice => "夏至",
            Self::MinorHeat => "小暑",
            Self::MajorHeat => "大暑",
            Self::StartOfAutumn => "立秋",
            Self::EndOfHeat => "处暑",
            Self::WhiteDew => "白露",
            Self::AutumnEquinox => "秋分",
            Self::ColdDew => "寒露",
            Self::FrostDescent => "霜降",
            Self::StartOfWinter => "立冬",
            Self::MinorSnow => "小雪",
            Self::MajorSnow => "大雪",
            Self::WinterSolstice => "冬至",
            Self::MinorCold => "小寒",
            Self::MajorCold => "大寒",
            Self::StartOfSpring => "立春",
            Self::RainWater => "雨水",
            Self::AwakeningOfInsects => "惊蛰",
        }
    }

    pub const fn english_name(self) -> &'static str {
        match self {
            Self::SpringEquinox => "Spring Equinox",
            Self::PureBrightness => "Pure Brightness",
            Self::GrainRain => "Grain Rain",
            Self::StartOfSummer => "Start of Summer",
            Self::GrainFull => "Grain Full",
            Self::GrainInEar => "Grain in Ear",
            Self::SummerSolstice => "Summer Solstice",
            Self::MinorHeat => "Minor Heat",
            Self::MajorHeat => "Major Heat",
            Self::StartOfAutumn => "Start of Autumn",
            Self::EndOfHeat => "End of Heat",
            Self::WhiteDew => "White Dew",
            Self::AutumnEquinox => "Autumn Equinox",
            Self::ColdDew => "Cold Dew",
            Self::FrostDescent => "Frost's Descent",
            Self::StartOfWinter => "Start of Winter",
            Self::MinorSnow => "Minor Snow",
            Self::MajorSnow => "Major Snow",
            Self::WinterSolstice => "Winter Solstice",
            Self::MinorCold => "Minor Cold",
            Self::MajorCold => "Major Cold",
            Self::StartOfSpring => "Start of Spring",
            Self::RainWater => "Rain Water",
            Self::AwakeningOfInsects => "Awakening of Insects",
        }
    }

    /// Term starting 15° further along the ecliptic.
    pub const fn next(self) -> Self {
        ALL_SOLAR_TERMS[(self.index() + 1) % 24]
    }
}

impl Display for SolarTerm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One solar term and the instant the Sun reaches its longitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarTermEvent {
    pub term: SolarTerm,
    pub instant: EphemerisTime,
}

impl SolarTermEvent {
    /// UT calendar time of the event.
    pub fn utc(&self) -> UtcTime {
        UtcTime::from_julian_day(self.instant.jd_ut())
    }
}

/// The 24 solar-term instants found from one calendar year's reference.
#[derive(Debug, Clone, PartialEq)]
pub struct SolarTerms {
    year: i32,
    events: [SolarTermEvent; 24],
}

impl SolarTerms {
    pub(crate) fn new(year: i32, events: [SolarTermEvent; 24]) -> Self {
        Self { year, events }
    }

    /// Year whose 1 January anchored the search.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Events in index (longitude) order.
    pub fn events(&self) -> &[SolarTermEvent; 24] {
        &self.events
    }

    pub fn get(&self, term: SolarTerm) -> &SolarTermEvent {
        &self.events[term.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &SolarTermEvent> {
        self.events.iter()
    }

    /// Events sorted by instant.
    pub fn chronological(&self) -> Vec<SolarTermEvent> {
        let mut sorted = self.events.to_vec();
        sorted.sort_by(|a, b| {
            a.instant
                .jd_ut()
                .value()
                .total_cmp(&b.instant.jd_ut().value())
        });
        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_roundtrip() {
        for (i, term) in ALL_SOLAR_TERMS.iter().enumerate() {
            assert_eq!(term.index(), i);
            assert_eq!(SolarTerm::from_index(i), Some(*term));
        }
        assert_eq!(SolarTerm::from_index(24), None);
    }

    #[test]
    fn longitudes_are_fifteen_degrees_apart() {
        assert_eq!(SolarTerm::SpringEquinox.longitude_deg(), 0.0);
        assert_eq!(SolarTerm::SummerSolstice.longitude_deg(), 90.0);
        assert_eq!(SolarTerm::AutumnEquinox.longitude_deg(), 180.0);
        assert_eq!(SolarTerm::WinterSolstice.longitude_deg(), 270.0);
        assert_eq!(SolarTerm::AwakeningOfInsects.longitude_deg(), 345.0);
    }

    #[test]
    fn names() {
        assert_eq!(SolarTerm::SpringEquinox.name(), "春分");
        assert_eq!(SolarTerm::StartOfSpring.name(), "立春");
        assert_eq!(SolarTerm::AwakeningOfInsects.name(), "惊蛰");
        assert_eq!(SolarTerm::WinterSolstice.english_name(), "Winter Solstice");
        assert_eq!(SolarTerm::GrainRain.to_string(), "谷雨");
    }

    #[test]
    fn next_wraps() {
        assert_eq!(SolarTerm::AwakeningOfInsects.next(), SolarTerm::SpringEquinox);
        assert_eq!(SolarTerm::SpringEquinox.next(), SolarTerm::PureBrightness);
    }
}
