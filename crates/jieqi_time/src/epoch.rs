//! Julian Day (UT) and Ephemeris Time value types.

use std::fmt::{Display, Formatter};

use crate::julian::{SECONDS_PER_DAY, calendar_to_jd};

/// A Julian Day on the UT axis (civil clock time).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct JulianDay(pub f64);

impl JulianDay {
    pub const fn new(jd: f64) -> Self {
        Self(jd)
    }

    /// Julian Day for a calendar date and UT time of day.
    pub fn from_calendar(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        let day_frac = day as f64
            + hour as f64 / 24.0
            + minute as f64 / 1440.0
            + second / SECONDS_PER_DAY;
        Self(calendar_to_jd(year, month, day_frac))
    }

    pub const fn value(self) -> f64 {
        self.0
    }

    /// This instant shifted by `days` (may be negative).
    pub fn add_days(self, days: f64) -> Self {
        Self(self.0 + days)
    }

    /// Days from `earlier` to `self`.
    pub fn days_since(self, earlier: JulianDay) -> f64 {
        self.0 - earlier.0
    }
}

impl Display for JulianDay {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "JD {:.6}", self.0)
    }
}

/// An instant expressed on both the UT and the ephemeris (TT) axes.
///
/// `jd_et = jd_ut + ΔT(jd_ut) / 86400`. The ΔT value is supplied by the
/// caller (normally the ephemeris provider) so that the pairing stays
/// consistent with whatever model produced the body positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EphemerisTime {
    jd_ut: JulianDay,
    jd_et: JulianDay,
}

impl EphemerisTime {
    /// Pair a UT instant with its ET counterpart using `delta_t_seconds`.
    pub fn from_ut(jd_ut: JulianDay, delta_t_seconds: f64) -> Self {
        Self {
            jd_ut,
            jd_et: jd_ut.add_days(delta_t_seconds / SECONDS_PER_DAY),
        }
    }

    pub fn jd_ut(&self) -> JulianDay {
        self.jd_ut
    }

    pub fn jd_et(&self) -> JulianDay {
        self.jd_et
    }

    /// ΔT = ET − UT in seconds.
    pub fn delta_t_seconds(&self) -> f64 {
        self.jd_et.days_since(self.jd_ut) * SECONDS_PER_DAY
    }
}
