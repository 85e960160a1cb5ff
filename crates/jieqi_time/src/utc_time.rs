//! UT calendar date/time with sub-second precision.
//!
//! Provides `UtcTime`, the calendar form used for input parsing and for
//! displaying computed instants. Conversion to and from [`JulianDay`] is
//! direct: civil UTC and UT are treated as the same clock.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::epoch::JulianDay;
use crate::error::TimeError;
use crate::julian::{SECONDS_PER_DAY, jd_to_calendar};

const MS_PER_DAY: f64 = SECONDS_PER_DAY * 1000.0;

/// Days in `month` of `year`, proleptic Julian before 1582 and Gregorian after.
fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 => {
            let leap = if year < 1583 {
                year.rem_euclid(4) == 0
            } else {
                (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
            };
            if leap { 29 } else { 28 }
        }
        _ => 31,
    }
}

/// Calendar date and time of day on the UT axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtcTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl UtcTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Check that every field is within its calendar range.
    pub fn validate(&self) -> Result<(), TimeError> {
        if !(1..=12).contains(&self.month) {
            return Err(TimeError::InvalidDate("month must be in 1..=12"));
        }
        if self.day == 0 || self.day > days_in_month(self.year, self.month) {
            return Err(TimeError::InvalidDate("day is outside the month"));
        }
        if self.hour > 23 {
            return Err(TimeError::InvalidDate("hour must be in 0..=23"));
        }
        if self.minute > 59 {
            return Err(TimeError::InvalidDate("minute must be in 0..=59"));
        }
        if !(0.0..61.0).contains(&self.second) {
            return Err(TimeError::InvalidDate("second must be in [0, 61)"));
        }
        Ok(())
    }

    /// Julian Day (UT) of this calendar instant.
    pub fn to_julian_day(&self) -> JulianDay {
        JulianDay::from_calendar(
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
        )
    }

    /// Calendar form of a Julian Day (UT), rounded to the millisecond.
    pub fn from_julian_day(jd: JulianDay) -> Self {
        let total_ms = ((jd.value() + 0.5) * MS_PER_DAY).round();
        let day_number = (total_ms / MS_PER_DAY).floor();
        let ms_of_day = (total_ms - day_number * MS_PER_DAY) as u64;

        // Midnight of `day_number` has no fractional part left to carry.
        let (year, month, day_frac) = jd_to_calendar(day_number - 0.5);

        Self {
            year,
            month,
            day: day_frac.round() as u32,
            hour: (ms_of_day / 3_600_000) as u32,
            minute: ((ms_of_day % 3_600_000) / 60_000) as u32,
            second: (ms_of_day % 60_000) as f64 / 1000.0,
        }
    }

    /// Shift by `hours`, e.g. to render in a fixed UTC offset.
    pub fn with_offset_hours(&self, hours: f64) -> Self {
        Self::from_julian_day(self.to_julian_day().add_days(hours / 24.0))
    }
}

impl Display for UtcTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let whole = self.second as u32;
        let frac = self.second - whole as f64;
        if frac.abs() < 1e-9 {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
                self.year, self.month, self.day, self.hour, self.minute, whole
            )
        } else {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:06.3}Z",
                self.year, self.month, self.day, self.hour, self.minute, self.second
            )
        }
    }
}

impl FromStr for UtcTime {
    type Err = TimeError;

    /// Parses `YYYY-MM-DD`, `YYYY-MM-DDThh:mm:ss[.fff]` with an optional
    /// trailing `Z`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().trim_end_matches('Z');
        let (date, time) = match s.split_once(['T', ' ']) {
            Some((d, t)) => (d, Some(t)),
            None => (s, None),
        };

        // A leading '-' is a negative (astronomical) year, not a separator.
        let (sign, date_body) = match date.strip_prefix('-') {
            Some(rest) => (-1, rest),
            None => (1, date),
        };
        let mut parts = date_body.split('-');
        let year: i32 = parse_field(parts.next(), "year")?;
        let month: u32 = parse_field(parts.next(), "month")?;
        let day: u32 = parse_field(parts.next(), "day")?;
        if parts.next().is_some() {
            return Err(TimeError::Parse(format!("unexpected trailing date fields in '{s}'")));
        }

        let (hour, minute, second) = match time {
            Some(t) => {
                let mut fields = t.split(':');
                let hour: u32 = parse_field(fields.next(), "hour")?;
                let minute: u32 = parse_field(fields.next(), "minute")?;
                let second: f64 = match fields.next() {
                    Some(v) => parse_field(Some(v), "second")?,
                    None => 0.0,
                };
                (hour, minute, second)
            }
            None => (0, 0, 0.0),
        };

        let utc = Self::new(sign * year, month, day, hour, minute, second);
        utc.validate()?;
        Ok(utc)
    }
}

fn parse_field<T: FromStr>(field: Option<&str>, name: &str) -> Result<T, TimeError> {
    let raw = field.ok_or_else(|| TimeError::Parse(format!("missing {name}")))?;
    raw.trim()
        .parse()
        .map_err(|_| TimeError::Parse(format!("invalid {name}: '{raw}'")))
}
