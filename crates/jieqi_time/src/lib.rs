//! Time primitives for the jieqi engine.
//!
//! This crate provides:
//! - [`JulianDay`] (UT clock time) and [`EphemerisTime`] (UT paired with ET)
//! - Julian Date ↔ proleptic calendar conversions
//! - A piecewise polynomial ΔT model (TT − UT)
//! - Greenwich mean sidereal time
//! - [`UtcTime`], a calendar representation for input and display

pub mod delta_t;
pub mod epoch;
pub mod error;
pub mod julian;
pub mod sidereal;
pub mod utc_time;

pub use delta_t::delta_t_seconds;
pub use epoch::{EphemerisTime, JulianDay};
pub use error::TimeError;
pub use julian::{
    DAYS_PER_JULIAN_CENTURY, J2000_JD, SECONDS_PER_DAY, calendar_to_jd, jd_to_calendar,
    julian_centuries,
};
pub use sidereal::{greenwich_mean_sidereal_time_rad, local_sidereal_time_rad};
pub use utc_time::UtcTime;
