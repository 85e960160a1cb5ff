//! Greenwich mean sidereal time.
//!
//! The hour-angle computation uses the classical polynomial in the elapsed
//! days since J2000.0, evaluated at the context's ephemeris instant.
//!
//! Source: Meeus, _Astronomical Algorithms_ (2nd ed.), Eq. 12.4.

use std::f64::consts::TAU;

use crate::julian::{J2000_JD, julian_centuries};

/// Greenwich mean sidereal time at Julian Date `jd`, in radians `[0, 2π)`.
///
/// θ₀ = 280.46061837° + 360.98564736629° × (JD − 2451545.0)
///      + 0.000387933° × T² − T³ / 38710000°
pub fn greenwich_mean_sidereal_time_rad(jd: f64) -> f64 {
    let t = julian_centuries(jd);
    let days = jd - J2000_JD;

    // Reduce the linear term before adding it to keep precision far from J2000.
    let linear = (360.985_647_366_29 * days).rem_euclid(360.0);
    let theta_deg = 280.460_618_37 + linear + t * t * (0.000_387_933 - t / 38_710_000.0);

    theta_deg.to_radians().rem_euclid(TAU)
}

/// Local sidereal time from GMST and observer east longitude, in `[0, 2π)`.
pub fn local_sidereal_time_rad(gmst: f64, longitude_east_rad: f64) -> f64 {
    (gmst + longitude_east_rad).rem_euclid(TAU)
}
