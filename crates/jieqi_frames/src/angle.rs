//! Circular-quantity arithmetic.
//!
//! Ecliptic longitudes, right ascensions and sidereal times all live on a
//! circle; these helpers keep them in a canonical range.

use std::f64::consts::{PI, TAU};

/// Arcseconds in one radian (206264.806…).
pub const DEGREE_SECONDS_PER_RADIAN: f64 = 180.0 * 3600.0 / PI;

/// Arcseconds to radians: 1″ = π / (180 × 3600).
pub const ARCSEC_TO_RAD: f64 = 1.0 / DEGREE_SECONDS_PER_RADIAN;

/// Constant of annual aberration, 20.5″, in radians.
pub const ABERRATION_RAD: f64 = 20.5 * ARCSEC_TO_RAD;

/// Reduce an angle in radians to `[0, 2π)`.
pub fn mod_2pi(rad: f64) -> f64 {
    let r = rad.rem_euclid(TAU);
    // rem_euclid can return exactly TAU for tiny negative inputs.
    if r >= TAU { 0.0 } else { r }
}

/// Reduce an angle in degrees to `[0, 360)`.
pub fn mod_360_deg(deg: f64) -> f64 {
    let d = deg.rem_euclid(360.0);
    if d >= 360.0 { 0.0 } else { d }
}

/// Reduce an angle in radians to `(−π, π]`.
pub fn normalize_to_pm_pi(rad: f64) -> f64 {
    let r = mod_2pi(rad);
    if r > PI { r - TAU } else { r }
}

/// Whether two angles agree within `tolerance` radians (not circular).
pub fn angles_equal(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() <= tolerance
}
