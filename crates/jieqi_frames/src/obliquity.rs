//! Mean obliquity of the ecliptic (IAU 1980).
//!
//! ε₀ = 23°26′21.448″ − 46.8150″·T − 0.00059″·T² + 0.001813″·T³
//! with T in Julian centuries of TT since J2000.0. Good to about 0.01″
//! within a few centuries of J2000.
//!
//! Source: Meeus, _Astronomical Algorithms_, Eq. 22.2.

use jieqi_time::julian_centuries;

use crate::angle::ARCSEC_TO_RAD;

/// ε₀ at J2000.0 in arcseconds.
const EPS0_ARCSEC: f64 = 23.0 * 3600.0 + 26.0 * 60.0 + 21.448;

/// Mean obliquity of the ecliptic in radians at ephemeris Julian Date `jd_et`.
pub fn mean_obliquity_rad(jd_et: f64) -> f64 {
    let t = julian_centuries(jd_et);
    let arcsec = EPS0_ARCSEC + t * (-46.8150 + t * (-0.00059 + t * 0.001813));
    arcsec * ARCSEC_TO_RAD
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use jieqi_time::J2000_JD;

    #[test]
    fn value_at_j2000() {
        assert_abs_diff_eq!(
            mean_obliquity_rad(J2000_JD).to_degrees(),
            23.439_291_1,
            epsilon = 1e-7
        );
    }

    #[test]
    fn meeus_example_22a() {
        // 1987 April 10, 0h TD: ε₀ = 23°26′27.407″
        let deg = mean_obliquity_rad(2_446_895.5).to_degrees();
        assert_abs_diff_eq!(deg, 23.440_946, epsilon = 1e-6);
    }

    #[test]
    fn decreasing_in_modern_era() {
        assert!(mean_obliquity_rad(J2000_JD + 36_525.0) < mean_obliquity_rad(J2000_JD));
    }
}
