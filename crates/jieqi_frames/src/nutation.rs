//! Abridged nutation in longitude and obliquity.
//!
//! Four-term series driven by the Moon's ascending node and the mean
//! longitudes of the Sun and Moon. Accuracy is about 0.5″ in Δψ and 0.1″ in
//! Δε, sufficient for sidereal-time and apparent-place corrections at the
//! arcsecond level.
//!
//! Source: Meeus, _Astronomical Algorithms_, chapter 22 (low-accuracy form).

use jieqi_time::julian_centuries;

use crate::angle::ARCSEC_TO_RAD;

/// Nutation angles in radians.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Nutation {
    /// Δψ, nutation in longitude.
    pub in_longitude: f64,
    /// Δε, nutation in obliquity.
    pub in_obliquity: f64,
}

/// Abridged nutation at ephemeris Julian Date `jd_et`.
pub fn nutation_abridged(jd_et: f64) -> Nutation {
    let t = julian_centuries(jd_et);

    // Mean longitude of the Sun and of the Moon, longitude of the Moon's node.
    let sun = (280.4665 + 36_000.7698 * t).to_radians();
    let moon = (218.3165 + 481_267.8813 * t).to_radians();
    let node = (125.044_52 - 1934.136_261 * t + 0.002_070_8 * t * t + t * t * t / 450_000.0)
        .to_radians();

    let dpsi = -17.20 * node.sin() - 1.32 * (2.0 * sun).sin() - 0.23 * (2.0 * moon).sin()
        + 0.21 * (2.0 * node).sin();
    let deps = 9.20 * node.cos() + 0.57 * (2.0 * sun).cos() + 0.10 * (2.0 * moon).cos()
        - 0.09 * (2.0 * node).cos();

    Nutation {
        in_longitude: dpsi * ARCSEC_TO_RAD,
        in_obliquity: deps * ARCSEC_TO_RAD,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arcsec(rad: f64) -> f64 {
        rad / ARCSEC_TO_RAD
    }

    #[test]
    fn meeus_example_22a() {
        // 1987 April 10, 0h TD: Δψ = −3.788″, Δε = +9.443″ (full theory)
        let n = nutation_abridged(2_446_895.5);
        assert!((arcsec(n.in_longitude) + 3.788).abs() < 0.5, "Δψ = {}″", arcsec(n.in_longitude));
        assert!((arcsec(n.in_obliquity) - 9.443).abs() < 0.1, "Δε = {}″", arcsec(n.in_obliquity));
    }

    #[test]
    fn amplitude_bounds() {
        for i in 0..200 {
            let jd = 2_440_000.5 + i as f64 * 97.3;
            let n = nutation_abridged(jd);
            assert!(arcsec(n.in_longitude).abs() < 19.0);
            assert!(arcsec(n.in_obliquity).abs() < 10.5);
        }
    }

    #[test]
    fn node_period_dominates() {
        // Half a nodal period (~9.3 yr) flips the sign of the main term.
        let jd = 2_451_545.0;
        let a = nutation_abridged(jd).in_longitude;
        let b = nutation_abridged(jd + 6798.38 / 2.0).in_longitude;
        assert!(a * b < 0.0, "Δψ should change sign: {a} vs {b}");
    }
}
