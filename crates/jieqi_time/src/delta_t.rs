//! ΔT = TT − UT, the Earth-rotation clock error.
//!
//! Piecewise polynomial fits of Espenak & Meeus (2006), as published in the
//! NASA _Five Millennium Canon of Solar Eclipses_. The fits cover −500 to
//! +2150; outside that span the long-term parabola −20 + 32u² is used.

use crate::julian::J2000_JD;

/// Decimal year for a Julian Day (UT), adequate for ΔT lookups.
fn decimal_year(jd_ut: f64) -> f64 {
    2000.0 + (jd_ut - J2000_JD) / 365.25
}

/// Long-term parabola (Morrison & Stephenson 2004).
fn long_term(y: f64) -> f64 {
    let u = (y - 1820.0) / 100.0;
    -20.0 + 32.0 * u * u
}

/// ΔT in seconds for a Julian Day on the UT axis.
pub fn delta_t_seconds(jd_ut: f64) -> f64 {
    let y = decimal_year(jd_ut);

    if y < -500.0 {
        long_term(y)
    } else if y < 500.0 {
        let u = y / 100.0;
        10583.6 - 1014.41 * u + 33.78311 * u.powi(2) - 5.952053 * u.powi(3)
            - 0.1798452 * u.powi(4)
            + 0.022174192 * u.powi(5)
            + 0.0090316521 * u.powi(6)
    } else if y < 1600.0 {
        let u = (y - 1000.0) / 100.0;
        1574.2 - 556.01 * u + 71.23472 * u.powi(2) + 0.319781 * u.powi(3)
            - 0.8503463 * u.powi(4)
            - 0.005050998 * u.powi(5)
            + 0.0083572073 * u.powi(6)
    } else if y < 1700.0 {
        let t = y - 1600.0;
        120.0 - 0.9808 * t - 0.01532 * t.powi(2) + t.powi(3) / 7129.0
    } else if y < 1800.0 {
        let t = y - 1700.0;
        8.83 + 0.1603 * t - 0.0059285 * t.powi(2) + 0.00013336 * t.powi(3)
            - t.powi(4) / 1_174_000.0
    } else if y < 1860.0 {
        let t = y - 1800.0;
        13.72 - 0.332447 * t + 0.0068612 * t.powi(2) + 0.0041116 * t.powi(3)
            - 0.00037436 * t.powi(4)
            + 0.0000121272 * t.powi(5)
            - 0.0000001699 * t.powi(6)
            + 0.000000000875 * t.powi(7)
    } else if y < 1900.0 {
        let t = y - 1860.0;
        7.62 + 0.5737 * t - 0.251754 * t.powi(2) + 0.01680668 * t.powi(3)
            - 0.0004473624 * t.powi(4)
            + t.powi(5) / 233_174.0
    } else if y < 1920.0 {
        let t = y - 1900.0;
        -2.79 + 1.494119 * t - 0.0598939 * t.powi(2) + 0.0061966 * t.powi(3)
            - 0.000197 * t.powi(4)
    } else if y < 1941.0 {
        let t = y - 1920.0;
        21.20 + 0.84493 * t - 0.076100 * t.powi(2) + 0.0020936 * t.powi(3)
    } else if y < 1961.0 {
        let t = y - 1950.0;
        29.07 + 0.407 * t - t.powi(2) / 233.0 + t.powi(3) / 2547.0
    } else if y < 1986.0 {
        let t = y - 1975.0;
        45.45 + 1.067 * t - t.powi(2) / 260.0 - t.powi(3) / 718.0
    } else if y < 2005.0 {
        let t = y - 2000.0;
        63.86 + 0.3345 * t - 0.060374 * t.powi(2)
            + 0.0017275 * t.powi(3)
            + 0.000651814 * t.powi(4)
            + 0.00002373599 * t.powi(5)
    } else if y < 2050.0 {
        let t = y - 2000.0;
        62.92 + 0.32217 * t + 0.005589 * t.powi(2)
    } else if y < 2150.0 {
        long_term(y) - 0.5628 * (2150.0 - y)
    } else {
        long_term(y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::julian::calendar_to_jd;

    #[test]
    fn year_2000_value() {
        let dt = delta_t_seconds(J2000_JD);
        assert!((dt - 63.86).abs() < 0.1, "ΔT(2000) = {dt}");
    }

    #[test]
    fn modern_era_is_about_a_minute() {
        for year in [1990, 2010, 2020, 2030] {
            let dt = delta_t_seconds(calendar_to_jd(year, 1, 1.0));
            assert!((50.0..100.0).contains(&dt), "ΔT({year}) = {dt}");
        }
    }

    #[test]
    fn near_continuous_at_segment_boundaries() {
        for year in [1600, 1700, 1800, 1860, 1900, 1920, 1941, 1961, 1986, 2005, 2050, 2150] {
            let y = year as f64;
            let before = delta_t_seconds(J2000_JD + (y - 2000.0 - 1e-6) * 365.25);
            let after = delta_t_seconds(J2000_JD + (y - 2000.0 + 1e-6) * 365.25);
            assert!((before - after).abs() < 3.0, "jump at {year}: {before} vs {after}");
        }
    }

    #[test]
    fn ancient_values_are_large() {
        // 500 BCE: ΔT is several hours.
        let dt = delta_t_seconds(calendar_to_jd(-500, 1, 1.0));
        assert!(dt > 10_000.0, "ΔT(-500) = {dt}");
    }
}
