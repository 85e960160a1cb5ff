//! Low-precision analytic ephemeris for the Sun and the Moon.
//!
//! Enough for solar-term instants to within a few minutes and lunar positions
//! to about 0.01°, with no data files. Sources: Meeus, _Astronomical
//! Algorithms_ (2nd ed.), chapter 25 (Sun, low accuracy) and a truncation of
//! chapter 47 (Moon, largest periodic terms of tables 47.A and 47.B).
//! Obliquity, nutation and ΔT come from `jieqi_frames` and `jieqi_time`.

use jieqi_frames::{mean_obliquity_rad, mod_2pi, normalize_to_pm_pi, nutation_abridged};
use jieqi_time::{delta_t_seconds, julian_centuries};

use crate::body::Body;
use crate::error::ProviderError;
use crate::flags::CalcFlags;
use crate::provider::EphemerisProvider;

/// First supported ephemeris Julian Date (year −2000).
pub const MIN_JD_ET: f64 = 990_557.5;
/// Last supported ephemeris Julian Date (year +3000).
pub const MAX_JD_ET: f64 = 2_816_787.5;

const AU_KM: f64 = 149_597_870.7;

/// Half-width of the central difference used for rates, days.
const SPEED_STEP_DAYS: f64 = 0.05;

/// Analytic Sun/Moon provider.
///
/// Ignores [`CalcFlags::dataset`]; requires [`CalcFlags::radians`]. Other
/// bodies report [`ProviderError::UnsupportedBody`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyticProvider;

impl AnalyticProvider {
    pub const fn new() -> Self {
        Self
    }

    pub const fn supports(body: Body) -> bool {
        matches!(body, Body::Sun | Body::Moon)
    }
}

fn check_request(jd_et: f64, flags: CalcFlags) -> Result<(), ProviderError> {
    if !flags.radians {
        return Err(ProviderError::InvalidFlags(
            "analytic provider only returns radians",
        ));
    }
    if !jd_et.is_finite() || !(MIN_JD_ET..=MAX_JD_ET).contains(&jd_et) {
        return Err(ProviderError::EpochOutOfRange { jd_et });
    }
    Ok(())
}

impl EphemerisProvider for AnalyticProvider {
    fn calc_body(
        &self,
        jd_et: f64,
        body: Body,
        flags: CalcFlags,
    ) -> Result<[f64; 6], ProviderError> {
        if !Self::supports(body) {
            return Err(ProviderError::UnsupportedBody(body));
        }
        check_request(jd_et, flags)?;
        let position: fn(f64) -> [f64; 3] = match body {
            Body::Moon => moon_apparent,
            _ => sun_apparent,
        };

        let [lon, lat, dist] = position(jd_et);
        let mut out = [lon, lat, dist, 0.0, 0.0, 0.0];
        if flags.speed {
            let before = position(jd_et - SPEED_STEP_DAYS);
            let after = position(jd_et + SPEED_STEP_DAYS);
            let span = 2.0 * SPEED_STEP_DAYS;
            out[3] = normalize_to_pm_pi(after[0] - before[0]) / span;
            out[4] = (after[1] - before[1]) / span;
            out[5] = (after[2] - before[2]) / span;
        }
        Ok(out)
    }

    fn calc_ecliptic_nutation(
        &self,
        jd_et: f64,
        flags: CalcFlags,
    ) -> Result<[f64; 4], ProviderError> {
        check_request(jd_et, flags)?;
        let mean = mean_obliquity_rad(jd_et);
        let nut = nutation_abridged(jd_et);
        Ok([
            mean + nut.in_obliquity,
            mean,
            nut.in_longitude,
            nut.in_obliquity,
        ])
    }

    fn delta_t(&self, jd_ut: f64) -> f64 {
        delta_t_seconds(jd_ut)
    }
}

/// Apparent geocentric longitude, latitude (0) and distance (AU) of the Sun.
fn sun_apparent(jd_et: f64) -> [f64; 3] {
    let t = julian_centuries(jd_et);

    let l0 = 280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t * t;
    let m = (357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t * t).to_radians();
    let e = 0.016_708_634 - 0.000_042_037 * t - 0.000_000_126_7 * t * t;

    let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * m.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin();

    let true_lon = l0 + c;
    let anomaly = m + c.to_radians();
    let radius = 1.000_001_018 * (1.0 - e * e) / (1.0 + e * anomaly.cos());

    // Aberration and nutation folded into one correction.
    let omega = (125.04 - 1934.136 * t).to_radians();
    let apparent = true_lon - 0.005_69 - 0.004_78 * omega.sin();

    [mod_2pi(apparent.to_radians()), 0.0, radius]
}

// Multiples of (D, M, M', F) and coefficients, units of 1e-6 degree and 1e-3 km.
#[rustfmt::skip]
const MOON_LON_DIST: [(f64, f64, f64, f64, f64, f64); 20] = [
    (0.0,  0.0,  1.0,  0.0,  6_288_774.0, -20_905_355.0),
    (2.0,  0.0, -1.0,  0.0,  1_274_027.0,  -3_699_111.0),
    (2.0,  0.0,  0.0,  0.0,    658_314.0,  -2_955_968.0),
    (0.0,  0.0,  2.0,  0.0,    213_618.0,    -569_925.0),
    (0.0,  1.0,  0.0,  0.0,   -185_116.0,      48_888.0),
    (0.0,  0.0,  0.0,  2.0,   -114_332.0,      -3_149.0),
    (2.0,  0.0, -2.0,  0.0,     58_793.0,     246_158.0),
    (2.0, -1.0, -1.0,  0.0,     57_066.0,    -152_138.0),
    (2.0,  0.0,  1.0,  0.0,     53_322.0,    -170_733.0),
    (2.0, -1.0,  0.0,  0.0,     45_758.0,    -204_586.0),
    (0.0,  1.0, -1.0,  0.0,    -40_923.0,    -129_620.0),
    (1.0,  0.0,  0.0,  0.0,    -34_720.0,     108_743.0),
    (0.0,  1.0,  1.0,  0.0,    -30_383.0,     104_755.0),
    (2.0,  0.0,  0.0, -2.0,     15_327.0,      10_321.0),
    (0.0,  0.0,  1.0,  2.0,    -12_528.0,           0.0),
    (0.0,  0.0,  1.0, -2.0,     10_980.0,      79_661.0),
    (4.0,  0.0, -1.0,  0.0,     10_675.0,     -34_782.0),
    (0.0,  0.0,  3.0,  0.0,     10_034.0,     -23_210.0),
    (4.0,  0.0, -2.0,  0.0,      8_548.0,     -21_636.0),
    (2.0,  1.0, -1.0,  0.0,     -7_888.0,      24_208.0),
];

#[rustfmt::skip]
const MOON_LAT: [(f64, f64, f64, f64, f64); 10] = [
    (0.0, 0.0,  0.0,  1.0, 5_128_122.0),
    (0.0, 0.0,  1.0,  1.0,   280_602.0),
    (0.0, 0.0,  1.0, -1.0,   277_693.0),
    (2.0, 0.0,  0.0, -1.0,   173_237.0),
    (2.0, 0.0, -1.0,  1.0,    55_413.0),
    (2.0, 0.0, -1.0, -1.0,    46_271.0),
    (2.0, 0.0,  0.0,  1.0,    32_573.0),
    (0.0, 0.0,  2.0,  1.0,    17_198.0),
    (2.0, 0.0,  1.0, -1.0,     9_266.0),
    (0.0, 0.0,  2.0, -1.0,     8_822.0),
];

/// Apparent geocentric longitude, latitude and distance (AU) of the Moon.
fn moon_apparent(jd_et: f64) -> [f64; 3] {
    let t = julian_centuries(jd_et);
    let t2 = t * t;

    let lp = (218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t2).to_radians();
    let d = (297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t2).to_radians();
    let m = (357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t2).to_radians();
    let mp = (134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t2).to_radians();
    let f = (93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t2).to_radians();

    let a1 = (119.75 + 131.849 * t).to_radians();
    let a2 = (53.09 + 479_264.290 * t).to_radians();
    let a3 = (313.45 + 481_266.484 * t).to_radians();

    // Terms involving M shrink with the Earth's orbital eccentricity.
    let ecc = 1.0 - 0.002_516 * t - 0.000_007_4 * t2;
    let ecc_factor = |mult_m: f64| ecc.powi(mult_m.abs() as i32);

    let mut sum_l = 0.0;
    let mut sum_r = 0.0;
    for &(cd, cm, cmp, cf, sl, sr) in &MOON_LON_DIST {
        let arg = cd * d + cm * m + cmp * mp + cf * f;
        let k = ecc_factor(cm);
        sum_l += sl * k * arg.sin();
        sum_r += sr * k * arg.cos();
    }
    let mut sum_b = 0.0;
    for &(cd, cm, cmp, cf, sb) in &MOON_LAT {
        let arg = cd * d + cm * m + cmp * mp + cf * f;
        sum_b += sb * ecc_factor(cm) * arg.sin();
    }

    sum_l += 3958.0 * a1.sin() + 1962.0 * (lp - f).sin() + 318.0 * a2.sin();
    sum_b += -2235.0 * lp.sin()
        + 382.0 * a3.sin()
        + 175.0 * (a1 - f).sin()
        + 175.0 * (a1 + f).sin()
        + 127.0 * (lp - mp).sin()
        - 115.0 * (lp + mp).sin();

    let dpsi = nutation_abridged(jd_et).in_longitude;
    let lon = lp + (sum_l / 1e6).to_radians() + dpsi;
    let lat = (sum_b / 1e6).to_radians();
    let dist_km = 385_000.56 + sum_r / 1000.0;

    [mod_2pi(lon), lat, dist_km / AU_KM]
}
