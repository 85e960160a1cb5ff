use std::f64::consts::{FRAC_PI_2, PI};

use jieqi_core::{
    AnalyticProvider, Astronomy, Body, CalcFlags, EphemerisProvider, ProviderError,
};
use jieqi_frames::{GeographicCoordinates, normalize_to_pm_pi};
use jieqi_time::{JulianDay, UtcTime};
use proptest::prelude::*;

/// Sun fixed at one longitude; every other body is unsupported.
struct FixedSun {
    longitude: f64,
}

impl EphemerisProvider for FixedSun {
    fn calc_body(
        &self,
        _jd_et: f64,
        body: Body,
        _flags: CalcFlags,
    ) -> Result<[f64; 6], ProviderError> {
        match body {
            Body::Sun => Ok([self.longitude, 0.0, 1.0, 0.017_202, 0.0, 0.0]),
            other => Err(ProviderError::UnsupportedBody(other)),
        }
    }

    fn calc_ecliptic_nutation(
        &self,
        _jd_et: f64,
        _flags: CalcFlags,
    ) -> Result<[f64; 4], ProviderError> {
        Ok([0.409_1, 0.409_0, 8.0e-5, 4.0e-5])
    }

    fn delta_t(&self, _jd_ut: f64) -> f64 {
        69.0
    }
}

#[test]
fn ninety_degrees_east_adds_quarter_turn() {
    let provider = AnalyticProvider;
    let jd = JulianDay::new(2_460_000.25);
    for body in [Body::Sun, Body::Moon] {
        for correction in [false, true] {
            let west = Astronomy::new(GeographicCoordinates::from_degrees(10.0, 30.0), jd, &provider);
            let east =
                Astronomy::new(GeographicCoordinates::from_degrees(100.0, 30.0), jd, &provider);
            let h_west = west.hour_angle(body, correction).unwrap().hour_angle;
            let h_east = east.hour_angle(body, correction).unwrap().hour_angle;
            let diff = normalize_to_pm_pi(h_east - h_west);
            assert!(
                (diff - FRAC_PI_2).abs() < 1e-12,
                "{body} correction={correction}: diff = {diff}"
            );
        }
    }
}

#[test]
fn sun_near_meridian_at_greenwich_noon() {
    // 2024-03-20: the equation of time is about −7.5 min, so at 12:00 UT the
    // Sun is still east of the Greenwich meridian by roughly 1.5–2°.
    let provider = AnalyticProvider;
    let jd = UtcTime::new(2024, 3, 20, 12, 0, 0.0).to_julian_day();
    let astro = Astronomy::new(GeographicCoordinates::default(), jd, &provider);
    let h = astro.hour_angle(Body::Sun, true).unwrap().hour_angle.to_degrees();
    assert!((-2.5..-0.8).contains(&h), "H = {h}°");
}

#[test]
fn sun_near_meridian_at_beijing_local_noon() {
    // 116.4°E crosses the meridian about 7.76 h before Greenwich does.
    let provider = AnalyticProvider;
    let jd = UtcTime::new(2024, 3, 20, 4, 14, 0.0).to_julian_day();
    let astro = Astronomy::new(GeographicCoordinates::from_degrees(116.4, 39.9), jd, &provider);
    let h = astro.hour_angle(Body::Sun, true).unwrap().hour_angle.to_degrees();
    assert!(h.abs() < 2.5, "H = {h}°");
}

#[test]
fn hour_angle_uses_corrected_longitude_and_selected_obliquity() {
    let provider = FixedSun { longitude: 1.0 };
    let astro = Astronomy::new(
        GeographicCoordinates::default(),
        JulianDay::new(2_451_545.0),
        &provider,
    );
    let mean = astro.hour_angle(Body::Sun, false).unwrap();
    let apparent = astro.hour_angle(Body::Sun, true).unwrap();
    assert_eq!(mean.planet.longitude(), apparent.planet.longitude());
    assert!(mean.planet.longitude() < 1.0);
    assert_ne!(
        mean.equatorial.declination,
        apparent.equatorial.declination
    );
}

#[test]
fn unsupported_body_propagates_unchanged() {
    let provider = FixedSun { longitude: 0.0 };
    let astro = Astronomy::new(
        GeographicCoordinates::default(),
        JulianDay::new(2_451_545.0),
        &provider,
    );
    assert_eq!(
        astro.hour_angle(Body::Jupiter, true),
        Err(ProviderError::UnsupportedBody(Body::Jupiter))
    );
    assert_eq!(
        astro.equatorial(Body::Jupiter, false),
        Err(ProviderError::UnsupportedBody(Body::Jupiter))
    );
    assert_eq!(
        astro.planet(Body::Jupiter),
        Err(ProviderError::UnsupportedBody(Body::Jupiter))
    );
}

#[test]
fn works_through_trait_object() {
    let provider: Box<dyn EphemerisProvider> = Box::new(AnalyticProvider);
    let astro = Astronomy::new(
        GeographicCoordinates::default(),
        JulianDay::new(2_451_545.0),
        provider.as_ref(),
    );
    assert!(astro.hour_angle(Body::Moon, false).is_ok());
}

proptest! {
    #[test]
    fn hour_angle_in_half_open_range(
        jd in 2_415_020.0f64..2_488_070.0,
        lon_deg in -180.0f64..180.0,
        lat_deg in -89.0f64..89.0,
        moon in any::<bool>(),
        correction in any::<bool>(),
    ) {
        let provider = AnalyticProvider;
        let body = if moon { Body::Moon } else { Body::Sun };
        let astro = Astronomy::new(
            GeographicCoordinates::from_degrees(lon_deg, lat_deg),
            JulianDay::new(jd),
            &provider,
        );
        let h = astro.hour_angle(body, correction).unwrap().hour_angle;
        prop_assert!(h > -PI && h <= PI, "H = {}", h);
    }
}
