//! Golden-value tests for the solar-term generator with the analytic
//! ephemeris.
//!
//! Reference instants are published UT times; the analytic Sun is good to
//! a few minutes, so matches are checked to 20 minutes.

use jieqi_core::{
    AnalyticProvider, Astronomy, Body, CalcFlags, EphemerisProvider, MemoProvider,
    ProviderError,
};
use jieqi_frames::GeographicCoordinates;
use jieqi_search::{
    SearchError, SolarTerm, SolverConfig, solar_longitude_to_time, solar_terms, year_reference,
};
use jieqi_time::{JulianDay, UtcTime};

const TOLERANCE_DAYS: f64 = 20.0 / 1440.0;

fn context(provider: &AnalyticProvider) -> Astronomy<'_, AnalyticProvider> {
    Astronomy::new(
        GeographicCoordinates::from_degrees(116.4, 39.9),
        JulianDay::new(2_460_000.5),
        provider,
    )
}

fn assert_near(term: SolarTerm, actual: JulianDay, expected: UtcTime) {
    let diff = actual.days_since(expected.to_julian_day());
    assert!(
        diff.abs() < TOLERANCE_DAYS,
        "{term}: off by {:.1} min (got {})",
        diff * 1440.0,
        UtcTime::from_julian_day(actual)
    );
}

#[test]
fn terms_2024_match_almanac() {
    let provider = AnalyticProvider;
    let terms = solar_terms(&context(&provider), 2024, &SolverConfig::default()).unwrap();
    assert_eq!(terms.year(), 2024);

    let cases = [
        (SolarTerm::StartOfSpring, UtcTime::new(2024, 2, 4, 8, 27, 0.0)),
        (SolarTerm::SpringEquinox, UtcTime::new(2024, 3, 20, 3, 6, 0.0)),
        (SolarTerm::SummerSolstice, UtcTime::new(2024, 6, 20, 20, 51, 0.0)),
        (SolarTerm::AutumnEquinox, UtcTime::new(2024, 9, 22, 12, 44, 0.0)),
        (SolarTerm::WinterSolstice, UtcTime::new(2024, 12, 21, 9, 21, 0.0)),
    ];
    for (term, expected) in cases {
        let event = terms.get(term);
        assert_eq!(event.term, term);
        assert_near(term, event.instant.jd_ut(), expected);
    }
}

#[test]
fn spring_equinox_falls_in_first_quarter() {
    let provider = AnalyticProvider;
    for year in [1900, 1987, 2024, 2100] {
        let terms = solar_terms(&context(&provider), year, &SolverConfig::default()).unwrap();
        let utc = terms.get(SolarTerm::SpringEquinox).utc();
        assert_eq!(utc.year, year);
        assert!((1..=3).contains(&utc.month), "{year}: month {}", utc.month);
        assert!((19..=21).contains(&utc.day), "{year}: day {}", utc.day);
    }
}

#[test]
fn spring_equinox_stays_in_first_quarter_from_year_minus_1000() {
    let provider = AnalyticProvider;
    for year in (-1000..=3000).step_by(37) {
        let terms = solar_terms(&context(&provider), year, &SolverConfig::default()).unwrap();
        let utc = terms.get(SolarTerm::SpringEquinox).utc();
        assert_eq!(utc.year, year);
        assert!((1..=3).contains(&utc.month), "{year}: {utc}");
    }
}

#[test]
fn julian_calendar_pushes_early_equinoxes_into_april() {
    let provider = AnalyticProvider;
    let terms = solar_terms(&context(&provider), -1999, &SolverConfig::default()).unwrap();
    let utc = terms.get(SolarTerm::SpringEquinox).utc();
    assert_eq!((utc.year, utc.month), (-1999, 4), "{utc}");
    assert!((6..=8).contains(&utc.day), "{utc}");
}

#[test]
fn chronological_order_is_strictly_increasing_with_regular_gaps() {
    let provider = AnalyticProvider;
    let terms = solar_terms(&context(&provider), 2024, &SolverConfig::default()).unwrap();
    let sorted = terms.chronological();
    assert_eq!(sorted.len(), 24);
    assert_eq!(sorted[0].term, SolarTerm::MinorCold);
    assert_eq!(sorted[23].term, SolarTerm::WinterSolstice);

    for pair in sorted.windows(2) {
        let gap = pair[1].instant.jd_ut().days_since(pair[0].instant.jd_ut());
        assert!(
            (gap - 15.2).abs() <= 1.0,
            "{} -> {}: gap {gap:.3} d",
            pair[0].term,
            pair[1].term
        );
    }
}

#[test]
fn index_order_follows_longitude() {
    let provider = AnalyticProvider;
    let astro = context(&provider);
    let terms = solar_terms(&astro, 2024, &SolverConfig::default()).unwrap();
    for event in terms.iter() {
        let sun = astro.planet_at(Body::Sun, event.instant.jd_et()).unwrap();
        let residual = jieqi_frames::normalize_to_pm_pi(sun.longitude() - event.term.longitude_rad());
        assert!(residual.abs() < 1e-8, "{}: residual {residual:e}", event.term);
    }
}

#[test]
fn all_events_follow_the_reference_instant() {
    let provider = AnalyticProvider;
    let terms = solar_terms(&context(&provider), 2024, &SolverConfig::default()).unwrap();
    let reference = year_reference(2024);
    for event in terms.iter() {
        let after = event.instant.jd_ut().days_since(reference);
        assert!(after > 0.0 && after < 366.0, "{}: {after}", event.term);
    }
}

#[test]
fn observer_location_does_not_matter() {
    let provider = AnalyticProvider;
    let config = SolverConfig::default();
    let beijing = solar_terms(&context(&provider), 2024, &config).unwrap();
    let greenwich = Astronomy::new(
        GeographicCoordinates::default(),
        JulianDay::new(2_451_545.0),
        &provider,
    );
    let other = solar_terms(&greenwich, 2024, &config).unwrap();
    assert_eq!(beijing, other);
}

#[test]
fn memoized_provider_gives_same_terms_and_reuses_reference() {
    let direct = AnalyticProvider;
    let memo = MemoProvider::new(AnalyticProvider);
    let config = SolverConfig::default();
    let a = solar_terms(&context(&direct), 2024, &config).unwrap();
    let b = solar_terms(
        &Astronomy::new(GeographicCoordinates::default(), JulianDay::new(2_460_000.5), &memo),
        2024,
        &config,
    )
    .unwrap();
    assert_eq!(a, b);
    assert!(memo.stats().evaluations > 0);
}

#[test]
fn multi_target_entry_point_matches_generator() {
    let provider = AnalyticProvider;
    let astro = context(&provider);
    let config = SolverConfig::default();
    let terms = solar_terms(&astro, 2024, &config).unwrap();
    let targets = [
        SolarTerm::SummerSolstice.longitude_rad(),
        SolarTerm::SpringEquinox.longitude_rad(),
    ];
    let instants = solar_longitude_to_time(&astro, 2024, &targets, &config).unwrap();
    assert_eq!(instants.len(), 2);
    assert_eq!(instants[0], terms.get(SolarTerm::SummerSolstice).instant);
    assert_eq!(instants[1], terms.get(SolarTerm::SpringEquinox).instant);
}

#[test]
fn empty_target_list_yields_no_instants() {
    let provider = AnalyticProvider;
    let instants =
        solar_longitude_to_time(&context(&provider), 2024, &[], &SolverConfig::default()).unwrap();
    assert!(instants.is_empty());
}

struct NoEphemeris;

impl EphemerisProvider for NoEphemeris {
    fn calc_body(
        &self,
        _jd_et: f64,
        body: Body,
        _flags: CalcFlags,
    ) -> Result<[f64; 6], ProviderError> {
        Err(ProviderError::UnsupportedBody(body))
    }

    fn calc_ecliptic_nutation(
        &self,
        _jd_et: f64,
        _flags: CalcFlags,
    ) -> Result<[f64; 4], ProviderError> {
        Err(ProviderError::Unavailable("no tables loaded".into()))
    }

    fn delta_t(&self, _jd_ut: f64) -> f64 {
        69.0
    }
}

#[test]
fn provider_errors_surface_from_generator() {
    let provider = NoEphemeris;
    let astro = Astronomy::new(
        GeographicCoordinates::default(),
        JulianDay::new(2_460_000.5),
        &provider,
    );
    assert_eq!(
        solar_terms(&astro, 2024, &SolverConfig::default()).unwrap_err(),
        SearchError::Provider(ProviderError::UnsupportedBody(Body::Sun))
    );
}

#[test]
fn years_outside_the_analytic_range_are_reported() {
    let provider = AnalyticProvider;
    let err = solar_terms(&context(&provider), 5000, &SolverConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        SearchError::Provider(ProviderError::EpochOutOfRange { .. })
    ));
}
