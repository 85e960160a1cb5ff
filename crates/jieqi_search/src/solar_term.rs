//! Solar-term search: when the Sun's apparent longitude reaches multiples
//! of 15°.
//!
//! Every target is solved independently from one reference state, the Sun
//! at 1 January 12:00 UT of the requested year, so results do not depend on
//! evaluation order. The observer location plays no part.
//!
//! Calendar years before 1582-10-15 are Julian, so the March equinox drifts
//! later going back in time: it stays within January–March from year −1000
//! on, and reaches early April by year −2000.

use jieqi_core::{Astronomy, Body, EphemerisProvider};
use jieqi_time::{EphemerisTime, JulianDay};

use crate::error::SearchError;
use crate::longitude::solve_longitude;
use crate::longitude_types::SolverConfig;
use crate::solar_term_types::{ALL_SOLAR_TERMS, SolarTermEvent, SolarTerms};

/// UT reference instant for `year`: 1 January, 12:00.
pub fn year_reference(year: i32) -> JulianDay {
    JulianDay::from_calendar(year, 1, 1, 12, 0, 0.0)
}

/// Instants at which the Sun reaches each longitude in `targets_rad`.
///
/// Results are index-aligned with `targets_rad`. Each is the first crossing
/// after the year's reference instant.
pub fn solar_longitude_to_time<P: EphemerisProvider + ?Sized>(
    astro: &Astronomy<'_, P>,
    year: i32,
    targets_rad: &[f64],
    config: &SolverConfig,
) -> Result<Vec<EphemerisTime>, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;

    let reference = astro.at(year_reference(year));
    let sun = reference.planet(Body::Sun)?;

    targets_rad
        .iter()
        .map(|&target| {
            solve_longitude(&reference, &sun, target, config).map(|crossing| crossing.instant)
        })
        .collect()
}

/// The 24 solar terms following 1 January 12:00 UT of `year`.
pub fn solar_terms<P: EphemerisProvider + ?Sized>(
    astro: &Astronomy<'_, P>,
    year: i32,
    config: &SolverConfig,
) -> Result<SolarTerms, SearchError> {
    let targets = ALL_SOLAR_TERMS.map(|term| term.longitude_rad());
    let instants = solar_longitude_to_time(astro, year, &targets, config)?;

    let events = std::array::from_fn(|i| SolarTermEvent {
        term: ALL_SOLAR_TERMS[i],
        instant: instants[i],
    });
    Ok(SolarTerms::new(year, events))
}
