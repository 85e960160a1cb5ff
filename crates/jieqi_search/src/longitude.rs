//! Longitude-to-time solver.
//!
//! Newton iteration on the ecliptic longitude measured relative to the
//! reference longitude. Working in offsets from the reference keeps the
//! residual continuous across the 0/2π seam: the target offset lies in
//! `[0, 2π)` and each new offset is unwrapped toward it.

use std::f64::consts::{PI, TAU};

use jieqi_core::{Astronomy, EphemerisProvider, PlanetProperties};
use jieqi_frames::{angles_equal, mod_2pi};
use log::debug;

use crate::error::{DivergenceReason, SearchError};
use crate::longitude_types::{LongitudeCrossing, SolverConfig};

/// Forward angular distance from `reference` to `target`, in `[0, 2π)`.
pub fn target_delta(reference: f64, target: f64) -> f64 {
    mod_2pi(target - reference)
}

/// Shift `delta` by ±2π when it sits more than half a turn from `target`.
fn unwrap_toward(delta: f64, target: f64) -> f64 {
    if delta - target > PI {
        delta - TAU
    } else if target - delta > PI {
        delta + TAU
    } else {
        delta
    }
}

/// Find when `reference.body` reaches ecliptic longitude `target_rad`.
///
/// `reference` must be the body state at `astro.instant()`. The search only
/// moves forward from there for a prograde body, so the result is the first
/// crossing after the reference instant (within one revolution).
///
/// Each iteration steps UT by `residual / speed`, re-derives ET through the
/// provider's ΔT, and fetches a fresh body state.
pub fn solve_longitude<P: EphemerisProvider + ?Sized>(
    astro: &Astronomy<'_, P>,
    reference: &PlanetProperties,
    target_rad: f64,
    config: &SolverConfig,
) -> Result<LongitudeCrossing, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;

    let first_long = reference.longitude();
    let goal = target_delta(first_long, target_rad);

    let mut instant = astro.instant();
    let mut planet = *reference;
    let mut last_delta = 0.0;
    let mut iterations = 0u32;

    loop {
        if angles_equal(goal, last_delta, config.tolerance_rad) {
            return Ok(LongitudeCrossing {
                instant,
                planet,
                iterations,
            });
        }
        if iterations >= config.max_iterations {
            return Err(diverged(DivergenceReason::IterationLimit, iterations));
        }

        let speed = planet.speed_in_longitude;
        if !speed.is_finite() || speed.abs() < config.min_speed_rad_per_day {
            return Err(diverged(DivergenceReason::ZeroRate, iterations));
        }
        if speed < 0.0 {
            return Err(diverged(DivergenceReason::Retrograde, iterations));
        }

        let step_days = (goal - last_delta) / speed;
        instant = astro.ephemeris_time(instant.jd_ut().add_days(step_days));
        planet = astro.planet_at(reference.body, instant.jd_et())?;
        iterations += 1;
        last_delta = unwrap_toward(mod_2pi(planet.longitude() - first_long), goal);

        debug!(
            "{} iteration {iterations}: step {step_days:.9} d, residual {:.3e} rad at {}",
            reference.body,
            goal - last_delta,
            instant.jd_ut()
        );
    }
}

fn diverged(reason: DivergenceReason, iterations: u32) -> SearchError {
    SearchError::DivergentSearch { reason, iterations }
}
