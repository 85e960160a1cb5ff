//! Types for the longitude-to-time solver.

use jieqi_core::PlanetProperties;
use jieqi_time::EphemerisTime;

/// Tuning for [`solve_longitude`](crate::solve_longitude).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Maximum provider round trips before giving up (default 50).
    pub max_iterations: u32,
    /// Convergence threshold on the longitude residual, radians (default 1e-9,
    /// about 0.2 mas or 5 ms of solar motion).
    pub tolerance_rad: f64,
    /// Rates below this, radians/day, count as stalled (default 1e-9).
    pub min_speed_rad_per_day: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_iterations: 50,
            tolerance_rad: 1e-9,
            min_speed_rad_per_day: 1e-9,
        }
    }
}

impl SolverConfig {
    /// Looser tolerance for interactive display, about 0.02″.
    pub fn coarse() -> Self {
        Self {
            tolerance_rad: 1e-7,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if self.max_iterations == 0 {
            return Err("max_iterations must be > 0");
        }
        if !self.tolerance_rad.is_finite() || self.tolerance_rad <= 0.0 {
            return Err("tolerance_rad must be positive");
        }
        if !self.min_speed_rad_per_day.is_finite() || self.min_speed_rad_per_day < 0.0 {
            return Err("min_speed_rad_per_day must be non-negative");
        }
        Ok(())
    }
}

/// Instant at which a body reached the target longitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LongitudeCrossing {
    pub instant: EphemerisTime,
    /// Body state at `instant`.
    pub planet: PlanetProperties,
    /// Provider round trips used; 0 when the reference already matched.
    pub iterations: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        let c = SolverConfig::default();
        assert_eq!(c.max_iterations, 50);
        assert_eq!(c.tolerance_rad, 1e-9);
        assert!(c.validate().is_ok());
        assert!(SolverConfig::coarse().validate().is_ok());
    }

    #[test]
    fn rejects_zero_iterations() {
        let c = SolverConfig {
            max_iterations: 0,
            ..SolverConfig::default()
        };
        assert!(c.validate().is_err());
    }

    #[test]
    fn rejects_bad_tolerance() {
        for tol in [0.0, -1e-9, f64::NAN] {
            let c = SolverConfig {
                tolerance_rad: tol,
                ..SolverConfig::default()
            };
            assert!(c.validate().is_err(), "tolerance {tol}");
        }
    }

    #[test]
    fn rejects_negative_min_speed() {
        let c = SolverConfig {
            min_speed_rad_per_day: -1.0,
            ..SolverConfig::default()
        };
        assert!(c.validate().is_err());
    }
}
