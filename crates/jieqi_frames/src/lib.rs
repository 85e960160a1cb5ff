//! Reference-frame helpers for the jieqi engine.
//!
//! Provides circular-angle arithmetic, ecliptic/equatorial coordinate types
//! and the closed-form transform between them, plus the mean obliquity and an
//! abridged nutation model used by the analytic ephemeris.

pub mod angle;
pub mod coords;
pub mod nutation;
pub mod obliquity;

pub use angle::{
    ABERRATION_RAD, ARCSEC_TO_RAD, DEGREE_SECONDS_PER_RADIAN, angles_equal, mod_2pi, mod_360_deg,
    normalize_to_pm_pi,
};
pub use coords::{
    EclipticCoordinates, EquatorialCoordinates, GeographicCoordinates, ecliptic_to_equatorial,
    equatorial_to_ecliptic,
};
pub use nutation::{Nutation, nutation_abridged};
pub use obliquity::mean_obliquity_rad;
