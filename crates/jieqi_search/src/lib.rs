//! Event searches driven by ecliptic longitude.
//!
//! This crate provides:
//! - A general longitude-to-time solver for any prograde body
//! - The 24 solar terms (节气) of a year from the Sun's apparent longitude

pub mod error;
pub mod longitude;
pub mod longitude_types;
pub mod solar_term;
pub mod solar_term_types;

pub use error::{DivergenceReason, SearchError};
pub use longitude::{solve_longitude, target_delta};
pub use longitude_types::{LongitudeCrossing, SolverConfig};
pub use solar_term::{solar_longitude_to_time, solar_terms, year_reference};
pub use solar_term_types::{ALL_SOLAR_TERMS, SolarTerm, SolarTermEvent, SolarTerms};
