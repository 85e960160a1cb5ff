//! Error types for event searches.

use std::fmt::{Display, Formatter};

use jieqi_core::ProviderError;
use thiserror::Error;

/// Why the longitude solver gave up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DivergenceReason {
    /// `max_iterations` steps without meeting the tolerance.
    IterationLimit,
    /// Longitude rate was non-finite or too close to zero to step with.
    ZeroRate,
    /// Longitude rate was negative, so the step would run backward.
    Retrograde,
}

impl Display for DivergenceReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IterationLimit => f.write_str("iteration limit reached"),
            Self::ZeroRate => f.write_str("longitude rate is zero or non-finite"),
            Self::Retrograde => f.write_str("body is retrograde"),
        }
    }
}

/// Errors from longitude and solar-term searches.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum SearchError {
    #[error(transparent)]
    Provider(#[from] ProviderError),
    #[error("search diverged after {iterations} iterations: {reason}")]
    DivergentSearch {
        reason: DivergenceReason,
        iterations: u32,
    },
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
}
