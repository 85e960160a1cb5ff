use thiserror::Error;

use crate::body::Body;

/// Errors reported by an [`EphemerisProvider`](crate::EphemerisProvider).
///
/// These travel unchanged through the query context and the searches built on
/// top of it.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ProviderError {
    #[error("unsupported body: {0}")]
    UnsupportedBody(Body),
    #[error("epoch out of range: JD(ET) {jd_et}")]
    EpochOutOfRange { jd_et: f64 },
    #[error("invalid flags: {0}")]
    InvalidFlags(&'static str),
    #[error("ephemeris unavailable: {0}")]
    Unavailable(String),
}
