//! Body query context for the jieqi engine.
//!
//! This crate defines the [`EphemerisProvider`] seam, typed views over its
//! output, and [`Astronomy`], which binds an observer and an instant to a
//! provider and answers obliquity, ecliptic, equatorial and hour-angle
//! queries. Two providers ship with it: [`AnalyticProvider`] (Sun and Moon
//! from closed-form series) and [`MemoProvider`] (a cache in front of any
//! other provider).

pub mod analytic;
pub mod astronomy;
pub mod body;
pub mod error;
pub mod flags;
pub mod memo;
pub mod properties;
pub mod provider;

pub use analytic::AnalyticProvider;
pub use astronomy::{Astronomy, HourAngle};
pub use body::Body;
pub use error::ProviderError;
pub use flags::{CalcFlags, Dataset};
pub use memo::{DEFAULT_MEMO_CAPACITY, MemoProvider, QueryStats};
pub use properties::{EclipticProperties, PlanetProperties};
pub use provider::EphemerisProvider;

#[cfg(test)]
mod tests {
    use super::*;

    // Compile-time assertion: contexts over a thread-safe provider are
    // themselves thread-safe.
    #[allow(dead_code)]
    const _: () = {
        fn assert_send_sync<T: Send + Sync>() {}
        fn check() {
            assert_send_sync::<Astronomy<'static, AnalyticProvider>>();
            assert_send_sync::<Astronomy<'static, dyn EphemerisProvider>>();
        }
    };
}
