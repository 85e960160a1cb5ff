//! The ephemeris capability the query context is built on.

use crate::body::Body;
use crate::error::ProviderError;
use crate::flags::CalcFlags;

/// Source of raw body positions, obliquity/nutation and ΔT.
///
/// Implementations may wrap a native ephemeris library, an analytic theory,
/// a cache, or a test fixture. All angles are in radians when
/// [`CalcFlags::radians`] is set, and rates are per day.
pub trait EphemerisProvider: Send + Sync {
    /// `[longitude, latitude, distance, d_longitude, d_latitude, d_distance]`
    /// of `body` at ephemeris Julian Date `jd_et` (AU for distance).
    fn calc_body(
        &self,
        jd_et: f64,
        body: Body,
        flags: CalcFlags,
    ) -> Result<[f64; 6], ProviderError>;

    /// `[true_obliquity, mean_obliquity, nutation_in_longitude,
    /// nutation_in_obliquity]` at ephemeris Julian Date `jd_et`.
    fn calc_ecliptic_nutation(
        &self,
        jd_et: f64,
        flags: CalcFlags,
    ) -> Result<[f64; 4], ProviderError>;

    /// ΔT = ET − UT in seconds at UT Julian Date `jd_ut`.
    fn delta_t(&self, jd_ut: f64) -> f64;
}

impl<P: EphemerisProvider + ?Sized> EphemerisProvider for Box<P> {
    fn calc_body(
        &self,
        jd_et: f64,
        body: Body,
        flags: CalcFlags,
    ) -> Result<[f64; 6], ProviderError> {
        (**self).calc_body(jd_et, body, flags)
    }

    fn calc_ecliptic_nutation(
        &self,
        jd_et: f64,
        flags: CalcFlags,
    ) -> Result<[f64; 4], ProviderError> {
        (**self).calc_ecliptic_nutation(jd_et, flags)
    }

    fn delta_t(&self, jd_ut: f64) -> f64 {
        (**self).delta_t(jd_ut)
    }
}
