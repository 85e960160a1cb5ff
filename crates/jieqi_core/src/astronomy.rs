//! Body query context: an observer and an instant bound to a provider.

use std::f64::consts::PI;
use std::fmt::{Debug, Formatter};

use jieqi_frames::{
    ABERRATION_RAD, EquatorialCoordinates, GeographicCoordinates, ecliptic_to_equatorial, mod_2pi,
};
use jieqi_time::{
    EphemerisTime, JulianDay, greenwich_mean_sidereal_time_rad, local_sidereal_time_rad,
};
use log::trace;

use crate::body::Body;
use crate::error::ProviderError;
use crate::flags::CalcFlags;
use crate::properties::{EclipticProperties, PlanetProperties};
use crate::provider::EphemerisProvider;

/// Result of [`Astronomy::hour_angle`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HourAngle {
    /// Local hour angle in radians, `(−π, π]`, positive west of the meridian.
    pub hour_angle: f64,
    /// Body state with the aberration constant removed from its longitude.
    pub planet: PlanetProperties,
    pub equatorial: EquatorialCoordinates,
}

/// Observer location and instant bound to an ephemeris provider.
///
/// Read-only after construction. Every query goes to the provider afresh;
/// wrap the provider in a [`MemoProvider`](crate::MemoProvider) to share
/// work between queries.
pub struct Astronomy<'a, P: EphemerisProvider + ?Sized> {
    geo: GeographicCoordinates,
    instant: EphemerisTime,
    provider: &'a P,
    flags: CalcFlags,
}

impl<P: EphemerisProvider + ?Sized> Clone for Astronomy<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: EphemerisProvider + ?Sized> Copy for Astronomy<'_, P> {}

// The provider is skipped: it may hold large tables.
impl<P: EphemerisProvider + ?Sized> Debug for Astronomy<'_, P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Astronomy")
            .field("geo", &self.geo)
            .field("instant", &self.instant)
            .field("flags", &self.flags)
            .finish_non_exhaustive()
    }
}

impl<'a, P: EphemerisProvider + ?Sized> Astronomy<'a, P> {
    /// Bind `geo` and the UT instant `jd_ut` to `provider` with default flags.
    ///
    /// The ET half of the instant is derived from the provider's ΔT.
    pub fn new(geo: GeographicCoordinates, jd_ut: JulianDay, provider: &'a P) -> Self {
        let instant = EphemerisTime::from_ut(jd_ut, provider.delta_t(jd_ut.value()));
        Self {
            geo,
            instant,
            provider,
            flags: CalcFlags::default(),
        }
    }

    pub fn with_flags(mut self, flags: CalcFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Same observer, provider and flags at another UT instant.
    pub fn at(&self, jd_ut: JulianDay) -> Self {
        self.at_instant(self.ephemeris_time(jd_ut))
    }

    /// Same observer, provider and flags at an already paired instant.
    pub fn at_instant(&self, instant: EphemerisTime) -> Self {
        Self { instant, ..*self }
    }

    /// Pair a UT instant with ET through this provider's ΔT.
    pub fn ephemeris_time(&self, jd_ut: JulianDay) -> EphemerisTime {
        EphemerisTime::from_ut(jd_ut, self.provider.delta_t(jd_ut.value()))
    }

    pub fn geo(&self) -> GeographicCoordinates {
        self.geo
    }

    pub fn instant(&self) -> EphemerisTime {
        self.instant
    }

    pub fn provider(&self) -> &'a P {
        self.provider
    }

    pub fn flags(&self) -> CalcFlags {
        self.flags
    }

    /// Obliquity and nutation at the context's instant.
    pub fn ecliptic(&self) -> Result<EclipticProperties, ProviderError> {
        self.ecliptic_at(self.instant.jd_et())
    }

    /// Obliquity and nutation at ephemeris instant `jd_et`.
    pub fn ecliptic_at(&self, jd_et: JulianDay) -> Result<EclipticProperties, ProviderError> {
        trace!("calc_ecliptic_nutation at {jd_et} (ET)");
        let raw = self
            .provider
            .calc_ecliptic_nutation(jd_et.value(), self.flags)?;
        Ok(EclipticProperties::from_raw(raw))
    }

    /// Ecliptic state of `body` at the context's instant.
    pub fn planet(&self, body: Body) -> Result<PlanetProperties, ProviderError> {
        self.planet_at(body, self.instant.jd_et())
    }

    /// Ecliptic state of `body` at ephemeris instant `jd_et`.
    pub fn planet_at(&self, body: Body, jd_et: JulianDay) -> Result<PlanetProperties, ProviderError> {
        trace!("calc_body {body} at {jd_et} (ET)");
        let raw = self.provider.calc_body(jd_et.value(), body, self.flags)?;
        Ok(PlanetProperties::from_raw(body, raw))
    }

    /// Greenwich sidereal time in radians `[0, 2π)`.
    ///
    /// Mean sidereal time, or apparent (equation of the equinoxes added) when
    /// `with_correction` is set.
    pub fn sidereal_time(&self, with_correction: bool) -> Result<f64, ProviderError> {
        let ecliptic = self.ecliptic()?;
        Ok(self.sidereal_from(&ecliptic, with_correction))
    }

    fn sidereal_from(&self, ecliptic: &EclipticProperties, with_correction: bool) -> f64 {
        let mut theta = greenwich_mean_sidereal_time_rad(self.instant.jd_et().value());
        if with_correction {
            theta += ecliptic.nutation_in_longitude * ecliptic.true_obliquity.cos();
        }
        mod_2pi(theta)
    }

    /// Aberration-corrected equatorial position of `body`.
    ///
    /// Uses the true obliquity when `with_correction` is set, the mean
    /// obliquity otherwise.
    pub fn equatorial(
        &self,
        body: Body,
        with_correction: bool,
    ) -> Result<EquatorialCoordinates, ProviderError> {
        let ecliptic = self.ecliptic()?;
        let (_, equatorial) = self.corrected_equatorial(body, &ecliptic, with_correction)?;
        Ok(equatorial)
    }

    fn corrected_equatorial(
        &self,
        body: Body,
        ecliptic: &EclipticProperties,
        with_correction: bool,
    ) -> Result<(PlanetProperties, EquatorialCoordinates), ProviderError> {
        let mut planet = self.planet(body)?;
        planet.ecliptic.longitude = mod_2pi(planet.ecliptic.longitude - ABERRATION_RAD);
        let equatorial =
            ecliptic_to_equatorial(&planet.ecliptic, ecliptic.obliquity(with_correction));
        Ok((planet, equatorial))
    }

    /// Local hour angle of `body` for the context's observer and instant.
    ///
    /// `H = θ + λ − α`, with λ the east-positive observer longitude, reduced
    /// to `(−π, π]`. With `with_correction` both θ and α are apparent
    /// (nutation applied); otherwise both are mean.
    pub fn hour_angle(&self, body: Body, with_correction: bool) -> Result<HourAngle, ProviderError> {
        let ecliptic = self.ecliptic()?;
        let (planet, equatorial) = self.corrected_equatorial(body, &ecliptic, with_correction)?;
        let theta = self.sidereal_from(&ecliptic, with_correction);

        let local = local_sidereal_time_rad(theta, self.geo.longitude);
        let mut hour_angle = mod_2pi(local - equatorial.right_ascension);
        if hour_angle > PI {
            hour_angle -= 2.0 * PI;
        }

        Ok(HourAngle {
            hour_angle,
            planet,
            equatorial,
        })
    }
}
