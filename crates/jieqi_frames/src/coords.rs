//! Spherical coordinate types and the ecliptic ↔ equatorial transform.
//!
//! All angles are radians. Source: Meeus, _Astronomical Algorithms_,
//! Eqs. 13.3 – 13.4 and their inverses 13.1 – 13.2.

use crate::angle::mod_2pi;

/// Observer position on the Earth.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GeographicCoordinates {
    /// Longitude in radians, **east positive**.
    pub longitude: f64,
    /// Latitude in radians, north positive.
    pub latitude: f64,
}

impl GeographicCoordinates {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    /// Build from degrees (east-positive longitude).
    pub fn from_degrees(longitude_deg: f64, latitude_deg: f64) -> Self {
        Self::new(longitude_deg.to_radians(), latitude_deg.to_radians())
    }
}

/// Position referenced to the ecliptic plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EclipticCoordinates {
    /// Ecliptic longitude in radians.
    pub longitude: f64,
    /// Ecliptic latitude in radians.
    pub latitude: f64,
    /// Distance in AU.
    pub distance: f64,
}

/// Position referenced to the celestial equator.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EquatorialCoordinates {
    /// Right ascension in radians, `[0, 2π)`.
    pub right_ascension: f64,
    /// Declination in radians, `[−π/2, π/2]`.
    pub declination: f64,
}

/// Rotate ecliptic coordinates into the equatorial frame.
///
/// Pass the mean obliquity for a mean-equator result, or the true
/// (nutation-corrected) obliquity for an apparent one.
pub fn ecliptic_to_equatorial(ecl: &EclipticCoordinates, obliquity: f64) -> EquatorialCoordinates {
    let (sin_lon, cos_lon) = ecl.longitude.sin_cos();
    let (sin_eps, cos_eps) = obliquity.sin_cos();

    let ra = (sin_lon * cos_eps - ecl.latitude.tan() * sin_eps).atan2(cos_lon);
    let dec = (ecl.latitude.sin() * cos_eps + ecl.latitude.cos() * sin_eps * sin_lon).asin();

    EquatorialCoordinates {
        right_ascension: mod_2pi(ra),
        declination: dec,
    }
}

/// Rotate equatorial coordinates back into the ecliptic frame.
///
/// Equatorial coordinates carry no distance, so the caller supplies it.
pub fn equatorial_to_ecliptic(
    eq: &EquatorialCoordinates,
    obliquity: f64,
    distance: f64,
) -> EclipticCoordinates {
    let (sin_ra, cos_ra) = eq.right_ascension.sin_cos();
    let (sin_eps, cos_eps) = obliquity.sin_cos();

    let lon = (sin_ra * cos_eps + eq.declination.tan() * sin_eps).atan2(cos_ra);
    let lat = (eq.declination.sin() * cos_eps - eq.declination.cos() * sin_eps * sin_ra).asin();

    EclipticCoordinates {
        longitude: mod_2pi(lon),
        latitude: lat,
        distance,
    }
}
