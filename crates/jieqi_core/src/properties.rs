//! Typed views over raw provider output.

use jieqi_frames::EclipticCoordinates;

use crate::body::Body;

/// Obliquity and nutation at one instant, radians.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EclipticProperties {
    pub true_obliquity: f64,
    pub mean_obliquity: f64,
    pub nutation_in_longitude: f64,
    pub nutation_in_obliquity: f64,
}

impl EclipticProperties {
    pub const fn from_raw(raw: [f64; 4]) -> Self {
        Self {
            true_obliquity: raw[0],
            mean_obliquity: raw[1],
            nutation_in_longitude: raw[2],
            nutation_in_obliquity: raw[3],
        }
    }

    /// True obliquity when `with_correction`, otherwise mean.
    pub const fn obliquity(&self, with_correction: bool) -> f64 {
        if with_correction {
            self.true_obliquity
        } else {
            self.mean_obliquity
        }
    }
}

/// Ecliptic state of a body at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetProperties {
    pub body: Body,
    pub ecliptic: EclipticCoordinates,
    /// Radians per day.
    pub speed_in_longitude: f64,
    /// Radians per day.
    pub speed_in_latitude: f64,
    /// AU per day.
    pub speed_in_distance: f64,
}

impl PlanetProperties {
    pub const fn from_raw(body: Body, raw: [f64; 6]) -> Self {
        Self {
            body,
            ecliptic: EclipticCoordinates {
                longitude: raw[0],
                latitude: raw[1],
                distance: raw[2],
            },
            speed_in_longitude: raw[3],
            speed_in_latitude: raw[4],
            speed_in_distance: raw[5],
        }
    }

    pub const fn longitude(&self) -> f64 {
        self.ecliptic.longitude
    }

    pub const fn latitude(&self) -> f64 {
        self.ecliptic.latitude
    }

    pub const fn distance(&self) -> f64 {
        self.ecliptic.distance
    }
}
