use serde::Serialize;

use crate::error::{Error, Result};

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// An angle in decimal degrees with its sine and cosine precomputed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Angle {
    pub value: f64,
    pub sin: f64,
    pub cos: f64,
}

impl Angle {
    fn from_degrees(value: f64) -> Self {
        let (sin, cos) = value.to_radians().sin_cos();
        Self { value, sin, cos }
    }
}

/// A validated point on the globe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoLocation {
    pub lat: Angle,
    pub long: Angle,
}

impl GeoLocation {
    /// Create a location from latitude and longitude in decimal degrees.
    pub fn new(lat: f64, long: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(Error::InvalidCoordinate {
                message: format!("latitude {lat} out of bounds"),
            });
        }
        if !(-180.0..=180.0).contains(&long) {
            return Err(Error::InvalidCoordinate {
                message: format!("longitude {long} out of bounds"),
            });
        }

        Ok(Self {
            lat: Angle::from_degrees(lat),
            long: Angle::from_degrees(long),
        })
    }

    /// Great-circle distance to `other` in kilometres.
    ///
    /// Computed from the chord between both points on the unit sphere, which
    /// is exactly symmetric and exactly zero for identical points.
    pub fn distance(&self, other: &GeoLocation) -> f64 {
        let dx = self.lat.cos * self.long.cos - other.lat.cos * other.long.cos;
        let dy = self.lat.cos * self.long.sin - other.lat.cos * other.long.sin;
        let dz = self.lat.sin - other.lat.sin;
        let chord = (dx * dx + dy * dy + dz * dz).sqrt();
        2.0 * EARTH_RADIUS_KM * (chord / 2.0).asin()
    }
}
