//! Coordinate type definitions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Valid latitude range (WGS-84 degrees)
pub const MIN_LAT: f64 = -90.0;
pub const MAX_LAT: f64 = 90.0;

/// Valid longitude range
pub const MIN_LNG: f64 = -180.0;
pub const MAX_LNG: f64 = 180.0;

/// Standard zoom levels for slippy-map tile engines
pub const MIN_ZOOM: u8 = 0;
pub const MAX_ZOOM: u8 = 19;

/// Zoom level applied when recentering on the device's own location.
pub const LOCATE_ZOOM: u8 = 15;

/// A geographic point in WGS-84 degrees.
///
/// The core never projects coordinates itself; placement on screen is the
/// rendering engine's concern. Construction validates the degree ranges so
/// downstream components can rely on every `Coordinate` being on the globe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees, positive north
    pub lat: f64,
    /// Longitude in degrees, positive east
    pub lng: f64,
}

impl Coordinate {
    /// Creates a coordinate, validating both degree ranges.
    ///
    /// # Errors
    ///
    /// Returns `CoordError::InvalidLatitude` or `CoordError::InvalidLongitude`
    /// when the respective value is outside its valid range or not finite.
    pub fn new(lat: f64, lng: f64) -> Result<Self, CoordError> {
        if !lat.is_finite() || !(MIN_LAT..=MAX_LAT).contains(&lat) {
            return Err(CoordError::InvalidLatitude(lat));
        }
        if !lng.is_finite() || !(MIN_LNG..=MAX_LNG).contains(&lng) {
            return Err(CoordError::InvalidLongitude(lng));
        }
        Ok(Self { lat, lng })
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.lat, self.lng)
    }
}

/// Errors that can occur during coordinate validation.
#[derive(Debug, Clone, PartialEq)]
pub enum CoordError {
    /// Latitude is outside valid range (-90.0 to 90.0)
    InvalidLatitude(f64),
    /// Longitude is outside valid range (-180.0 to 180.0)
    InvalidLongitude(f64),
    /// Zoom level is outside valid range (0 to 19)
    InvalidZoom(u8),
}

impl fmt::Display for CoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordError::InvalidLatitude(lat) => {
                write!(
                    f,
                    "Invalid latitude: {} (must be between {} and {})",
                    lat, MIN_LAT, MAX_LAT
                )
            }
            CoordError::InvalidLongitude(lng) => {
                write!(
                    f,
                    "Invalid longitude: {} (must be between {} and {})",
                    lng, MIN_LNG, MAX_LNG
                )
            }
            CoordError::InvalidZoom(zoom) => {
                write!(
                    f,
                    "Invalid zoom level: {} (must be between {} and {})",
                    zoom, MIN_ZOOM, MAX_ZOOM
                )
            }
        }
    }
}

impl std::error::Error for CoordError {}
