//! Geographic coordinate module
//!
//! Provides the validated latitude/longitude point type shared by hazards,
//! the map view state, and the geolocation controller, plus the zoom-level
//! bounds the rendering engine accepts.

mod types;

pub use types::{
    CoordError, Coordinate, LOCATE_ZOOM, MAX_LAT, MAX_LNG, MAX_ZOOM, MIN_LAT, MIN_LNG, MIN_ZOOM,
};

/// Validates that a zoom level is within the engine's supported range.
#[inline]
pub fn validate_zoom(zoom: u8) -> Result<(), CoordError> {
    if zoom > MAX_ZOOM {
        return Err(CoordError::InvalidZoom(zoom));
    }
    Ok(())
}

#[cfg(test)]
mod tests;
