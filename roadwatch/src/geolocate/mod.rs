//! Device geolocation
//!
//! Wraps the platform's asynchronous location capability behind a one-shot
//! request. The permission model is the platform's business; this module
//! only distinguishes the three ways a request can come back empty-handed.

use crate::coord::Coordinate;
use std::future::Future;
use thiserror::Error;
use tracing::{debug, warn};

/// Ways a location request can fail.
///
/// All of these are recovered locally by the caller: the requested recenter
/// simply does not happen.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeolocateError {
    /// The user or platform declined the location permission.
    #[error("Location permission denied")]
    PermissionDenied,

    /// The device could not produce a position.
    #[error("Position unavailable: {0}")]
    PositionUnavailable(String),

    /// The platform has no geolocation capability at all.
    #[error("Geolocation not supported on this platform")]
    Unsupported,
}

/// Platform seam for the device's location capability.
pub trait GeolocationProvider: Send + Sync {
    /// Resolves the device's current position once.
    fn current_position(
        &self,
    ) -> impl Future<Output = Result<Coordinate, GeolocateError>> + Send;

    /// Provider name for logging and identification.
    fn name(&self) -> &str;
}

/// Provider for platforms without a geolocation capability.
///
/// Every request fails with [`GeolocateError::Unsupported`].
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedProvider;

impl GeolocationProvider for UnsupportedProvider {
    async fn current_position(&self) -> Result<Coordinate, GeolocateError> {
        Err(GeolocateError::Unsupported)
    }

    fn name(&self) -> &str {
        "unsupported"
    }
}

/// One-shot access to the device's current location.
///
/// This is a single request, not a continuous subscription; no timeout or
/// retry policy is applied, that remains the host's call.
#[derive(Debug, Clone)]
pub struct GeolocationController<P> {
    provider: P,
}

impl<P: GeolocationProvider> GeolocationController<P> {
    /// Creates a controller over the given platform provider.
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Requests the device's current position.
    ///
    /// # Errors
    ///
    /// Returns the provider's failure kind unchanged; see [`GeolocateError`].
    pub async fn request_current_location(&self) -> Result<Coordinate, GeolocateError> {
        debug!(provider = self.provider.name(), "requesting device location");
        match self.provider.current_position().await {
            Ok(coord) => {
                debug!(%coord, "device location resolved");
                Ok(coord)
            }
            Err(e) => {
                warn!(provider = self.provider.name(), error = %e, "device location failed");
                Err(e)
            }
        }
    }
}
