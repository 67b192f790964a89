//! Map view state.

use crate::coord::Coordinate;
use crate::engine::{EngineHandle, MarkerId};
use crate::hazard::HazardId;
use std::collections::HashMap;

/// Mutable state of one mounted map view.
///
/// Owned exclusively by the canvas and mutated only through its operations;
/// the marker layer and geolocation controller never reach into this
/// directly. At most one live engine handle exists per canvas, and the
/// marker map's key set always equals the id set of the last snapshot
/// rendered.
pub(crate) struct MapViewState {
    /// Current view center.
    pub(crate) center: Coordinate,
    /// Current zoom level.
    pub(crate) zoom: u8,
    /// The live engine resource, once mount has completed.
    pub(crate) engine: Option<EngineHandle>,
    /// Hazard id to engine marker handle, kept in lockstep with the
    /// rendered snapshot.
    pub(crate) markers: HashMap<HazardId, MarkerId>,
}

impl MapViewState {
    pub(crate) fn new(center: Coordinate, zoom: u8) -> Self {
        Self {
            center,
            zoom,
            engine: None,
            markers: HashMap::new(),
        }
    }
}
