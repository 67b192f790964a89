//! Map view configuration.
//!
//! Static configuration consumed by the canvas at mount time. Defaults match
//! the Mumbai deployment: city center at zoom 12, OpenStreetMap tiles.

use crate::coord::{Coordinate, LOCATE_ZOOM};
use crate::engine::TileSourceConfig;

/// Mumbai city center.
pub const MUMBAI_CENTER: Coordinate = Coordinate {
    lat: 19.0760,
    lng: 72.8777,
};

/// Default initial zoom level.
pub const DEFAULT_ZOOM: u8 = 12;

/// Configuration for one map view.
#[derive(Debug, Clone, PartialEq)]
pub struct MapConfig {
    /// Display surface the engine binds to.
    pub surface_id: String,
    /// Initial view center.
    pub initial_center: Coordinate,
    /// Initial zoom level.
    pub initial_zoom: u8,
    /// Zoom applied when recentering on the device location.
    pub locate_zoom: u8,
    /// Background imagery source.
    pub tiles: TileSourceConfig,
}

impl MapConfig {
    /// Configuration for the given display surface with default view settings.
    pub fn new(surface_id: impl Into<String>) -> Self {
        Self {
            surface_id: surface_id.into(),
            ..Self::default()
        }
    }

    /// Set the initial view.
    pub fn with_view(mut self, center: Coordinate, zoom: u8) -> Self {
        self.initial_center = center;
        self.initial_zoom = zoom;
        self
    }

    /// Set the tile source.
    pub fn with_tiles(mut self, tiles: TileSourceConfig) -> Self {
        self.tiles = tiles;
        self
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            surface_id: "map".to_string(),
            initial_center: MUMBAI_CENTER,
            initial_zoom: DEFAULT_ZOOM,
            locate_zoom: LOCATE_ZOOM,
            tiles: TileSourceConfig::default(),
        }
    }
}
