//! Rendering-engine types shared across the seam.

use crate::coord::Coordinate;
use crate::hazard::{HazardId, HazardStatus, Severity};
use crate::marker::MarkerStyle;
use std::fmt;
use thiserror::Error;

/// Errors that can occur at the rendering-engine seam.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// The engine failed to initialize against its display surface.
    ///
    /// Fatal to the map view: the surrounding view layer should fall back
    /// to a non-map rendering.
    #[error("Engine creation failed: {0}")]
    CreationFailed(String),

    /// An operation reached an engine that has already been released.
    #[error("Engine resource already released")]
    Released,
}

/// Handle to one marker owned by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkerId(pub u64);

impl fmt::Display for MarkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "marker-{}", self.0)
    }
}

/// Display payload attached to a marker as an on-demand popup.
///
/// Not shown by default; the engine owns popup toggling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopupContent {
    /// The hazard's report identifier.
    pub id: HazardId,
    /// Severity on the 1-5 scale.
    pub severity: Severity,
    /// Current moderation status.
    pub status: HazardStatus,
}

impl fmt::Display for PopupContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Pothole {}\nSeverity: {}\nStatus: {}",
            self.id, self.severity, self.status
        )
    }
}

/// Everything the engine needs to place one marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerSpec {
    /// Where the marker sits.
    pub coord: Coordinate,
    /// Severity-derived visual style.
    pub style: MarkerStyle,
    /// On-demand popup payload.
    pub popup: PopupContent,
}

/// Background imagery source handed to the engine at load time.
///
/// The tile provider is an external network resource; its failures are
/// outside this core's error taxonomy (the engine still exists, the view is
/// just visually incomplete).
#[derive(Debug, Clone, PartialEq)]
pub struct TileSourceConfig {
    /// Slippy-map URL template, e.g. `https://{s}.tile.../{z}/{x}/{y}.png`.
    pub url_template: String,
    /// Attribution line the engine must display.
    pub attribution: String,
}

impl Default for TileSourceConfig {
    fn default() -> Self {
        Self {
            url_template: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution: "© OpenStreetMap contributors".to_string(),
        }
    }
}
