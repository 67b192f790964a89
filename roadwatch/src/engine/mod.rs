//! Rendering-engine seam
//!
//! The map is drawn by an external rendering engine bound to a display
//! surface. That engine is the single most expensive object in the system,
//! so it sits behind two traits: [`RenderEngine`] for operating on a live
//! instance, and [`EngineLoader`] for the lazy asynchronous creation the
//! canvas performs exactly once per mount.
//!
//! [`MemoryEngine`] is the in-crate implementation used by tests and by
//! hosts without a real renderer.

mod memory;
mod types;

pub use memory::{LoadGate, MemoryEngine, MemoryLoader};
pub use types::{EngineError, MarkerId, MarkerSpec, PopupContent, TileSourceConfig};

use crate::coord::Coordinate;
use std::future::Future;
use std::sync::Arc;

/// Shared handle to a live engine instance.
pub type EngineHandle = Arc<dyn RenderEngine>;

/// Operations on a live rendering-engine instance.
///
/// Only the owning canvas creates or releases the engine; the marker layer
/// and geolocation controller operate strictly through the handle the canvas
/// exposes.
pub trait RenderEngine: Send + Sync {
    /// Repositions the view to the given center and zoom.
    fn set_view(&self, center: Coordinate, zoom: u8);

    /// Adds a marker and returns the engine's handle for it.
    fn add_marker(&self, spec: MarkerSpec) -> Result<MarkerId, EngineError>;

    /// Replaces an existing marker's position, style, and popup.
    fn update_marker(&self, id: MarkerId, spec: MarkerSpec) -> Result<(), EngineError>;

    /// Removes a marker. Removing an unknown id is a no-op.
    fn remove_marker(&self, id: MarkerId) -> Result<(), EngineError>;

    /// Number of markers currently attached.
    fn marker_count(&self) -> usize;

    /// Releases the engine: detaches all markers, tiles, and listeners.
    ///
    /// Idempotent. Every operation after release fails with
    /// [`EngineError::Released`].
    fn release(&self);
}

/// Asynchronous, lazy creation of a rendering engine.
///
/// Loading is asynchronous because real engines arrive as lazily loaded
/// modules; the canvas guards against its view unmounting while the load is
/// still in flight.
pub trait EngineLoader: Send + Sync {
    /// Loads an engine bound to the given display surface, with the tile
    /// source attached and the view positioned at `center`/`zoom`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::CreationFailed`] when the engine cannot
    /// initialize against the surface.
    fn load(
        &self,
        surface_id: &str,
        tiles: &TileSourceConfig,
        center: Coordinate,
        zoom: u8,
    ) -> impl Future<Output = Result<EngineHandle, EngineError>> + Send;

    /// Loader name for logging and identification.
    fn name(&self) -> &str;
}
