//! Map canvas
//!
//! Owns the lifecycle of the rendering-engine resource bound to one display
//! surface. The engine is created lazily and exactly once per mount
//! (single-flight: re-entrant mount attempts await the same in-flight load),
//! and released exactly once on unmount. A mount that resolves after the
//! view has already unmounted discards the fresh engine instead of
//! installing it.
//!
//! The host runs a single-threaded UI event loop, but the create-once and
//! release-on-unmount invariants are enforced by explicit guards rather
//! than by assuming the absence of concurrency.

mod state;

use crate::config::MapConfig;
use crate::coord::{self, Coordinate};
use crate::engine::{EngineError, EngineHandle, EngineLoader};
use crate::geolocate::{GeolocateError, GeolocationController, GeolocationProvider};
use crate::hazard::{HazardId, HazardRecord};
use crate::marker::{self, ReconcileReport};
use state::MapViewState;
use std::fmt;
use std::sync::Mutex;
use tokio::sync::OnceCell;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Errors surfaced by canvas operations.
#[derive(Debug)]
pub enum CanvasError {
    /// An operation needed a live engine before mount completed.
    NotMounted,
    /// The view unmounted; the canvas will not create or install an engine.
    Unmounted,
    /// The rendering engine refused an operation or failed to initialize.
    ///
    /// A creation failure is the render-fallback signal for the view layer.
    Engine(EngineError),
    /// The device could not provide a location; the view was left unchanged.
    Geolocation(GeolocateError),
    /// Zoom level outside the engine's supported range.
    InvalidZoom(u8),
}

impl fmt::Display for CanvasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotMounted => write!(f, "Map canvas is not mounted"),
            Self::Unmounted => write!(f, "Map canvas has been unmounted"),
            Self::Engine(e) => write!(f, "Engine error: {}", e),
            Self::Geolocation(e) => write!(f, "Geolocation error: {}", e),
            Self::InvalidZoom(zoom) => {
                write!(
                    f,
                    "Invalid zoom level {}: must be between {} and {}",
                    zoom,
                    coord::MIN_ZOOM,
                    coord::MAX_ZOOM
                )
            }
        }
    }
}

impl std::error::Error for CanvasError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Engine(e) => Some(e),
            Self::Geolocation(e) => Some(e),
            _ => None,
        }
    }
}

impl From<EngineError> for CanvasError {
    fn from(e: EngineError) -> Self {
        Self::Engine(e)
    }
}

impl From<GeolocateError> for CanvasError {
    fn from(e: GeolocateError) -> Self {
        Self::Geolocation(e)
    }
}

/// One map view's canvas, owning the engine resource for its lifetime.
///
/// Created when the map view mounts and torn down when it unmounts:
///
/// 1. `new` - canvas exists, no engine yet
/// 2. `mount` - engine created lazily, exactly once
/// 3. view operations - `set_view`, `render_hazards`, `locate_me`
/// 4. `unmount` - engine released, markers dropped; idempotent
pub struct MapCanvas<L: EngineLoader> {
    config: MapConfig,
    loader: L,
    /// Single-flight cell: the first `mount` triggers the load, re-entrant
    /// callers await the same in-flight result.
    engine_cell: OnceCell<EngineHandle>,
    /// Liveness token, cancelled by `unmount`. Checked after every
    /// suspension point that could install a resource.
    alive: CancellationToken,
    state: Mutex<MapViewState>,
}

impl<L: EngineLoader> MapCanvas<L> {
    /// Creates an unmounted canvas for the configured display surface.
    pub fn new(config: MapConfig, loader: L) -> Self {
        let state = MapViewState::new(config.initial_center, config.initial_zoom);
        Self {
            config,
            loader,
            engine_cell: OnceCell::new(),
            alive: CancellationToken::new(),
            state: Mutex::new(state),
        }
    }

    /// Mounts the canvas: creates the engine resource, lazily and once.
    ///
    /// Idempotent under re-entrant mount attempts: if an engine already
    /// exists for this canvas, the existing handle is returned; if a load is
    /// in flight, the caller awaits that same load. A failed load leaves the
    /// canvas unmounted, and the view layer may retry.
    ///
    /// # Errors
    ///
    /// - [`CanvasError::Unmounted`] when the view unmounted before or during
    ///   the load; a freshly created engine is released, never installed.
    /// - [`CanvasError::Engine`] when the engine fails to initialize.
    pub async fn mount(&self) -> Result<EngineHandle, CanvasError> {
        if self.alive.is_cancelled() {
            return Err(CanvasError::Unmounted);
        }

        let (center, zoom) = self.view();
        let handle = self
            .engine_cell
            .get_or_try_init(|| {
                debug!(
                    surface = %self.config.surface_id,
                    loader = self.loader.name(),
                    "loading rendering engine"
                );
                self.loader
                    .load(&self.config.surface_id, &self.config.tiles, center, zoom)
            })
            .await
            .map_err(CanvasError::Engine)?
            .clone();

        // The load suspended; the view may have unmounted meanwhile. Discard
        // the fresh engine rather than installing it.
        if self.alive.is_cancelled() {
            handle.release();
            debug!(
                surface = %self.config.surface_id,
                "engine resolved after unmount, released"
            );
            return Err(CanvasError::Unmounted);
        }

        self.state.lock().unwrap().engine = Some(handle.clone());
        info!(
            surface = %self.config.surface_id,
            loader = self.loader.name(),
            "map canvas mounted"
        );
        Ok(handle)
    }

    /// Repositions the view.
    ///
    /// # Errors
    ///
    /// [`CanvasError::NotMounted`] before mount completes,
    /// [`CanvasError::InvalidZoom`] for an out-of-range zoom.
    pub fn set_view(&self, center: Coordinate, zoom: u8) -> Result<(), CanvasError> {
        coord::validate_zoom(zoom).map_err(|_| CanvasError::InvalidZoom(zoom))?;

        let mut state = self.state.lock().unwrap();
        let engine = state.engine.as_ref().ok_or(CanvasError::NotMounted)?;
        engine.set_view(center, zoom);
        state.center = center;
        state.zoom = zoom;
        Ok(())
    }

    /// Renders a hazard snapshot, reconciling the engine's marker set so the
    /// rendered id set equals the snapshot's id set. Malformed records are
    /// rejected per-entry, never aborting the render.
    ///
    /// # Errors
    ///
    /// [`CanvasError::NotMounted`] before mount completes;
    /// [`CanvasError::Engine`] if the engine refuses an operation.
    pub fn render_hazards(
        &self,
        records: &[HazardRecord],
    ) -> Result<ReconcileReport, CanvasError> {
        let mut guard = self.state.lock().unwrap();
        let state = &mut *guard;
        let engine = state.engine.as_ref().ok_or(CanvasError::NotMounted)?;
        let report = marker::reconcile(engine.as_ref(), &mut state.markers, records)?;
        Ok(report)
    }

    /// Recenters the view on the device's current location at the configured
    /// locate zoom (15 by default).
    ///
    /// On any geolocation failure the view's center and zoom are left
    /// untouched and the error is returned for the host to surface or
    /// ignore; the map view itself never crashes over it.
    pub async fn locate_me<P: GeolocationProvider>(
        &self,
        controller: &GeolocationController<P>,
    ) -> Result<Coordinate, CanvasError> {
        if !self.is_mounted() {
            return Err(CanvasError::NotMounted);
        }

        let position = controller.request_current_location().await?;
        // The request suspended; re-check via set_view, which fails cleanly
        // if the view unmounted meanwhile.
        self.set_view(position, self.config.locate_zoom)?;
        Ok(position)
    }

    /// Unmounts the canvas: releases the engine and drops all markers.
    ///
    /// Idempotent. Calling before mount completes cancels the pending mount:
    /// the engine load still resolves, but its result is released instead of
    /// installed.
    pub fn unmount(&self) {
        self.alive.cancel();

        let mut state = self.state.lock().unwrap();
        state.markers.clear();
        if let Some(engine) = state.engine.take() {
            engine.release();
            info!(surface = %self.config.surface_id, "map canvas unmounted");
        }
    }

    /// Current (center, zoom) snapshot.
    pub fn view(&self) -> (Coordinate, u8) {
        let state = self.state.lock().unwrap();
        (state.center, state.zoom)
    }

    /// True while a live engine is installed.
    pub fn is_mounted(&self) -> bool {
        self.state.lock().unwrap().engine.is_some()
    }

    /// The live engine handle, for collaborators that draw through it.
    pub fn engine(&self) -> Option<EngineHandle> {
        self.state.lock().unwrap().engine.clone()
    }

    /// Ids of the hazards currently rendered, sorted.
    pub fn rendered_hazards(&self) -> Vec<HazardId> {
        let state = self.state.lock().unwrap();
        let mut ids: Vec<HazardId> = state.markers.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// The canvas configuration.
    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    /// The engine loader this canvas mounts through.
    pub fn loader(&self) -> &L {
        &self.loader
    }
}

#[cfg(test)]
mod tests;
