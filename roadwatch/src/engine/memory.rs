//! In-memory rendering engine.
//!
//! Records view state and markers without drawing anything. Serves as the
//! reference implementation of the engine seam for tests and for hosts that
//! have no real renderer attached.

use super::types::{EngineError, MarkerId, MarkerSpec, TileSourceConfig};
use super::{EngineHandle, EngineLoader, RenderEngine};
use crate::coord::Coordinate;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Semaphore;
use tracing::debug;

/// Internal state of a memory engine.
#[derive(Debug)]
struct EngineState {
    center: Coordinate,
    zoom: u8,
    markers: Vec<(MarkerId, MarkerSpec)>,
    next_marker_id: u64,
    released: bool,
}

/// Rendering engine that records operations in memory.
#[derive(Debug)]
pub struct MemoryEngine {
    /// Display surface this engine is bound to.
    surface_id: String,
    state: Mutex<EngineState>,
}

impl MemoryEngine {
    /// Creates an engine positioned at the given view.
    pub fn new(surface_id: &str, center: Coordinate, zoom: u8) -> Self {
        Self {
            surface_id: surface_id.to_string(),
            state: Mutex::new(EngineState {
                center,
                zoom,
                markers: Vec::new(),
                next_marker_id: 1,
                released: false,
            }),
        }
    }

    /// The display surface this engine is bound to.
    pub fn surface_id(&self) -> &str {
        &self.surface_id
    }

    /// Current (center, zoom) of the view.
    pub fn view(&self) -> (Coordinate, u8) {
        let state = self.state.lock().unwrap();
        (state.center, state.zoom)
    }

    /// True once `release` has been called.
    pub fn is_released(&self) -> bool {
        self.state.lock().unwrap().released
    }

    /// Snapshot of all attached markers.
    pub fn markers(&self) -> Vec<(MarkerId, MarkerSpec)> {
        self.state.lock().unwrap().markers.clone()
    }

    /// Looks up one marker's spec.
    pub fn marker(&self, id: MarkerId) -> Option<MarkerSpec> {
        self.state
            .lock()
            .unwrap()
            .markers
            .iter()
            .find(|(marker_id, _)| *marker_id == id)
            .map(|(_, spec)| *spec)
    }
}

impl RenderEngine for MemoryEngine {
    fn set_view(&self, center: Coordinate, zoom: u8) {
        let mut state = self.state.lock().unwrap();
        if state.released {
            return;
        }
        state.center = center;
        state.zoom = zoom;
    }

    fn add_marker(&self, spec: MarkerSpec) -> Result<MarkerId, EngineError> {
        let mut state = self.state.lock().unwrap();
        if state.released {
            return Err(EngineError::Released);
        }
        let id = MarkerId(state.next_marker_id);
        state.next_marker_id += 1;
        state.markers.push((id, spec));
        Ok(id)
    }

    fn update_marker(&self, id: MarkerId, spec: MarkerSpec) -> Result<(), EngineError> {
        let mut state = self.state.lock().unwrap();
        if state.released {
            return Err(EngineError::Released);
        }
        if let Some(entry) = state.markers.iter_mut().find(|(marker_id, _)| *marker_id == id) {
            entry.1 = spec;
        }
        Ok(())
    }

    fn remove_marker(&self, id: MarkerId) -> Result<(), EngineError> {
        let mut state = self.state.lock().unwrap();
        if state.released {
            return Err(EngineError::Released);
        }
        state.markers.retain(|(marker_id, _)| *marker_id != id);
        Ok(())
    }

    fn marker_count(&self) -> usize {
        self.state.lock().unwrap().markers.len()
    }

    fn release(&self) {
        let mut state = self.state.lock().unwrap();
        if state.released {
            return;
        }
        state.markers.clear();
        state.released = true;
        debug!(surface = %self.surface_id, "memory engine released");
    }
}

/// Opens the gate of a gated [`MemoryLoader`].
///
/// Each call lets exactly one pending load resolve, so tests can interleave
/// unmount with an in-flight engine load deterministically.
#[derive(Debug, Clone)]
pub struct LoadGate {
    gate: Arc<Semaphore>,
}

impl LoadGate {
    /// Lets one pending load proceed.
    pub fn open(&self) {
        self.gate.add_permits(1);
    }
}

/// Loader producing [`MemoryEngine`] instances.
///
/// Tracks every engine it has created and how many loads were requested, so
/// tests can assert the create-once and release-on-unmount invariants.
#[derive(Debug)]
pub struct MemoryLoader {
    gate: Option<Arc<Semaphore>>,
    fail_with: Option<String>,
    load_calls: AtomicU64,
    created: Mutex<Vec<Arc<MemoryEngine>>>,
}

impl MemoryLoader {
    /// A loader whose loads resolve immediately.
    pub fn new() -> Self {
        Self {
            gate: None,
            fail_with: None,
            load_calls: AtomicU64::new(0),
            created: Mutex::new(Vec::new()),
        }
    }

    /// A loader whose loads suspend until the returned gate is opened.
    pub fn gated() -> (Self, LoadGate) {
        let gate = Arc::new(Semaphore::new(0));
        let loader = Self {
            gate: Some(gate.clone()),
            ..Self::new()
        };
        (loader, LoadGate { gate })
    }

    /// A loader whose loads fail with `CreationFailed(reason)`.
    pub fn failing(reason: &str) -> Self {
        Self {
            fail_with: Some(reason.to_string()),
            ..Self::new()
        }
    }

    /// Number of load requests received.
    pub fn load_calls(&self) -> u64 {
        self.load_calls.load(Ordering::SeqCst)
    }

    /// Every engine this loader has created, in creation order.
    pub fn created(&self) -> Vec<Arc<MemoryEngine>> {
        self.created.lock().unwrap().clone()
    }
}

impl Default for MemoryLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineLoader for MemoryLoader {
    async fn load(
        &self,
        surface_id: &str,
        _tiles: &TileSourceConfig,
        center: Coordinate,
        zoom: u8,
    ) -> Result<EngineHandle, EngineError> {
        self.load_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(gate) = &self.gate {
            let permit = gate
                .acquire()
                .await
                .map_err(|e| EngineError::CreationFailed(e.to_string()))?;
            permit.forget();
        }

        if let Some(reason) = &self.fail_with {
            return Err(EngineError::CreationFailed(reason.clone()));
        }

        let engine = Arc::new(MemoryEngine::new(surface_id, center, zoom));
        self.created.lock().unwrap().push(engine.clone());
        debug!(surface = surface_id, zoom, "memory engine created");
        Ok(engine)
    }

    fn name(&self) -> &str {
        "memory"
    }
}
