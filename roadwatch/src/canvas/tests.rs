//! Tests for map canvas lifecycle

use super::*;
use crate::config::{MapConfig, MUMBAI_CENTER};
use crate::engine::{MemoryLoader, RenderEngine};
use crate::geolocate::{GeolocateError, GeolocationController, GeolocationProvider};
use crate::hazard::{HazardRecord, HazardStatus};
use std::sync::Arc;

struct FixedProvider(Coordinate);

impl GeolocationProvider for FixedProvider {
    async fn current_position(&self) -> Result<Coordinate, GeolocateError> {
        Ok(self.0)
    }

    fn name(&self) -> &str {
        "fixed"
    }
}

struct DeniedProvider;

impl GeolocationProvider for DeniedProvider {
    async fn current_position(&self) -> Result<Coordinate, GeolocateError> {
        Err(GeolocateError::PermissionDenied)
    }

    fn name(&self) -> &str {
        "denied"
    }
}

fn canvas() -> MapCanvas<MemoryLoader> {
    MapCanvas::new(MapConfig::default(), MemoryLoader::new())
}

fn records() -> Vec<HazardRecord> {
    vec![
        HazardRecord::new(1, 19.0760, 72.8777, 4, HazardStatus::Pending),
        HazardRecord::new(2, 19.0359, 72.8734, 3, HazardStatus::Verified),
    ]
}

#[tokio::test]
async fn test_mount_creates_engine_at_initial_view() {
    let canvas = canvas();
    assert!(!canvas.is_mounted());

    let engine = canvas.mount().await.expect("mount should succeed");

    assert!(canvas.is_mounted());
    assert_eq!(canvas.view(), (MUMBAI_CENTER, 12));
    assert_eq!(engine.marker_count(), 0);

    let created = canvas.loader().created();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].surface_id(), "map");
    assert_eq!(created[0].view(), (MUMBAI_CENTER, 12));
}

#[tokio::test]
async fn test_double_mount_yields_one_engine() {
    let canvas = canvas();

    let first = canvas.mount().await.unwrap();
    let second = canvas.mount().await.unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(canvas.loader().load_calls(), 1);
    assert_eq!(canvas.loader().created().len(), 1);
}

#[tokio::test]
async fn test_concurrent_mounts_share_one_load() {
    let (loader, gate) = MemoryLoader::gated();
    let canvas = MapCanvas::new(MapConfig::default(), loader);

    // One permit, two callers: single-flight means only one load runs.
    gate.open();
    let (first, second) = tokio::join!(canvas.mount(), canvas.mount());

    let first = first.unwrap();
    let second = second.unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(canvas.loader().load_calls(), 1);
}

#[tokio::test]
async fn test_unmount_before_load_resolves_leaves_no_live_engine() {
    let (loader, gate) = MemoryLoader::gated();
    let canvas = Arc::new(MapCanvas::new(MapConfig::default(), loader));

    let pending = tokio::spawn({
        let canvas = canvas.clone();
        async move { canvas.mount().await }
    });

    // Let the mount task park on the in-flight load.
    for _ in 0..4 {
        tokio::task::yield_now().await;
    }
    canvas.unmount();
    gate.open();

    let result = pending.await.expect("mount task should not panic");
    assert!(matches!(result, Err(CanvasError::Unmounted)));
    assert!(!canvas.is_mounted());

    // The load still resolved, but its engine was released, not installed.
    let created = canvas.loader().created();
    assert_eq!(created.len(), 1);
    assert!(created[0].is_released());
}

#[tokio::test]
async fn test_unmount_is_idempotent() {
    let canvas = canvas();
    canvas.mount().await.unwrap();

    canvas.unmount();
    canvas.unmount();

    assert!(!canvas.is_mounted());
    let created = canvas.loader().created();
    assert_eq!(created.len(), 1);
    assert!(created[0].is_released());
}

#[tokio::test]
async fn test_unmount_before_any_mount_is_harmless() {
    let canvas = canvas();
    canvas.unmount();

    assert!(!canvas.is_mounted());
    assert!(matches!(canvas.mount().await, Err(CanvasError::Unmounted)));
    assert_eq!(canvas.loader().load_calls(), 0);
}

#[tokio::test]
async fn test_failed_creation_surfaces_engine_error() {
    let canvas = MapCanvas::new(MapConfig::default(), MemoryLoader::failing("no webgl"));

    let result = canvas.mount().await;

    assert!(matches!(
        result,
        Err(CanvasError::Engine(EngineError::CreationFailed(_)))
    ));
    assert!(!canvas.is_mounted());
}

#[tokio::test]
async fn test_set_view_before_mount_is_not_mounted() {
    let canvas = canvas();
    let target = Coordinate::new(18.9750, 72.8258).unwrap();

    let result = canvas.set_view(target, 14);
    assert!(matches!(result, Err(CanvasError::NotMounted)));

    // State untouched
    assert_eq!(canvas.view(), (MUMBAI_CENTER, 12));
}

#[tokio::test]
async fn test_set_view_repositions_state_and_engine() {
    let canvas = canvas();
    canvas.mount().await.unwrap();
    let target = Coordinate::new(18.9750, 72.8258).unwrap();

    canvas.set_view(target, 14).unwrap();

    assert_eq!(canvas.view(), (target, 14));
    assert_eq!(canvas.loader().created()[0].view(), (target, 14));
}

#[tokio::test]
async fn test_set_view_rejects_out_of_range_zoom() {
    let canvas = canvas();
    canvas.mount().await.unwrap();

    let result = canvas.set_view(MUMBAI_CENTER, 42);
    assert!(matches!(result, Err(CanvasError::InvalidZoom(42))));
    assert_eq!(canvas.view(), (MUMBAI_CENTER, 12));
}

#[tokio::test]
async fn test_render_hazards_requires_mount() {
    let canvas = canvas();
    let result = canvas.render_hazards(&records());
    assert!(matches!(result, Err(CanvasError::NotMounted)));
}

#[tokio::test]
async fn test_render_hazards_matches_snapshot() {
    let canvas = canvas();
    canvas.mount().await.unwrap();

    let report = canvas.render_hazards(&records()).unwrap();

    assert_eq!(report.added, 2);
    assert_eq!(
        canvas.rendered_hazards(),
        vec![HazardId(1), HazardId(2)]
    );
    assert_eq!(canvas.loader().created()[0].marker_count(), 2);
}

#[tokio::test]
async fn test_unmount_drops_markers_with_engine() {
    let canvas = canvas();
    canvas.mount().await.unwrap();
    canvas.render_hazards(&records()).unwrap();

    canvas.unmount();

    assert!(canvas.rendered_hazards().is_empty());
    assert_eq!(canvas.loader().created()[0].marker_count(), 0);
}

#[tokio::test]
async fn test_locate_me_recenters_at_locate_zoom() {
    let canvas = canvas();
    canvas.mount().await.unwrap();
    let position = Coordinate::new(19.1136, 72.8697).unwrap();
    let controller = GeolocationController::new(FixedProvider(position));

    let resolved = canvas.locate_me(&controller).await.unwrap();

    assert_eq!(resolved, position);
    assert_eq!(canvas.view(), (position, 15));
}

#[tokio::test]
async fn test_locate_me_denied_leaves_view_unchanged() {
    let canvas = canvas();
    canvas.mount().await.unwrap();
    let controller = GeolocationController::new(DeniedProvider);

    let result = canvas.locate_me(&controller).await;

    assert!(matches!(
        result,
        Err(CanvasError::Geolocation(GeolocateError::PermissionDenied))
    ));
    assert_eq!(canvas.view(), (MUMBAI_CENTER, 12));
}

#[tokio::test]
async fn test_locate_me_requires_mount() {
    let canvas = canvas();
    let controller = GeolocationController::new(FixedProvider(MUMBAI_CENTER));

    let result = canvas.locate_me(&controller).await;
    assert!(matches!(result, Err(CanvasError::NotMounted)));
}
