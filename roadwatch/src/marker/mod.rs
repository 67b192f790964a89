//! Marker styling and reconciliation
//!
//! Derives visual markers from the hazard snapshot and keeps the engine's
//! marker set in lockstep with it: after every [`reconcile`] call the
//! rendered id set equals the input id set, with each marker styled for its
//! hazard's current severity.

use crate::engine::{EngineError, MarkerId, MarkerSpec, PopupContent, RenderEngine};
use crate::hazard::{Hazard, HazardId, HazardRecord, Severity};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, warn};

/// Circle-marker rendering constants.
pub const MARKER_RADIUS_PX: u32 = 8;
pub const MARKER_OUTLINE_COLOR: &str = "#fff";
pub const MARKER_OUTLINE_WEIGHT_PX: u32 = 1;
pub const MARKER_FILL_OPACITY: f64 = 0.8;

/// Visual class of a marker, derived from hazard severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerStyle {
    /// Severity 4-5.
    High,
    /// Severity 2-3.
    Medium,
    /// Severity 1.
    Low,
}

impl MarkerStyle {
    /// Classifies a severity.
    ///
    /// Thresholds: above 3 is high, above 1 is medium, 1 is low.
    pub fn for_severity(severity: Severity) -> Self {
        let value = severity.value();
        if value > 3 {
            MarkerStyle::High
        } else if value > 1 {
            MarkerStyle::Medium
        } else {
            MarkerStyle::Low
        }
    }

    /// Fill color for this class.
    pub fn color(&self) -> &'static str {
        match self {
            MarkerStyle::High => "red",
            MarkerStyle::Medium => "yellow",
            MarkerStyle::Low => "green",
        }
    }
}

/// Builds the marker spec for one validated hazard.
pub fn spec_for(hazard: &Hazard) -> MarkerSpec {
    MarkerSpec {
        coord: hazard.coord,
        style: MarkerStyle::for_severity(hazard.severity),
        popup: PopupContent {
            id: hazard.id,
            severity: hazard.severity,
            status: hazard.status,
        },
    }
}

/// Counts from one reconciliation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    /// Markers added for hazards new to the snapshot.
    pub added: usize,
    /// Markers refreshed for hazards already rendered.
    pub updated: usize,
    /// Markers removed for hazards gone from the snapshot.
    pub removed: usize,
    /// Records rejected per-entry (malformed or duplicate id).
    pub rejected: usize,
}

/// Reconciles the engine's marker set against a hazard snapshot.
///
/// `markers` is the canvas-owned mapping from hazard id to the engine's
/// marker handle; after this call its key set equals the id set of the valid
/// records in `records`. Survivors are updated in place so a hazard whose
/// severity changed picks up its new style. Malformed records, and records
/// duplicating an id seen earlier in the same snapshot, are rejected
/// per-entry with a warning rather than aborting the render.
///
/// # Errors
///
/// Returns an error only when the engine itself refuses an operation
/// (e.g. it has already been released).
pub fn reconcile(
    engine: &dyn RenderEngine,
    markers: &mut HashMap<HazardId, MarkerId>,
    records: &[HazardRecord],
) -> Result<ReconcileReport, EngineError> {
    let mut report = ReconcileReport::default();

    // Validate per-entry; iteration over a BTreeMap keeps the pass
    // deterministic regardless of provider order.
    let mut desired: BTreeMap<HazardId, Hazard> = BTreeMap::new();
    for record in records {
        match Hazard::try_from(*record) {
            Ok(hazard) => {
                if desired.insert(hazard.id, hazard).is_some() {
                    warn!(id = record.id, "duplicate hazard id in snapshot, keeping last");
                    report.rejected += 1;
                }
            }
            Err(e) => {
                warn!(id = record.id, error = %e, "rejecting malformed hazard record");
                report.rejected += 1;
            }
        }
    }

    // Drop markers for hazards no longer present.
    let stale: Vec<HazardId> = markers
        .keys()
        .copied()
        .filter(|id| !desired.contains_key(id))
        .collect();
    for id in stale {
        if let Some(marker_id) = markers.remove(&id) {
            engine.remove_marker(marker_id)?;
            report.removed += 1;
        }
    }

    // Add the new, refresh the surviving.
    for (id, hazard) in &desired {
        let spec = spec_for(hazard);
        match markers.get(id) {
            Some(marker_id) => {
                engine.update_marker(*marker_id, spec)?;
                report.updated += 1;
            }
            None => {
                let marker_id = engine.add_marker(spec)?;
                markers.insert(*id, marker_id);
                report.added += 1;
            }
        }
    }

    debug!(
        added = report.added,
        updated = report.updated,
        removed = report.removed,
        rejected = report.rejected,
        "marker reconciliation complete"
    );
    Ok(report)
}
