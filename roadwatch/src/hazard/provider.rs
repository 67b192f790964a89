//! Hazard data provider seam.

use super::types::HazardRecord;

/// Read-only source of the current hazard list.
///
/// The backing service (REST endpoint, database, fixture) is a black box to
/// this core: the provider hands over an already-fetched snapshot, and a
/// changed list simply arrives as the next snapshot. The map view re-renders
/// markers whenever the snapshot it is handed changes.
pub trait HazardProvider: Send + Sync {
    /// The current hazard snapshot, in provider order.
    fn current_hazards(&self) -> Vec<HazardRecord>;

    /// Provider name for logging and identification.
    fn name(&self) -> &str;
}

/// A provider over a fixed in-memory snapshot.
///
/// Useful for tests and for hosts that fetch the list themselves before
/// handing it to the map view.
#[derive(Debug, Clone, Default)]
pub struct StaticHazardProvider {
    records: Vec<HazardRecord>,
}

impl StaticHazardProvider {
    /// Creates a provider over the given records.
    pub fn new(records: Vec<HazardRecord>) -> Self {
        Self { records }
    }
}

impl HazardProvider for StaticHazardProvider {
    fn current_hazards(&self) -> Vec<HazardRecord> {
        self.records.clone()
    }

    fn name(&self) -> &str {
        "static"
    }
}
