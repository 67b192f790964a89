//! Hazard data model
//!
//! Immutable hazard snapshots as supplied by the external data provider,
//! plus the provider seam itself. Validation happens at the boundary: raw
//! [`HazardRecord`]s become [`Hazard`]s via `TryFrom`, and malformed records
//! are rejected per-entry downstream.

mod provider;
mod types;

pub use provider::{HazardProvider, StaticHazardProvider};
pub use types::{
    Hazard, HazardError, HazardId, HazardRecord, HazardStatus, Severity, MAX_SEVERITY,
    MIN_SEVERITY,
};

#[cfg(test)]
mod tests;
