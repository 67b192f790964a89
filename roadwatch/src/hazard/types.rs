//! Hazard type definitions

use crate::coord::{CoordError, Coordinate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Valid severity range for a reported hazard.
pub const MIN_SEVERITY: u8 = 1;
pub const MAX_SEVERITY: u8 = 5;

/// Unique identifier of a reported hazard, assigned by the data provider.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct HazardId(pub u64);

impl fmt::Display for HazardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Severity of a hazard on the 1-5 reporting scale.
///
/// Construction validates the range; a `Severity` in hand is always valid.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Severity(u8);

impl Severity {
    /// Creates a severity, validating the 1-5 range.
    pub fn new(value: u8) -> Result<Self, HazardError> {
        if !(MIN_SEVERITY..=MAX_SEVERITY).contains(&value) {
            return Err(HazardError::InvalidSeverity(value));
        }
        Ok(Self(value))
    }

    /// The raw 1-5 value.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Moderation status of a hazard report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HazardStatus {
    /// Filed by a citizen, awaiting moderation.
    Pending,
    /// Confirmed by an administrator.
    Verified,
    /// Repaired or otherwise closed out.
    Resolved,
}

impl fmt::Display for HazardStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HazardStatus::Pending => write!(f, "pending"),
            HazardStatus::Verified => write!(f, "verified"),
            HazardStatus::Resolved => write!(f, "resolved"),
        }
    }
}

/// A validated hazard snapshot.
///
/// Supplied by the external data provider and never mutated by this core;
/// a changed hazard arrives as a fresh snapshot in the next provider list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Hazard {
    /// Unique report identifier.
    pub id: HazardId,
    /// Location of the hazard.
    pub coord: Coordinate,
    /// Severity on the 1-5 scale.
    pub severity: Severity,
    /// Current moderation status.
    pub status: HazardStatus,
}

/// The raw wire shape a data provider delivers, prior to validation.
///
/// Individual malformed records are rejected per-entry during marker
/// reconciliation rather than aborting a whole render.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HazardRecord {
    /// Unique report identifier.
    pub id: u64,
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
    /// Claimed severity; validated against the 1-5 range.
    pub severity: u8,
    /// Current moderation status.
    pub status: HazardStatus,
}

impl HazardRecord {
    /// Convenience constructor for providers and tests.
    pub fn new(id: u64, lat: f64, lng: f64, severity: u8, status: HazardStatus) -> Self {
        Self {
            id,
            lat,
            lng,
            severity,
            status,
        }
    }
}

impl TryFrom<HazardRecord> for Hazard {
    type Error = HazardError;

    fn try_from(record: HazardRecord) -> Result<Self, Self::Error> {
        let coord = Coordinate::new(record.lat, record.lng)?;
        let severity = Severity::new(record.severity)?;
        Ok(Hazard {
            id: HazardId(record.id),
            coord,
            severity,
            status: record.status,
        })
    }
}

/// Errors that can occur while validating a hazard record.
#[derive(Debug, Clone, PartialEq)]
pub enum HazardError {
    /// Severity outside the 1-5 reporting scale.
    InvalidSeverity(u8),
    /// Coordinate outside the valid degree ranges.
    InvalidCoordinate(CoordError),
}

impl fmt::Display for HazardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HazardError::InvalidSeverity(value) => {
                write!(
                    f,
                    "Invalid severity: {} (must be between {} and {})",
                    value, MIN_SEVERITY, MAX_SEVERITY
                )
            }
            HazardError::InvalidCoordinate(e) => write!(f, "Invalid coordinate: {}", e),
        }
    }
}

impl std::error::Error for HazardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HazardError::InvalidCoordinate(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CoordError> for HazardError {
    fn from(e: CoordError) -> Self {
        HazardError::InvalidCoordinate(e)
    }
}
