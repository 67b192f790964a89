//! Tests for hazard validation

use super::*;

#[test]
fn test_valid_record_converts() {
    let record = HazardRecord::new(1, 19.0760, 72.8777, 4, HazardStatus::Pending);
    let hazard = Hazard::try_from(record).expect("valid record should convert");

    assert_eq!(hazard.id, HazardId(1));
    assert_eq!(hazard.severity.value(), 4);
    assert_eq!(hazard.status, HazardStatus::Pending);
}

#[test]
fn test_severity_bounds() {
    assert!(Severity::new(MIN_SEVERITY).is_ok());
    assert!(Severity::new(MAX_SEVERITY).is_ok());
    assert!(matches!(
        Severity::new(0),
        Err(HazardError::InvalidSeverity(0))
    ));
    assert!(matches!(
        Severity::new(6),
        Err(HazardError::InvalidSeverity(6))
    ));
}

#[test]
fn test_record_with_bad_severity_is_rejected() {
    let record = HazardRecord::new(2, 19.0, 72.0, 9, HazardStatus::Verified);
    assert!(matches!(
        Hazard::try_from(record),
        Err(HazardError::InvalidSeverity(9))
    ));
}

#[test]
fn test_record_off_the_globe_is_rejected() {
    let record = HazardRecord::new(3, 120.0, 72.0, 3, HazardStatus::Pending);
    assert!(matches!(
        Hazard::try_from(record),
        Err(HazardError::InvalidCoordinate(_))
    ));
}

#[test]
fn test_status_display_matches_wire_names() {
    assert_eq!(HazardStatus::Pending.to_string(), "pending");
    assert_eq!(HazardStatus::Verified.to_string(), "verified");
    assert_eq!(HazardStatus::Resolved.to_string(), "resolved");
}

#[test]
fn test_static_provider_returns_snapshot() {
    let records = vec![
        HazardRecord::new(1, 19.0760, 72.8777, 4, HazardStatus::Pending),
        HazardRecord::new(2, 19.0359, 72.8734, 3, HazardStatus::Verified),
    ];
    let provider = StaticHazardProvider::new(records.clone());

    assert_eq!(provider.current_hazards(), records);
    assert_eq!(provider.name(), "static");
}
