//! Tests for coordinate validation

use super::*;

#[test]
fn test_mumbai_coordinates_are_valid() {
    // Mumbai: 19.0760°N, 72.8777°E
    let result = Coordinate::new(19.0760, 72.8777);
    assert!(result.is_ok(), "Valid coordinates should not error");

    let coord = result.unwrap();
    assert_eq!(coord.lat, 19.0760);
    assert_eq!(coord.lng, 72.8777);
}

#[test]
fn test_poles_and_antimeridian_are_inclusive_bounds() {
    assert!(Coordinate::new(90.0, 0.0).is_ok());
    assert!(Coordinate::new(-90.0, 0.0).is_ok());
    assert!(Coordinate::new(0.0, 180.0).is_ok());
    assert!(Coordinate::new(0.0, -180.0).is_ok());
}

#[test]
fn test_invalid_latitude_too_high() {
    let result = Coordinate::new(90.5, 0.0);
    assert!(matches!(result, Err(CoordError::InvalidLatitude(_))));
}

#[test]
fn test_invalid_longitude_too_low() {
    let result = Coordinate::new(0.0, -180.1);
    assert!(matches!(result, Err(CoordError::InvalidLongitude(_))));
}

#[test]
fn test_non_finite_values_rejected() {
    assert!(Coordinate::new(f64::NAN, 0.0).is_err());
    assert!(Coordinate::new(0.0, f64::INFINITY).is_err());
}

#[test]
fn test_zoom_range() {
    assert!(validate_zoom(MIN_ZOOM).is_ok());
    assert!(validate_zoom(LOCATE_ZOOM).is_ok());
    assert!(validate_zoom(MAX_ZOOM).is_ok());
    assert!(matches!(
        validate_zoom(MAX_ZOOM + 1),
        Err(CoordError::InvalidZoom(_))
    ));
}

#[test]
fn test_display_format() {
    let coord = Coordinate::new(19.0760, 72.8777).unwrap();
    assert_eq!(coord.to_string(), "(19.0760, 72.8777)");
}
