//! Tests for error types

use parking_allocator::core::{ParkingError, VehicleKind};

#[test]
fn test_no_available_spot_error() {
    let err = ParkingError::NoAvailableSpot {
        kind: VehicleKind::Bus,
        required: 5,
    };
    assert_eq!(
        format!("{}", err),
        "no available spot for bus (needs 5 contiguous slots)"
    );
    assert!(err.is_retryable());
}

#[test]
fn test_invalid_config_error() {
    let err = ParkingError::InvalidConfig("level_count must be greater than 0".to_string());
    assert_eq!(
        format!("{}", err),
        "invalid config: level_count must be greater than 0"
    );
    assert!(!err.is_retryable());
}

#[test]
fn test_errors_convert_into_anyhow() {
    let err: anyhow::Error = ParkingError::NoAvailableSpot {
        kind: VehicleKind::Car,
        required: 3,
    }
    .into();
    assert!(err.downcast_ref::<ParkingError>().is_some());
}

#[test]
fn test_kind_mismatch_error() {
    let err = ParkingError::KindMismatch {
        id: "KA-01".to_string(),
        parked: VehicleKind::Car,
        requested: VehicleKind::Bus,
    };
    assert_eq!(format!("{}", err), "vehicle KA-01 is parked as car, not bus");
    assert!(!err.is_retryable());
}
