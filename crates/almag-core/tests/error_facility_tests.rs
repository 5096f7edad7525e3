use almag_core::errors::{AlmagError, ExError, ExErrorKind};

#[test]
fn test_key_not_found_verifiable_by_kind() {
    let ex: ExError = AlmagError::KeyNotFound {
        key: "max_tilt".to_string(),
    }
    .into();

    assert_eq!(ex.kind(), ExErrorKind::NotFound);
    assert_eq!(ex.code(), "ERR_NOT_FOUND");
    assert_eq!(ex.key(), Some("max_tilt"));
}

#[test]
fn test_read_only_distinct_from_not_found() {
    let ex: ExError = AlmagError::ReadOnlyKey {
        key: "serial_number".to_string(),
    }
    .into();

    assert_eq!(ex.kind(), ExErrorKind::ReadOnly);
    assert_ne!(ex.kind(), ExErrorKind::NotFound);
}

#[test]
fn test_not_calibrated_carries_command() {
    let ex: ExError = AlmagError::NotCalibrated {
        command: "SetTilt".to_string(),
    }
    .into();

    assert_eq!(ex.code(), "ERR_NOT_CALIBRATED");
    assert_eq!(ex.command(), Some("SetTilt"));
    assert!(ex.message().contains("not calibrated"));
}

#[test]
fn test_error_kind_code_mapping() {
    let kinds = vec![
        (ExErrorKind::InvalidInput, "ERR_INVALID_INPUT"),
        (ExErrorKind::TypeMismatch, "ERR_TYPE_MISMATCH"),
        (ExErrorKind::OutOfRange, "ERR_OUT_OF_RANGE"),
        (ExErrorKind::EmptyQueue, "ERR_EMPTY_QUEUE"),
        (ExErrorKind::InvalidConfig, "ERR_INVALID_CONFIG"),
    ];

    for (kind, expected_code) in kinds {
        assert_eq!(kind.code(), expected_code);
    }
}

#[test]
fn test_serialization_failure_has_own_kind() {
    let ex: ExError = AlmagError::Serialization {
        reason: "key must be a string".to_string(),
    }
    .into();

    assert_eq!(ex.kind(), ExErrorKind::Serialization);
    assert_eq!(ex.code(), "ERR_SERIALIZATION");
    assert_eq!(ex.op(), Some("to_json"));
    assert_ne!(ex.kind(), ExErrorKind::InvalidConfig);
}
