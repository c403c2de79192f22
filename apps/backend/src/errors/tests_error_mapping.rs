// Unit tests for error mapping - pure domain logic without transport or storage
use crate::error::ErrorCategory;
use crate::errors::domain::{
    ConflictKind, DomainError, InfraErrorKind, NotFoundKind, ValidationKind,
};
use crate::{AppError, ErrorCode};

#[test]
fn maps_rule_violations_to_validation() {
    let de = DomainError::validation(ValidationKind::BlockedByWater, "water");
    let app: AppError = de.into();
    assert_eq!(app.code(), ErrorCode::BlockedByWater);
    assert_eq!(app.category(), ErrorCategory::Validation);

    let de = DomainError::validation(ValidationKind::InvalidRank("empty".into()), "empty");
    let app: AppError = de.into();
    assert_eq!(app.code().as_str(), "INVALID_RANK");
    assert_eq!(app.detail(), "empty");
}

#[test]
fn maps_request_shape_to_input() {
    let de = DomainError::validation(ValidationKind::OutOfBounds, "cell 120");
    let app: AppError = de.into();
    assert!(matches!(app, AppError::BadRequest { .. }));
    assert_eq!(app.category(), ErrorCategory::Input);

    let json_err = serde_json::from_str::<u8>("\"x\"").unwrap_err();
    let app: AppError = json_err.into();
    assert_eq!(app.code(), ErrorCode::BadRequest);
    assert_eq!(app.category(), ErrorCategory::Input);
}

#[test]
fn maps_conflicts() {
    let lock = DomainError::conflict(ConflictKind::OptimisticLock, "stale");
    let app: AppError = lock.into();
    assert_eq!(app.code().as_str(), "OPTIMISTIC_LOCK");
    assert_eq!(app.category(), ErrorCategory::Conflict);

    // Test generic conflict fallback
    let other = DomainError::conflict(ConflictKind::Other("x".to_string()), "generic conflict");
    let app: AppError = other.into();
    assert_eq!(app.code().as_str(), "CONFLICT");
}

#[test]
fn maps_not_found() {
    let nf = DomainError::not_found(NotFoundKind::Game, "no game");
    let app: AppError = nf.into();
    assert_eq!(app.code().as_str(), "GAME_NOT_FOUND");
    assert_eq!(app.category(), ErrorCategory::NotFound);
}

#[test]
fn maps_infra_to_collaborator() {
    let app: AppError = DomainError::infra(InfraErrorKind::Storage, "disk").into();
    assert!(matches!(app, AppError::Storage { .. }));
    assert_eq!(app.category(), ErrorCategory::Collaborator);

    let app: AppError = DomainError::infra(InfraErrorKind::Delivery, "broker").into();
    assert_eq!(app.code(), ErrorCode::DeliveryError);
    assert_eq!(app.category(), ErrorCategory::Collaborator);

    let app: AppError = DomainError::infra(InfraErrorKind::DataCorruption, "bad row").into();
    assert_eq!(app.code(), ErrorCode::DataCorruption);
    assert_eq!(app.category(), ErrorCategory::Internal);
}

#[test]
fn unauthorized_has_fixed_detail() {
    let app = AppError::unauthorized();
    assert_eq!(app.code(), ErrorCode::Unauthorized);
    assert_eq!(app.detail(), "Authentication required");
    assert_eq!(app.category(), ErrorCategory::Unauthenticated);
}
