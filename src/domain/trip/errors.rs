//! Trip-context error types shared by trip, participant and activity handlers.

use std::fmt;

use crate::domain::foundation::{DomainError, ErrorCode, ParticipantId, TripId, ValidationError};

/// The entity a not-found or conflict error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityRef {
    Trip(TripId),
    Participant(ParticipantId),
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityRef::Trip(id) => write!(f, "Trip {}", id),
            EntityRef::Participant(id) => write!(f, "Participant {}", id),
        }
    }
}

/// Errors returned by the trip lifecycle handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TripError {
    /// Malformed or missing input, rejected before any side effect.
    ValidationFailed { field: String, message: String },
    /// Referenced trip or participant does not exist.
    NotFound(EntityRef),
    /// Confirmation attempted on an already-confirmed entity.
    AlreadyConfirmed(EntityRef),
    /// Storage failure.
    Storage(String),
}

impl TripError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        TripError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        TripError::Storage(message.into())
    }

    /// Wraps a port error from an operation with no single target entity.
    pub fn from_storage(err: DomainError) -> Self {
        TripError::Storage(err.to_string())
    }

    /// Maps a port or aggregate error raised while working on a trip.
    pub fn for_trip(err: DomainError, id: TripId) -> Self {
        Self::from_domain(err, EntityRef::Trip(id))
    }

    /// Maps a port or aggregate error raised while working on a participant.
    pub fn for_participant(err: DomainError, id: ParticipantId) -> Self {
        Self::from_domain(err, EntityRef::Participant(id))
    }

    fn from_domain(err: DomainError, entity: EntityRef) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => TripError::ValidationFailed {
                field: err.field().unwrap_or("unknown").to_string(),
                message: err.message,
            },
            ErrorCode::TripNotFound | ErrorCode::ParticipantNotFound => TripError::NotFound(entity),
            ErrorCode::TripAlreadyConfirmed | ErrorCode::ParticipantAlreadyConfirmed => {
                TripError::AlreadyConfirmed(entity)
            }
            ErrorCode::DatabaseError | ErrorCode::InternalError => TripError::Storage(err.to_string()),
        }
    }

    /// Logs storage failures with the operation and entity they belong to.
    ///
    /// Other variants are expected outcomes and pass through silently.
    pub fn log_storage(self, operation: &'static str, entity_id: impl fmt::Display) -> Self {
        if let TripError::Storage(detail) = &self {
            tracing::error!(operation, entity_id = %entity_id, error = %detail, "Storage operation failed");
        }
        self
    }

    pub fn is_storage(&self) -> bool {
        matches!(self, TripError::Storage(_))
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            TripError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            TripError::NotFound(EntityRef::Trip(_)) => ErrorCode::TripNotFound,
            TripError::NotFound(EntityRef::Participant(_)) => ErrorCode::ParticipantNotFound,
            TripError::AlreadyConfirmed(EntityRef::Trip(_)) => ErrorCode::TripAlreadyConfirmed,
            TripError::AlreadyConfirmed(EntityRef::Participant(_)) => {
                ErrorCode::ParticipantAlreadyConfirmed
            }
            TripError::Storage(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            TripError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            TripError::NotFound(entity) => format!("{} not found", entity),
            TripError::AlreadyConfirmed(entity) => format!("{} already confirmed", entity),
            TripError::Storage(msg) => format!("Storage error: {}", msg),
        }
    }
}

impl fmt::Display for TripError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for TripError {}

impl From<ValidationError> for TripError {
    fn from(err: ValidationError) -> Self {
        TripError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_code_maps_to_entity() {
        let id = TripId::new();
        let err = TripError::for_trip(DomainError::new(ErrorCode::TripNotFound, "gone"), id);
        assert_eq!(err, TripError::NotFound(EntityRef::Trip(id)));
        assert_eq!(err.code(), ErrorCode::TripNotFound);
    }

    #[test]
    fn already_confirmed_maps_for_participant() {
        let id = ParticipantId::new();
        let err = TripError::for_participant(
            DomainError::new(ErrorCode::ParticipantAlreadyConfirmed, "dup"),
            id,
        );
        assert_eq!(err, TripError::AlreadyConfirmed(EntityRef::Participant(id)));
    }

    #[test]
    fn validation_keeps_field() {
        let err = TripError::for_trip(DomainError::validation("destination", "too short"), TripId::new());
        assert_eq!(
            err,
            TripError::ValidationFailed {
                field: "destination".to_string(),
                message: "too short".to_string()
            }
        );
    }

    #[test]
    fn database_errors_become_storage() {
        let err = TripError::for_trip(DomainError::database("fetch trip", "timeout"), TripId::new());
        assert!(err.is_storage());
        assert_eq!(err.code(), ErrorCode::DatabaseError);
    }

    #[test]
    fn value_object_errors_keep_field() {
        let err: TripError = ValidationError::empty_field("owner_name").into();
        assert!(matches!(err, TripError::ValidationFailed { ref field, .. } if field == "owner_name"));
    }

    #[test]
    fn log_storage_passes_error_through() {
        let err = TripError::storage("boom").log_storage("confirm_trip", "abc");
        assert_eq!(err, TripError::Storage("boom".to_string()));
    }
}
