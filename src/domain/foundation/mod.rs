//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the Journey domain.

mod email;
mod errors;
mod ids;
mod participant_status;
mod timestamp;
mod trip_status;

pub use email::{EmailAddress, MAX_EMAIL_LENGTH};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ActivityId, ParticipantId, TripId};
pub use participant_status::ParticipantStatus;
pub use timestamp::Timestamp;
pub use trip_status::TripStatus;
