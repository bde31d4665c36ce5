//! Participant entity.
//!
//! A participant is a person invited to a trip. It references its trip by ID
//! and carries its own confirmation state, independent of the trip's.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    DomainError, EmailAddress, ErrorCode, ParticipantId, ParticipantStatus, TripId,
};
use crate::domain::trip::TripOwner;

/// Participant of a trip.
///
/// # Invariants
///
/// - belongs to exactly one trip
/// - `status` only moves Unconfirmed -> Confirmed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    id: ParticipantId,
    trip_id: TripId,
    email: EmailAddress,
    name: Option<String>,
    status: ParticipantStatus,
}

impl Participant {
    /// Creates an unconfirmed, unnamed participant for an invited email.
    pub fn invited(trip_id: TripId, email: EmailAddress) -> Self {
        Self {
            id: ParticipantId::new(),
            trip_id,
            email,
            name: None,
            status: ParticipantStatus::Unconfirmed,
        }
    }

    /// Creates the owner's own participant record, confirmed from the start.
    pub fn owner(trip_id: TripId, owner: &TripOwner) -> Self {
        Self {
            id: ParticipantId::new(),
            trip_id,
            email: owner.email().clone(),
            name: Some(owner.name().to_string()),
            status: ParticipantStatus::Confirmed,
        }
    }

    /// Reconstitute a participant from persistence (no validation).
    pub fn reconstitute(
        id: ParticipantId,
        trip_id: TripId,
        email: EmailAddress,
        name: Option<String>,
        status: ParticipantStatus,
    ) -> Self {
        Self {
            id,
            trip_id,
            email,
            name,
            status,
        }
    }

    pub fn id(&self) -> &ParticipantId {
        &self.id
    }

    pub fn trip_id(&self) -> &TripId {
        &self.trip_id
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn status(&self) -> ParticipantStatus {
        self.status
    }

    pub fn is_confirmed(&self) -> bool {
        self.status.is_confirmed()
    }

    /// Confirm attendance.
    ///
    /// # Errors
    ///
    /// - `ParticipantAlreadyConfirmed` if already confirmed
    pub fn confirm(&mut self) -> Result<(), DomainError> {
        if !self.status.can_transition_to(&ParticipantStatus::Confirmed) {
            return Err(DomainError::new(
                ErrorCode::ParticipantAlreadyConfirmed,
                format!("Participant already confirmed: {}", self.id),
            ));
        }
        self.status = ParticipantStatus::Confirmed;
        Ok(())
    }
}
