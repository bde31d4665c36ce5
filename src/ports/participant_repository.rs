//! Participant repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ParticipantId, TripId};
use crate::domain::participant::Participant;

/// Repository port for participants.
///
/// Participants are created together with their trip through
/// [`TripRepository::create_with_participants`](super::TripRepository).
#[async_trait]
pub trait ParticipantRepository: Send + Sync {
    /// Find a participant by ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &ParticipantId) -> Result<Option<Participant>, DomainError>;

    /// List the participants of a trip in creation order.
    ///
    /// Returns an empty list for unknown trips.
    async fn list_by_trip(&self, trip_id: &TripId) -> Result<Vec<Participant>, DomainError>;

    /// Mark the participant confirmed if, and only if, it is not confirmed yet.
    ///
    /// # Errors
    ///
    /// - `ParticipantNotFound` if the participant doesn't exist
    /// - `ParticipantAlreadyConfirmed` if it was already confirmed
    /// - `DatabaseError` on persistence failure
    async fn confirm(&self, id: &ParticipantId) -> Result<(), DomainError>;
}
