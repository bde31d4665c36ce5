//! Trip repository port.
//!
//! Defines the contract for persisting and retrieving Trip aggregates,
//! including the atomic "trip + owner + invitees" creation.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, Timestamp, TripId};
use crate::domain::participant::Participant;
use crate::domain::trip::Trip;

/// Repository port for Trip persistence.
///
/// Implementations must ensure:
/// - `create_with_participants` is all-or-nothing
/// - `confirm` is a conditional write, so concurrent confirmations of the
///   same trip yield exactly one success
/// - not-found is reported as `TripNotFound`, never as `DatabaseError`
#[async_trait]
pub trait TripRepository: Send + Sync {
    /// Persist a new trip together with its participants in one transaction.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure (nothing is left behind)
    async fn create_with_participants(
        &self,
        trip: &Trip,
        participants: &[Participant],
    ) -> Result<(), DomainError>;

    /// Find a trip by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &TripId) -> Result<Option<Trip>, DomainError>;

    /// List all trips ordered by `starts_at` ascending.
    async fn list_all(&self) -> Result<Vec<Trip>, DomainError>;

    /// Replace destination and dates, leaving the confirmation flag untouched.
    ///
    /// # Errors
    ///
    /// - `TripNotFound` if the trip doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update_details(
        &self,
        id: &TripId,
        destination: &str,
        starts_at: &Timestamp,
        ends_at: &Timestamp,
    ) -> Result<(), DomainError>;

    /// Mark the trip confirmed if, and only if, it is not confirmed yet.
    ///
    /// # Errors
    ///
    /// - `TripNotFound` if the trip doesn't exist
    /// - `TripAlreadyConfirmed` if it was already confirmed
    /// - `DatabaseError` on persistence failure
    async fn confirm(&self, id: &TripId) -> Result<(), DomainError>;
}
