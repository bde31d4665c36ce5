//! In-Memory Journey Store
//!
//! Implements the trip, participant and activity repository ports over one
//! shared lock, so every multi-row write is atomic and every confirmation is
//! a check-and-set. Useful for testing and local development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::activity::Activity;
use crate::domain::foundation::{DomainError, ErrorCode, ParticipantId, Timestamp, TripId};
use crate::domain::participant::Participant;
use crate::domain::trip::Trip;
use crate::ports::{ActivityRepository, ParticipantRepository, TripRepository};

#[derive(Debug, Default)]
struct State {
    trips: HashMap<TripId, Trip>,
    participants: Vec<Participant>,
    activities: Vec<Activity>,
}

/// In-memory storage for trips, participants and activities.
///
/// Cloning shares the underlying data.
#[derive(Debug, Clone, Default)]
pub struct InMemoryJourneyStore {
    state: Arc<RwLock<State>>,
    fail_reads: Arc<AtomicBool>,
    fail_writes: Arc<AtomicBool>,
}

impl InMemoryJourneyStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent read fail with `DatabaseError` (for tests).
    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Make every subsequent write fail with `DatabaseError` (for tests).
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of stored trips.
    pub async fn trip_count(&self) -> usize {
        self.state.read().await.trips.len()
    }

    /// Number of stored participants across all trips.
    pub async fn participant_count(&self) -> usize {
        self.state.read().await.participants.len()
    }

    fn check_read(&self, operation: &str) -> Result<(), DomainError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(DomainError::database(operation, "simulated read failure"));
        }
        Ok(())
    }

    fn check_write(&self, operation: &str) -> Result<(), DomainError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(DomainError::database(operation, "simulated write failure"));
        }
        Ok(())
    }
}

fn trip_not_found(id: &TripId) -> DomainError {
    DomainError::new(ErrorCode::TripNotFound, format!("Trip not found: {}", id))
}

#[async_trait]
impl TripRepository for InMemoryJourneyStore {
    async fn create_with_participants(
        &self,
        trip: &Trip,
        participants: &[Participant],
    ) -> Result<(), DomainError> {
        self.check_write("create trip")?;
        let mut state = self.state.write().await;

        if state.trips.contains_key(trip.id()) {
            return Err(DomainError::database("create trip", "duplicate trip id"));
        }
        if participants.iter().any(|p| p.trip_id() != trip.id()) {
            return Err(DomainError::database(
                "create trip",
                "participant references another trip",
            ));
        }

        state.trips.insert(*trip.id(), trip.clone());
        state.participants.extend(participants.iter().cloned());
        Ok(())
    }

    async fn find_by_id(&self, id: &TripId) -> Result<Option<Trip>, DomainError> {
        self.check_read("fetch trip")?;
        Ok(self.state.read().await.trips.get(id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Trip>, DomainError> {
        self.check_read("list trips")?;
        let mut trips: Vec<Trip> = self.state.read().await.trips.values().cloned().collect();
        // Same order as the Postgres adapter: start date, then id
        trips.sort_by_key(|t| (*t.starts_at(), *t.id().as_uuid()));
        Ok(trips)
    }

    async fn update_details(
        &self,
        id: &TripId,
        destination: &str,
        starts_at: &Timestamp,
        ends_at: &Timestamp,
    ) -> Result<(), DomainError> {
        self.check_write("update trip")?;
        let mut state = self.state.write().await;
        let trip = state.trips.get_mut(id).ok_or_else(|| trip_not_found(id))?;
        trip.update_details(destination, *starts_at, *ends_at)
    }

    async fn confirm(&self, id: &TripId) -> Result<(), DomainError> {
        self.check_write("confirm trip")?;
        let mut state = self.state.write().await;
        let trip = state.trips.get_mut(id).ok_or_else(|| trip_not_found(id))?;
        trip.confirm()
    }
}

#[async_trait]
impl ParticipantRepository for InMemoryJourneyStore {
    async fn find_by_id(&self, id: &ParticipantId) -> Result<Option<Participant>, DomainError> {
        self.check_read("fetch participant")?;
        let state = self.state.read().await;
        Ok(state.participants.iter().find(|p| p.id() == id).cloned())
    }

    async fn list_by_trip(&self, trip_id: &TripId) -> Result<Vec<Participant>, DomainError> {
        self.check_read("list participants")?;
        let state = self.state.read().await;
        Ok(state
            .participants
            .iter()
            .filter(|p| p.trip_id() == trip_id)
            .cloned()
            .collect())
    }

    async fn confirm(&self, id: &ParticipantId) -> Result<(), DomainError> {
        self.check_write("confirm participant")?;
        let mut state = self.state.write().await;
        let participant = state
            .participants
            .iter_mut()
            .find(|p| p.id() == id)
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::ParticipantNotFound,
                    format!("Participant not found: {}", id),
                )
            })?;
        participant.confirm()
    }
}

#[async_trait]
impl ActivityRepository for InMemoryJourneyStore {
    async fn save(&self, activity: &Activity) -> Result<(), DomainError> {
        self.check_write("insert activity")?;
        let mut state = self.state.write().await;
        if !state.trips.contains_key(activity.trip_id()) {
            return Err(trip_not_found(activity.trip_id()));
        }
        state.activities.push(activity.clone());
        Ok(())
    }

    async fn list_by_trip(&self, trip_id: &TripId) -> Result<Vec<Activity>, DomainError> {
        self.check_read("list activities")?;
        let state = self.state.read().await;
        Ok(state
            .activities
            .iter()
            .filter(|a| a.trip_id() == trip_id)
            .cloned()
            .collect())
    }
}
