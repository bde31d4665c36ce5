//! ConfirmTripHandler - Command handler for the Draft -> Confirmed transition.

use std::sync::Arc;

use crate::application::handlers::ids::parse_trip_id;
use crate::domain::foundation::TripId;
use crate::domain::trip::TripError;
use crate::ports::{NotificationScheduler, TripNotification, TripRepository};

/// Command to confirm a trip.
#[derive(Debug, Clone)]
pub struct ConfirmTripCommand {
    pub trip_id: String,
}

/// Handler for confirming trips.
///
/// Confirmation is not idempotent: a second call fails with
/// `AlreadyConfirmed`. The storage write is the commit point; participant
/// emails are scheduled afterwards and cannot turn success into failure.
pub struct ConfirmTripHandler {
    trips: Arc<dyn TripRepository>,
    notifications: Arc<dyn NotificationScheduler>,
}

impl ConfirmTripHandler {
    pub fn new(
        trips: Arc<dyn TripRepository>,
        notifications: Arc<dyn NotificationScheduler>,
    ) -> Self {
        Self {
            trips,
            notifications,
        }
    }

    pub async fn handle(&self, cmd: ConfirmTripCommand) -> Result<TripId, TripError> {
        let trip_id = parse_trip_id(&cmd.trip_id)?;

        self.trips
            .confirm(&trip_id)
            .await
            .map_err(|e| TripError::for_trip(e, trip_id).log_storage("confirm_trip", trip_id))?;

        tracing::info!(trip_id = %trip_id, "Trip confirmed");

        self.notifications
            .schedule(TripNotification::ParticipantsTripConfirmed(trip_id));

        Ok(trip_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryJourneyStore;
    use crate::adapters::notifications::RecordingScheduler;
    use crate::domain::foundation::{EmailAddress, Timestamp};
    use crate::domain::trip::{EntityRef, Trip, TripOwner};

    async fn setup() -> (ConfirmTripHandler, InMemoryJourneyStore, Arc<RecordingScheduler>, TripId) {
        let store = InMemoryJourneyStore::new();
        let owner = TripOwner::new("Ana", EmailAddress::parse("owner_email", "ana@x.com").unwrap()).unwrap();
        let now = Timestamp::now();
        let trip = Trip::new(TripId::new(), "Rio", now, now, owner).unwrap();
        store.create_with_participants(&trip, &[]).await.unwrap();

        let scheduler = Arc::new(RecordingScheduler::new());
        let handler = ConfirmTripHandler::new(Arc::new(store.clone()), scheduler.clone());
        (handler, store, scheduler, *trip.id())
    }

    fn command(id: &TripId) -> ConfirmTripCommand {
        ConfirmTripCommand {
            trip_id: id.to_string(),
        }
    }

    #[tokio::test]
    async fn confirms_draft_trip_and_schedules_participant_emails() {
        let (handler, store, scheduler, id) = setup().await;

        handler.handle(command(&id)).await.unwrap();

        assert!(store.find_by_id(&id).await.unwrap().unwrap().is_confirmed());
        assert_eq!(
            scheduler.scheduled(),
            vec![TripNotification::ParticipantsTripConfirmed(id)]
        );
    }

    #[tokio::test]
    async fn second_confirmation_is_rejected_without_notification() {
        let (handler, _, scheduler, id) = setup().await;

        handler.handle(command(&id)).await.unwrap();
        let err = handler.handle(command(&id)).await.unwrap_err();

        assert_eq!(err, TripError::AlreadyConfirmed(EntityRef::Trip(id)));
        assert_eq!(scheduler.scheduled().len(), 1);
    }

    #[tokio::test]
    async fn unknown_trip_is_not_found() {
        let (handler, _, scheduler, _) = setup().await;
        let missing = TripId::new();

        let err = handler.handle(command(&missing)).await.unwrap_err();

        assert_eq!(err, TripError::NotFound(EntityRef::Trip(missing)));
        assert!(scheduler.scheduled().is_empty());
    }

    #[tokio::test]
    async fn storage_failure_schedules_nothing() {
        let (handler, store, scheduler, id) = setup().await;
        store.fail_writes(true);

        assert!(handler.handle(command(&id)).await.unwrap_err().is_storage());
        assert!(scheduler.scheduled().is_empty());
    }
}
