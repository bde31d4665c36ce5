//! CreateActivityHandler - Command handler for scheduling an activity.

use std::sync::Arc;

use crate::application::handlers::ids::parse_trip_id;
use crate::domain::activity::Activity;
use crate::domain::foundation::{ActivityId, Timestamp};
use crate::domain::trip::TripError;
use crate::ports::ActivityRepository;

/// Command to add an activity to a trip.
#[derive(Debug, Clone)]
pub struct CreateActivityCommand {
    pub trip_id: String,
    pub title: String,
    pub occurs_at: Option<Timestamp>,
}

/// Handler for creating activities.
pub struct CreateActivityHandler {
    activities: Arc<dyn ActivityRepository>,
}

impl CreateActivityHandler {
    pub fn new(activities: Arc<dyn ActivityRepository>) -> Self {
        Self { activities }
    }

    pub async fn handle(&self, cmd: CreateActivityCommand) -> Result<Activity, TripError> {
        let trip_id = parse_trip_id(&cmd.trip_id)?;
        let occurs_at = cmd
            .occurs_at
            .ok_or_else(|| TripError::validation("occurs_at", "Activity date is required"))?;

        let activity = Activity::new(ActivityId::new(), trip_id, &cmd.title, occurs_at)
            .map_err(|e| TripError::for_trip(e, trip_id))?;

        // The repository rejects activities for unknown trips
        self.activities
            .save(&activity)
            .await
            .map_err(|e| TripError::for_trip(e, trip_id).log_storage("create_activity", trip_id))?;

        tracing::info!(
            trip_id = %trip_id,
            activity_id = %activity.id(),
            "Activity created"
        );
        Ok(activity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryJourneyStore;
    use crate::domain::foundation::{EmailAddress, TripId};
    use crate::domain::trip::{EntityRef, Trip, TripOwner};
    use crate::ports::TripRepository;

    async fn seeded() -> (InMemoryJourneyStore, TripId) {
        let store = InMemoryJourneyStore::new();
        let owner = TripOwner::new("Ana", EmailAddress::parse("owner_email", "ana@x.com").unwrap()).unwrap();
        let now = Timestamp::now();
        let trip = Trip::new(TripId::new(), "Rio", now, now, owner).unwrap();
        store.create_with_participants(&trip, &[]).await.unwrap();
        (store, *trip.id())
    }

    fn command(trip_id: &TripId, title: &str) -> CreateActivityCommand {
        CreateActivityCommand {
            trip_id: trip_id.to_string(),
            title: title.to_string(),
            occurs_at: Some(Timestamp::now()),
        }
    }

    #[tokio::test]
    async fn stores_activity_for_existing_trip() {
        let (store, trip_id) = seeded().await;
        let handler = CreateActivityHandler::new(Arc::new(store.clone()));

        let activity = handler.handle(command(&trip_id, " Beach ")).await.unwrap();

        assert_eq!(activity.title(), "Beach");
        let stored = ActivityRepository::list_by_trip(&store, &trip_id).await.unwrap();
        assert_eq!(stored, vec![activity]);
    }

    #[tokio::test]
    async fn unknown_trip_is_not_found() {
        let handler = CreateActivityHandler::new(Arc::new(InMemoryJourneyStore::new()));
        let missing = TripId::new();

        let err = handler.handle(command(&missing, "Beach")).await.unwrap_err();

        assert_eq!(err, TripError::NotFound(EntityRef::Trip(missing)));
    }

    #[tokio::test]
    async fn blank_title_or_missing_date_is_rejected() {
        let (store, trip_id) = seeded().await;
        let handler = CreateActivityHandler::new(Arc::new(store));

        assert!(matches!(
            handler.handle(command(&trip_id, "   ")).await,
            Err(TripError::ValidationFailed { ref field, .. }) if field == "title"
        ));

        let mut undated = command(&trip_id, "Beach");
        undated.occurs_at = None;
        assert!(matches!(
            handler.handle(undated).await,
            Err(TripError::ValidationFailed { ref field, .. }) if field == "occurs_at"
        ));
    }
}
