//! ListParticipantsHandler - Query handler for a trip's participants.

use std::sync::Arc;

use crate::application::handlers::ids::parse_trip_id;
use crate::domain::participant::Participant;
use crate::domain::trip::{EntityRef, TripError};
use crate::ports::{ParticipantRepository, TripRepository};

/// Query for the participants of a trip.
#[derive(Debug, Clone)]
pub struct ListParticipantsQuery {
    pub trip_id: String,
}

/// Handler listing participants in creation order (owner first).
pub struct ListParticipantsHandler {
    trips: Arc<dyn TripRepository>,
    participants: Arc<dyn ParticipantRepository>,
}

impl ListParticipantsHandler {
    pub fn new(
        trips: Arc<dyn TripRepository>,
        participants: Arc<dyn ParticipantRepository>,
    ) -> Self {
        Self {
            trips,
            participants,
        }
    }

    pub async fn handle(&self, query: ListParticipantsQuery) -> Result<Vec<Participant>, TripError> {
        let trip_id = parse_trip_id(&query.trip_id)?;
        let storage = |e| TripError::for_trip(e, trip_id).log_storage("list_participants", trip_id);

        if self.trips.find_by_id(&trip_id).await.map_err(storage)?.is_none() {
            return Err(TripError::NotFound(EntityRef::Trip(trip_id)));
        }

        self.participants
            .list_by_trip(&trip_id)
            .await
            .map_err(storage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryJourneyStore;
    use crate::domain::foundation::{EmailAddress, Timestamp, TripId};
    use crate::domain::trip::{Trip, TripOwner};

    fn handler(store: &InMemoryJourneyStore) -> ListParticipantsHandler {
        ListParticipantsHandler::new(Arc::new(store.clone()), Arc::new(store.clone()))
    }

    #[tokio::test]
    async fn lists_owner_first_then_invitees() {
        let store = InMemoryJourneyStore::new();
        let owner = TripOwner::new("Ana", EmailAddress::parse("owner_email", "ana@x.com").unwrap()).unwrap();
        let now = Timestamp::now();
        let trip = Trip::new(TripId::new(), "Rio", now, now, owner).unwrap();
        let bob = Participant::invited(*trip.id(), EmailAddress::parse("email", "bob@x.com").unwrap());
        let ana = Participant::owner(*trip.id(), trip.owner());
        store.create_with_participants(&trip, &[ana, bob]).await.unwrap();

        let listed = handler(&store)
            .handle(ListParticipantsQuery {
                trip_id: trip.id().to_string(),
            })
            .await
            .unwrap();

        let summary: Vec<(&str, bool)> = listed
            .iter()
            .map(|p| (p.email().as_str(), p.is_confirmed()))
            .collect();
        assert_eq!(summary, vec![("ana@x.com", true), ("bob@x.com", false)]);
    }

    #[tokio::test]
    async fn unknown_trip_is_not_found() {
        let store = InMemoryJourneyStore::new();
        let id = TripId::new();

        let err = handler(&store)
            .handle(ListParticipantsQuery {
                trip_id: id.to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(err, TripError::NotFound(EntityRef::Trip(id)));
    }
}
