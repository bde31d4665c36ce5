//! ListTripsHandler - Query handler listing every trip.

use std::sync::Arc;

use crate::domain::trip::{Trip, TripError};
use crate::ports::TripRepository;

/// Handler for listing trips, earliest start first.
pub struct ListTripsHandler {
    trips: Arc<dyn TripRepository>,
}

impl ListTripsHandler {
    pub fn new(trips: Arc<dyn TripRepository>) -> Self {
        Self { trips }
    }

    pub async fn handle(&self) -> Result<Vec<Trip>, TripError> {
        self.trips
            .list_all()
            .await
            .map_err(|e| TripError::from_storage(e).log_storage("list_trips", "all"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryJourneyStore;
    use crate::domain::foundation::{EmailAddress, Timestamp, TripId};
    use crate::domain::trip::TripOwner;
    use chrono::{TimeZone, Utc};

    fn trip_starting(day: u32) -> Trip {
        let owner = TripOwner::new("Ana", EmailAddress::parse("owner_email", "ana@x.com").unwrap()).unwrap();
        let at = Timestamp::from_datetime(Utc.with_ymd_and_hms(2024, 6, day, 0, 0, 0).unwrap());
        Trip::new(TripId::new(), "Rio", at, at, owner).unwrap()
    }

    #[tokio::test]
    async fn empty_store_lists_nothing() {
        let handler = ListTripsHandler::new(Arc::new(InMemoryJourneyStore::new()));
        assert!(handler.handle().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn trips_are_ordered_by_start() {
        let store = InMemoryJourneyStore::new();
        for day in [20, 5, 12] {
            store.create_with_participants(&trip_starting(day), &[]).await.unwrap();
        }
        let handler = ListTripsHandler::new(Arc::new(store));

        let starts: Vec<String> = handler
            .handle()
            .await
            .unwrap()
            .iter()
            .map(|t| t.starts_at().to_date_string())
            .collect();

        assert_eq!(starts, vec!["2024-06-05", "2024-06-12", "2024-06-20"]);
    }
}
