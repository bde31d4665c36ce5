//! GetTripHandler - Query handler for a single trip.

use std::sync::Arc;

use crate::application::handlers::ids::parse_trip_id;
use crate::domain::trip::{EntityRef, Trip, TripError};
use crate::ports::TripRepository;

/// Query to get a trip by its textual ID.
#[derive(Debug, Clone)]
pub struct GetTripQuery {
    pub trip_id: String,
}

/// Handler for retrieving trip details.
pub struct GetTripHandler {
    trips: Arc<dyn TripRepository>,
}

impl GetTripHandler {
    pub fn new(trips: Arc<dyn TripRepository>) -> Self {
        Self { trips }
    }

    pub async fn handle(&self, query: GetTripQuery) -> Result<Trip, TripError> {
        let trip_id = parse_trip_id(&query.trip_id)?;

        self.trips
            .find_by_id(&trip_id)
            .await
            .map_err(|e| TripError::for_trip(e, trip_id).log_storage("get_trip", trip_id))?
            .ok_or(TripError::NotFound(EntityRef::Trip(trip_id)))
    }
}
