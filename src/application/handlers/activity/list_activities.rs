//! ListActivitiesHandler - Query handler for a trip's day-by-day agenda.

use std::sync::Arc;

use crate::application::handlers::ids::parse_trip_id;
use crate::domain::activity::{ActivityAgenda, DayActivities};
use crate::domain::trip::{EntityRef, TripError};
use crate::ports::{ActivityRepository, TripRepository};

/// Query for the activities of a trip.
#[derive(Debug, Clone)]
pub struct ListActivitiesQuery {
    pub trip_id: String,
}

/// Handler returning activities grouped by UTC calendar day.
pub struct ListActivitiesHandler {
    trips: Arc<dyn TripRepository>,
    activities: Arc<dyn ActivityRepository>,
}

impl ListActivitiesHandler {
    pub fn new(trips: Arc<dyn TripRepository>, activities: Arc<dyn ActivityRepository>) -> Self {
        Self { trips, activities }
    }

    pub async fn handle(&self, query: ListActivitiesQuery) -> Result<Vec<DayActivities>, TripError> {
        let trip_id = parse_trip_id(&query.trip_id)?;
        let storage = |e| TripError::for_trip(e, trip_id).log_storage("list_activities", trip_id);

        if self.trips.find_by_id(&trip_id).await.map_err(storage)?.is_none() {
            return Err(TripError::NotFound(EntityRef::Trip(trip_id)));
        }

        let activities = self
            .activities
            .list_by_trip(&trip_id)
            .await
            .map_err(storage)?;

        Ok(ActivityAgenda::group_by_day(activities))
    }
}
