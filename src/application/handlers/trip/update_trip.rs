//! UpdateTripHandler - Command handler replacing a trip's details.

use std::sync::Arc;

use crate::application::handlers::ids::parse_trip_id;
use crate::domain::foundation::Timestamp;
use crate::domain::trip::{Trip, TripError};
use crate::ports::TripRepository;

/// Command to replace destination and dates of a trip.
#[derive(Debug, Clone)]
pub struct UpdateTripCommand {
    pub trip_id: String,
    pub destination: String,
    pub starts_at: Option<Timestamp>,
    pub ends_at: Option<Timestamp>,
}

/// Handler for updating trips.
///
/// The confirmation status is never touched.
pub struct UpdateTripHandler {
    trips: Arc<dyn TripRepository>,
}

impl UpdateTripHandler {
    pub fn new(trips: Arc<dyn TripRepository>) -> Self {
        Self { trips }
    }

    pub async fn handle(&self, cmd: UpdateTripCommand) -> Result<(), TripError> {
        let trip_id = parse_trip_id(&cmd.trip_id)?;
        let starts_at = cmd
            .starts_at
            .ok_or_else(|| TripError::validation("starts_at", "Start date is required"))?;
        let ends_at = cmd
            .ends_at
            .ok_or_else(|| TripError::validation("ends_at", "End date is required"))?;

        let destination = Trip::validate_destination(&cmd.destination)
            .map_err(|e| TripError::for_trip(e, trip_id))?;
        Trip::validate_dates(&starts_at, &ends_at).map_err(|e| TripError::for_trip(e, trip_id))?;

        self.trips
            .update_details(&trip_id, &destination, &starts_at, &ends_at)
            .await
            .map_err(|e| TripError::for_trip(e, trip_id).log_storage("update_trip", trip_id))?;

        tracing::info!(trip_id = %trip_id, "Trip updated");
        Ok(())
    }
}
