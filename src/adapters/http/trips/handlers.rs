//! HTTP handlers for trip, participant and activity endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::{
    ConfirmParticipantCommand, ConfirmParticipantHandler, ConfirmTripCommand, ConfirmTripHandler,
    CreateActivityCommand, CreateActivityHandler, CreateTripCommand, CreateTripHandler,
    GetTripHandler, GetTripQuery, ListActivitiesHandler, ListActivitiesQuery,
    ListParticipantsHandler, ListParticipantsQuery, ListTripsHandler, UpdateTripCommand,
    UpdateTripHandler,
};
use crate::domain::trip::TripError;
use crate::ports::{
    ActivityRepository, NotificationScheduler, ParticipantRepository, TripRepository,
};

use super::dto::{
    CreateActivityRequest, CreateActivityResponse, CreateTripRequest, CreateTripResponse,
    ErrorResponse, GetTripResponse, ListActivitiesResponse, ListParticipantsResponse,
    ListTripsResponse, UpdateTripRequest,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct TripHandlers {
    create_trip: Arc<CreateTripHandler>,
    get_trip: Arc<GetTripHandler>,
    list_trips: Arc<ListTripsHandler>,
    update_trip: Arc<UpdateTripHandler>,
    confirm_trip: Arc<ConfirmTripHandler>,
    list_participants: Arc<ListParticipantsHandler>,
    confirm_participant: Arc<ConfirmParticipantHandler>,
    create_activity: Arc<CreateActivityHandler>,
    list_activities: Arc<ListActivitiesHandler>,
}

impl TripHandlers {
    /// Wire every handler against the given ports.
    pub fn new(
        trips: Arc<dyn TripRepository>,
        participants: Arc<dyn ParticipantRepository>,
        activities: Arc<dyn ActivityRepository>,
        notifications: Arc<dyn NotificationScheduler>,
    ) -> Self {
        Self {
            create_trip: Arc::new(CreateTripHandler::new(trips.clone(), notifications.clone())),
            get_trip: Arc::new(GetTripHandler::new(trips.clone())),
            list_trips: Arc::new(ListTripsHandler::new(trips.clone())),
            update_trip: Arc::new(UpdateTripHandler::new(trips.clone())),
            confirm_trip: Arc::new(ConfirmTripHandler::new(trips.clone(), notifications)),
            list_participants: Arc::new(ListParticipantsHandler::new(
                trips.clone(),
                participants.clone(),
            )),
            confirm_participant: Arc::new(ConfirmParticipantHandler::new(participants)),
            create_activity: Arc::new(CreateActivityHandler::new(activities.clone())),
            list_activities: Arc::new(ListActivitiesHandler::new(trips, activities)),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /trips - Create a trip and invite participants
pub async fn create_trip(
    State(handlers): State<TripHandlers>,
    payload: Result<Json<CreateTripRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(json) => json,
        Err(rejection) => return handle_rejection(rejection),
    };

    let cmd = CreateTripCommand {
        destination: req.destination,
        starts_at: req.starts_at,
        ends_at: req.ends_at,
        owner_name: req.owner_name,
        owner_email: req.owner_email,
        emails_to_invite: req.emails_to_invite,
    };

    match handlers.create_trip.handle(cmd).await {
        Ok(result) => {
            let response = CreateTripResponse {
                trip_id: result.trip_id().to_string(),
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_trip_error(e),
    }
}

/// GET /trips - List trips
pub async fn list_trips(State(handlers): State<TripHandlers>) -> Response {
    match handlers.list_trips.handle().await {
        Ok(trips) => {
            let response = ListTripsResponse {
                trips: trips.iter().map(Into::into).collect(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_trip_error(e),
    }
}

/// GET /trips/:id - Trip details
pub async fn get_trip(
    State(handlers): State<TripHandlers>,
    Path(trip_id): Path<String>,
) -> Response {
    match handlers.get_trip.handle(GetTripQuery { trip_id }).await {
        Ok(trip) => {
            let response = GetTripResponse {
                trip: (&trip).into(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_trip_error(e),
    }
}

/// PUT /trips/:id - Replace destination and dates
pub async fn update_trip(
    State(handlers): State<TripHandlers>,
    Path(trip_id): Path<String>,
    payload: Result<Json<UpdateTripRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(json) => json,
        Err(rejection) => return handle_rejection(rejection),
    };

    let cmd = UpdateTripCommand {
        trip_id,
        destination: req.destination,
        starts_at: req.starts_at,
        ends_at: req.ends_at,
    };

    match handlers.update_trip.handle(cmd).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => handle_trip_error(e),
    }
}

/// GET /trips/:id/confirm - Confirm a trip
pub async fn confirm_trip(
    State(handlers): State<TripHandlers>,
    Path(trip_id): Path<String>,
) -> Response {
    match handlers.confirm_trip.handle(ConfirmTripCommand { trip_id }).await {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => handle_trip_error(e),
    }
}

/// GET /trips/:id/participants - Participants of a trip
pub async fn list_participants(
    State(handlers): State<TripHandlers>,
    Path(trip_id): Path<String>,
) -> Response {
    match handlers
        .list_participants
        .handle(ListParticipantsQuery { trip_id })
        .await
    {
        Ok(participants) => {
            let response = ListParticipantsResponse {
                participants: participants.iter().map(Into::into).collect(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_trip_error(e),
    }
}

/// PATCH /participants/:id/confirm - Confirm attendance
pub async fn confirm_participant(
    State(handlers): State<TripHandlers>,
    Path(participant_id): Path<String>,
) -> Response {
    match handlers
        .confirm_participant
        .handle(ConfirmParticipantCommand { participant_id })
        .await
    {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => handle_trip_error(e),
    }
}

/// POST /trips/:id/activities - Add an activity
pub async fn create_activity(
    State(handlers): State<TripHandlers>,
    Path(trip_id): Path<String>,
    payload: Result<Json<CreateActivityRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(json) => json,
        Err(rejection) => return handle_rejection(rejection),
    };

    let cmd = CreateActivityCommand {
        trip_id,
        title: req.title,
        occurs_at: req.occurs_at,
    };

    match handlers.create_activity.handle(cmd).await {
        Ok(activity) => {
            let response = CreateActivityResponse {
                activity_id: activity.id().to_string(),
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_trip_error(e),
    }
}

/// GET /trips/:id/activities - Activities grouped by day
pub async fn list_activities(
    State(handlers): State<TripHandlers>,
    Path(trip_id): Path<String>,
) -> Response {
    match handlers
        .list_activities
        .handle(ListActivitiesQuery { trip_id })
        .await
    {
        Ok(days) => {
            let response = ListActivitiesResponse {
                activities: days.iter().map(Into::into).collect(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_trip_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

pub fn handle_trip_error(error: TripError) -> Response {
    let status = match &error {
        TripError::ValidationFailed { .. } => StatusCode::BAD_REQUEST,
        TripError::NotFound(_) => StatusCode::NOT_FOUND,
        TripError::AlreadyConfirmed(_) => StatusCode::CONFLICT,
        TripError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(ErrorResponse::from(&error))).into_response()
}

fn handle_rejection(rejection: JsonRejection) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::bad_request(rejection.body_text())),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{ParticipantId, TripId};
    use crate::domain::trip::EntityRef;

    #[test]
    fn validation_maps_to_400() {
        let response = handle_trip_error(TripError::validation("destination", "too short"));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_maps_to_404() {
        let response = handle_trip_error(TripError::NotFound(EntityRef::Participant(
            ParticipantId::new(),
        )));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn already_confirmed_maps_to_409() {
        let response = handle_trip_error(TripError::AlreadyConfirmed(EntityRef::Trip(TripId::new())));
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn storage_maps_to_500() {
        let response = handle_trip_error(TripError::storage("pool timed out"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
