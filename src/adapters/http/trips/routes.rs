//! HTTP routes for trip, participant and activity endpoints.

use std::time::Duration;

use axum::{
    routing::{get, patch},
    Router,
};
use http::HeaderName;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use super::handlers::{
    confirm_participant, confirm_trip, create_activity, create_trip, get_trip, list_activities,
    list_participants, list_trips, update_trip, TripHandlers,
};

/// Creates the trip router with all endpoints.
///
/// Routes:
/// - `POST /trips` - Create a trip
/// - `GET /trips` - List trips
/// - `GET /trips/:id` - Trip details
/// - `PUT /trips/:id` - Replace destination and dates
/// - `GET /trips/:id/confirm` - Confirm a trip (link target in the owner email)
/// - `GET /trips/:id/participants` - Participants of a trip
/// - `GET /trips/:id/activities` - Activities grouped by day
/// - `POST /trips/:id/activities` - Add an activity
/// - `PATCH /participants/:id/confirm` - Confirm attendance
pub fn trip_routes(handlers: TripHandlers) -> Router {
    Router::new()
        .route("/trips", get(list_trips).post(create_trip))
        .route("/trips/:id", get(get_trip).put(update_trip))
        .route("/trips/:id/confirm", get(confirm_trip))
        .route("/trips/:id/participants", get(list_participants))
        .route("/trips/:id/activities", get(list_activities).post(create_activity))
        .route("/participants/:id/confirm", patch(confirm_participant))
        .with_state(handlers)
}

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Trip routes wrapped with request ids, tracing and a per-request timeout.
///
/// Incoming `x-request-id` headers are kept; otherwise a UUID is assigned.
/// Either way the id is echoed on the response.
pub fn app_router(handlers: TripHandlers, request_timeout: Duration) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    // Outermost layer last: the id is set before tracing sees the request
    trip_routes(handlers)
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
}
