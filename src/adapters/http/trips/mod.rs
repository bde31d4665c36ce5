//! HTTP adapter for trips, participants and activities.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::{handle_trip_error, TripHandlers};
pub use routes::{app_router, trip_routes};
