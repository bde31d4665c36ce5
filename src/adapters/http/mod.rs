//! HTTP adapters - REST API implementations.

pub mod trips;

pub use trips::{app_router, trip_routes, TripHandlers};
