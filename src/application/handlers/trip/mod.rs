//! Trip command and query handlers.

mod confirm_trip;
mod create_trip;
mod get_trip;
mod list_trips;
mod update_trip;

pub use confirm_trip::{ConfirmTripCommand, ConfirmTripHandler};
pub use create_trip::{CreateTripCommand, CreateTripHandler, CreateTripResult};
pub use get_trip::{GetTripHandler, GetTripQuery};
pub use list_trips::ListTripsHandler;
pub use update_trip::{UpdateTripCommand, UpdateTripHandler};
