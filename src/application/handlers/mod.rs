//! Application handlers.
//!
//! One handler per command or query. Each handler validates its input,
//! talks to the ports it was built with, and returns a `TripError`.

pub mod activity;
pub mod ids;
pub mod participant;
pub mod trip;

pub use activity::{
    CreateActivityCommand, CreateActivityHandler, ListActivitiesHandler, ListActivitiesQuery,
};
pub use participant::{
    ConfirmParticipantCommand, ConfirmParticipantHandler, ListParticipantsHandler,
    ListParticipantsQuery,
};
pub use trip::{
    ConfirmTripCommand, ConfirmTripHandler, CreateTripCommand, CreateTripHandler,
    CreateTripResult, GetTripHandler, GetTripQuery, ListTripsHandler, UpdateTripCommand,
    UpdateTripHandler,
};
