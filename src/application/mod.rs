//! Application layer - Commands, Queries, and Handlers.
//!
//! Orchestrates domain operations and coordinates between ports. Command
//! handlers (create, update, confirm) and query handlers (get, list) are
//! kept separate.

pub mod handlers;

pub use handlers::{
    // Trip handlers
    ConfirmTripCommand, ConfirmTripHandler, CreateTripCommand, CreateTripHandler,
    CreateTripResult, GetTripHandler, GetTripQuery, ListTripsHandler, UpdateTripCommand,
    UpdateTripHandler,
    // Participant handlers
    ConfirmParticipantCommand, ConfirmParticipantHandler, ListParticipantsHandler,
    ListParticipantsQuery,
    // Activity handlers
    CreateActivityCommand, CreateActivityHandler, ListActivitiesHandler, ListActivitiesQuery,
};
