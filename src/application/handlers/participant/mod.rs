//! Participant command and query handlers.

mod confirm_participant;
mod list_participants;

pub use confirm_participant::{ConfirmParticipantCommand, ConfirmParticipantHandler};
pub use list_participants::{ListParticipantsHandler, ListParticipantsQuery};
