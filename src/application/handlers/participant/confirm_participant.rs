//! ConfirmParticipantHandler - Command handler for participant confirmation.

use std::sync::Arc;

use crate::application::handlers::ids::parse_participant_id;
use crate::domain::foundation::ParticipantId;
use crate::domain::trip::TripError;
use crate::ports::ParticipantRepository;

/// Command to confirm a participant's attendance.
#[derive(Debug, Clone)]
pub struct ConfirmParticipantCommand {
    pub participant_id: String,
}

/// Handler for confirming participants.
///
/// Independent of the parent trip's state; a participant may confirm
/// before the trip itself is confirmed. Confirming twice is rejected.
pub struct ConfirmParticipantHandler {
    participants: Arc<dyn ParticipantRepository>,
}

impl ConfirmParticipantHandler {
    pub fn new(participants: Arc<dyn ParticipantRepository>) -> Self {
        Self { participants }
    }

    pub async fn handle(&self, cmd: ConfirmParticipantCommand) -> Result<ParticipantId, TripError> {
        let participant_id = parse_participant_id(&cmd.participant_id)?;

        self.participants
            .confirm(&participant_id)
            .await
            .map_err(|e| {
                TripError::for_participant(e, participant_id)
                    .log_storage("confirm_participant", participant_id)
            })?;

        tracing::info!(participant_id = %participant_id, "Participant confirmed");
        Ok(participant_id)
    }
}
