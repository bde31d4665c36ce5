//! MailTripNotifier - renders trip confirmation emails and sends them.
//!
//! Trip and participant data are read at send time, so a notification
//! delivered after an update reflects the current destination and dates.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, TripId};
use crate::domain::participant::Participant;
use crate::domain::trip::Trip;
use crate::ports::{
    EmailMessage, MailSender, NotificationError, ParticipantRepository, TripNotifier,
    TripRepository,
};

/// Subject used for every confirmation email.
pub const CONFIRM_TRIP_SUBJECT: &str = "Confirm your trip";

/// `TripNotifier` backed by the repository ports and a `MailSender`.
pub struct MailTripNotifier {
    trips: Arc<dyn TripRepository>,
    participants: Arc<dyn ParticipantRepository>,
    mailer: Arc<dyn MailSender>,
}

impl MailTripNotifier {
    pub fn new(
        trips: Arc<dyn TripRepository>,
        participants: Arc<dyn ParticipantRepository>,
        mailer: Arc<dyn MailSender>,
    ) -> Self {
        Self {
            trips,
            participants,
            mailer,
        }
    }

    async fn load_trip(&self, trip_id: &TripId) -> Result<Trip, NotificationError> {
        self.trips
            .find_by_id(trip_id)
            .await
            .map_err(lookup_failed)?
            .ok_or(NotificationError::TripNotFound(*trip_id))
    }
}

fn lookup_failed(err: DomainError) -> NotificationError {
    NotificationError::Lookup(err.to_string())
}

/// Owner email for a freshly created trip.
pub fn owner_trip_created_message(trip: &Trip) -> EmailMessage {
    EmailMessage {
        to: trip.owner().email().to_string(),
        subject: CONFIRM_TRIP_SUBJECT.to_string(),
        body: format!(
            "Hello, {}!\n\n\
             Your trip to {} starting on {} needs to be confirmed.\n\
             Use the link below to confirm it.\n",
            trip.owner().name(),
            trip.destination(),
            trip.starts_at().to_date_string(),
        ),
    }
}

/// Participant email for a trip the owner has confirmed.
pub fn participant_trip_confirmed_message(trip: &Trip, participant: &Participant) -> EmailMessage {
    EmailMessage {
        to: participant.email().to_string(),
        subject: CONFIRM_TRIP_SUBJECT.to_string(),
        body: format!(
            "Hello!\n\n\
             Your trip with {} to {} starting on {} needs your confirmation.\n\
             Use the link below to confirm your attendance.\n",
            trip.owner().name(),
            trip.destination(),
            trip.starts_at().to_date_string(),
        ),
    }
}

#[async_trait]
impl TripNotifier for MailTripNotifier {
    async fn notify_owner_trip_created(&self, trip_id: &TripId) -> Result<(), NotificationError> {
        let trip = self.load_trip(trip_id).await?;
        self.mailer.send(owner_trip_created_message(&trip)).await
    }

    async fn notify_participants_trip_confirmed(
        &self,
        trip_id: &TripId,
    ) -> Result<(), NotificationError> {
        let trip = self.load_trip(trip_id).await?;
        let participants = self
            .participants
            .list_by_trip(trip_id)
            .await
            .map_err(lookup_failed)?;

        // Everyone on the trip hears about it, including early confirmers
        let mut failed = 0;
        for participant in &participants {
            let message = participant_trip_confirmed_message(&trip, participant);
            if let Err(e) = self.mailer.send(message).await {
                failed += 1;
                tracing::warn!(
                    trip_id = %trip_id,
                    participant_id = %participant.id(),
                    error = %e,
                    "Failed to email participant"
                );
            }
        }

        if failed > 0 {
            return Err(NotificationError::PartialDelivery {
                failed,
                attempted: participants.len(),
            });
        }
        Ok(())
    }
}
