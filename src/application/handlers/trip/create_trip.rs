//! CreateTripHandler - Command handler for creating trips.

use std::sync::Arc;

use crate::domain::foundation::{EmailAddress, Timestamp, TripId};
use crate::domain::participant::Participant;
use crate::domain::trip::{Trip, TripError, TripOwner};
use crate::ports::{NotificationScheduler, TripNotification, TripRepository};

/// Command to create a trip and invite participants.
#[derive(Debug, Clone)]
pub struct CreateTripCommand {
    pub destination: String,
    pub starts_at: Option<Timestamp>,
    pub ends_at: Option<Timestamp>,
    pub owner_name: String,
    pub owner_email: String,
    pub emails_to_invite: Vec<String>,
}

/// Result of successful trip creation.
#[derive(Debug, Clone)]
pub struct CreateTripResult {
    pub trip: Trip,
    /// Owner first, then invitees in request order.
    pub participants: Vec<Participant>,
}

impl CreateTripResult {
    pub fn trip_id(&self) -> &TripId {
        self.trip.id()
    }
}

/// Handler for creating trips.
pub struct CreateTripHandler {
    trips: Arc<dyn TripRepository>,
    notifications: Arc<dyn NotificationScheduler>,
}

impl CreateTripHandler {
    pub fn new(
        trips: Arc<dyn TripRepository>,
        notifications: Arc<dyn NotificationScheduler>,
    ) -> Self {
        Self {
            trips,
            notifications,
        }
    }

    pub async fn handle(&self, cmd: CreateTripCommand) -> Result<CreateTripResult, TripError> {
        // 1. Validate every input before touching storage
        let starts_at = cmd
            .starts_at
            .ok_or_else(|| TripError::validation("starts_at", "Start date is required"))?;
        let ends_at = cmd
            .ends_at
            .ok_or_else(|| TripError::validation("ends_at", "End date is required"))?;

        let owner_email = EmailAddress::parse("owner_email", &cmd.owner_email)?;
        let owner = TripOwner::new(&cmd.owner_name, owner_email)?;
        let invitees = collect_invitees(&cmd.emails_to_invite, owner.email())?;

        let trip_id = TripId::new();
        let trip = Trip::new(trip_id, &cmd.destination, starts_at, ends_at, owner)
            .map_err(|e| TripError::for_trip(e, trip_id))?;

        // 2. Owner participant first, then invitees
        let mut participants = Vec::with_capacity(invitees.len() + 1);
        participants.push(Participant::owner(trip_id, trip.owner()));
        participants.extend(
            invitees
                .into_iter()
                .map(|email| Participant::invited(trip_id, email)),
        );

        // 3. Persist atomically
        self.trips
            .create_with_participants(&trip, &participants)
            .await
            .map_err(|e| TripError::for_trip(e, trip_id).log_storage("create_trip", trip_id))?;

        tracing::info!(
            trip_id = %trip_id,
            participants = participants.len(),
            "Trip created"
        );

        // 4. Ask the owner to confirm, off the request path
        self.notifications
            .schedule(TripNotification::OwnerTripCreated(trip_id));

        Ok(CreateTripResult { trip, participants })
    }
}

/// Parses invited emails, dropping the owner's address and repeats.
fn collect_invitees(raw: &[String], owner: &EmailAddress) -> Result<Vec<EmailAddress>, TripError> {
    let mut invitees: Vec<EmailAddress> = Vec::with_capacity(raw.len());
    for value in raw {
        let email = EmailAddress::parse("emails_to_invite", value)?;
        if email.same_mailbox(owner) || invitees.iter().any(|e| e.same_mailbox(&email)) {
            continue;
        }
        invitees.push(email);
    }
    Ok(invitees)
}
