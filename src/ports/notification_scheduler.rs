//! NotificationScheduler port - hands notifications off the request path.
//!
//! Lifecycle handlers call [`NotificationScheduler::schedule`] after their
//! storage write has succeeded. Scheduling never blocks and never fails from
//! the caller's point of view; delivery happens later, elsewhere.

use std::fmt;

use crate::domain::foundation::TripId;

/// A notification to deliver for a trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripNotification {
    /// Ask the owner to confirm a freshly created trip.
    OwnerTripCreated(TripId),
    /// Ask participants to confirm their attendance of a confirmed trip.
    ParticipantsTripConfirmed(TripId),
}

impl TripNotification {
    pub fn trip_id(&self) -> &TripId {
        match self {
            TripNotification::OwnerTripCreated(id) => id,
            TripNotification::ParticipantsTripConfirmed(id) => id,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            TripNotification::OwnerTripCreated(_) => "owner_trip_created",
            TripNotification::ParticipantsTripConfirmed(_) => "participants_trip_confirmed",
        }
    }
}

impl fmt::Display for TripNotification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.kind(), self.trip_id())
    }
}

/// Fire-and-forget scheduling of trip notifications.
pub trait NotificationScheduler: Send + Sync {
    /// Queue a notification for background delivery.
    fn schedule(&self, notification: TripNotification);
}
