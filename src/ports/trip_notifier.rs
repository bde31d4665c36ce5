//! TripNotifier port - delivers trip confirmation emails.
//!
//! Implementations look trip and participant data up at send time rather
//! than receiving a snapshot, and keep going when a single recipient fails.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::TripId;

/// Failures while delivering a notification.
///
/// These never reach the caller of a lifecycle operation; the notification
/// worker logs and drops them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotificationError {
    #[error("Trip {0} not found")]
    TripNotFound(TripId),

    #[error("Lookup failed: {0}")]
    Lookup(String),

    #[error("Invalid message for {recipient}: {reason}")]
    InvalidMessage { recipient: String, reason: String },

    #[error("Delivery to {recipient} failed: {reason}")]
    Delivery { recipient: String, reason: String },

    #[error("{failed} of {attempted} deliveries failed")]
    PartialDelivery { failed: usize, attempted: usize },
}

/// Port for sending trip notifications.
#[async_trait]
pub trait TripNotifier: Send + Sync {
    /// Email the owner asking them to confirm a newly created trip.
    async fn notify_owner_trip_created(&self, trip_id: &TripId) -> Result<(), NotificationError>;

    /// Email participants asking them to confirm their attendance.
    async fn notify_participants_trip_confirmed(
        &self,
        trip_id: &TripId,
    ) -> Result<(), NotificationError>;
}
