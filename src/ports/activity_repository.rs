//! Activity repository port.

use async_trait::async_trait;

use crate::domain::activity::Activity;
use crate::domain::foundation::{DomainError, TripId};

/// Repository port for trip activities.
#[async_trait]
pub trait ActivityRepository: Send + Sync {
    /// Save a new activity.
    ///
    /// # Errors
    ///
    /// - `TripNotFound` if the referenced trip doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn save(&self, activity: &Activity) -> Result<(), DomainError>;

    /// List a trip's activities in insertion order.
    async fn list_by_trip(&self, trip_id: &TripId) -> Result<Vec<Activity>, DomainError>;
}
