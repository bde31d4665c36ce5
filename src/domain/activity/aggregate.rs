//! Activity entity - a scheduled event during a trip.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ActivityId, DomainError, Timestamp, TripId, ValidationError};

/// Maximum length for an activity title.
pub const MAX_ACTIVITY_TITLE_LENGTH: usize = 255;

/// Activity scheduled at a specific moment of a trip.
///
/// Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    id: ActivityId,
    trip_id: TripId,
    title: String,
    occurs_at: Timestamp,
}

impl Activity {
    /// Create a new activity.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the title is blank or too long
    pub fn new(
        id: ActivityId,
        trip_id: TripId,
        title: &str,
        occurs_at: Timestamp,
    ) -> Result<Self, DomainError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ValidationError::empty_field("title").into());
        }
        let len = title.chars().count();
        if len > MAX_ACTIVITY_TITLE_LENGTH {
            return Err(
                ValidationError::invalid_length("title", 1, MAX_ACTIVITY_TITLE_LENGTH, len).into(),
            );
        }

        Ok(Self {
            id,
            trip_id,
            title: title.to_string(),
            occurs_at,
        })
    }

    /// Reconstitute an activity from persistence (no validation).
    pub fn reconstitute(id: ActivityId, trip_id: TripId, title: String, occurs_at: Timestamp) -> Self {
        Self {
            id,
            trip_id,
            title,
            occurs_at,
        }
    }

    pub fn id(&self) -> &ActivityId {
        &self.id
    }

    pub fn trip_id(&self) -> &TripId {
        &self.trip_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn occurs_at(&self) -> &Timestamp {
        &self.occurs_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_activity_trims_title() {
        let activity =
            Activity::new(ActivityId::new(), TripId::new(), "  Beach ", Timestamp::now()).unwrap();
        assert_eq!(activity.title(), "Beach");
    }

    #[test]
    fn new_activity_rejects_blank_title() {
        let err = Activity::new(ActivityId::new(), TripId::new(), " ", Timestamp::now()).unwrap_err();
        assert_eq!(err.field(), Some("title"));
    }

    #[test]
    fn new_activity_rejects_long_title() {
        let title = "x".repeat(MAX_ACTIVITY_TITLE_LENGTH + 1);
        assert!(Activity::new(ActivityId::new(), TripId::new(), &title, Timestamp::now()).is_err());
    }
}
