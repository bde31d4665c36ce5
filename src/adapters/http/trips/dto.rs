//! HTTP DTOs for trip, participant and activity endpoints.
//!
//! Request fields default when absent so that missing values surface as
//! handler validation errors (400) rather than extractor rejections.

use serde::{Deserialize, Serialize};

use crate::domain::activity::{Activity, DayActivities};
use crate::domain::foundation::Timestamp;
use crate::domain::participant::Participant;
use crate::domain::trip::{Trip, TripError};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to create a trip.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateTripRequest {
    pub destination: String,
    pub starts_at: Option<Timestamp>,
    pub ends_at: Option<Timestamp>,
    pub owner_name: String,
    pub owner_email: String,
    pub emails_to_invite: Vec<String>,
}

/// Request to replace a trip's details.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateTripRequest {
    pub destination: String,
    pub starts_at: Option<Timestamp>,
    pub ends_at: Option<Timestamp>,
}

/// Request to add an activity.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateActivityRequest {
    pub title: String,
    pub occurs_at: Option<Timestamp>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct CreateTripResponse {
    pub trip_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateActivityResponse {
    pub activity_id: String,
}

/// Trip as exposed over HTTP.
#[derive(Debug, Clone, Serialize)]
pub struct TripResponse {
    pub id: String,
    pub destination: String,
    pub starts_at: String,
    pub ends_at: String,
    pub is_confirmed: bool,
}

impl From<&Trip> for TripResponse {
    fn from(trip: &Trip) -> Self {
        Self {
            id: trip.id().to_string(),
            destination: trip.destination().to_string(),
            starts_at: trip.starts_at().as_datetime().to_rfc3339(),
            ends_at: trip.ends_at().as_datetime().to_rfc3339(),
            is_confirmed: trip.is_confirmed(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GetTripResponse {
    pub trip: TripResponse,
}

#[derive(Debug, Clone, Serialize)]
pub struct ListTripsResponse {
    pub trips: Vec<TripResponse>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ParticipantResponse {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    pub is_confirmed: bool,
}

impl From<&Participant> for ParticipantResponse {
    fn from(participant: &Participant) -> Self {
        Self {
            id: participant.id().to_string(),
            email: participant.email().to_string(),
            name: participant.name().map(str::to_string),
            is_confirmed: participant.is_confirmed(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ListParticipantsResponse {
    pub participants: Vec<ParticipantResponse>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ActivityResponse {
    pub id: String,
    pub title: String,
    pub occurs_at: String,
}

impl From<&Activity> for ActivityResponse {
    fn from(activity: &Activity) -> Self {
        Self {
            id: activity.id().to_string(),
            title: activity.title().to_string(),
            occurs_at: activity.occurs_at().as_datetime().to_rfc3339(),
        }
    }
}

/// One day of the agenda; `date` is midnight UTC of that day.
#[derive(Debug, Clone, Serialize)]
pub struct DayActivitiesResponse {
    pub date: String,
    pub activities: Vec<ActivityResponse>,
}

impl From<&DayActivities> for DayActivitiesResponse {
    fn from(day: &DayActivities) -> Self {
        Self {
            date: day.starts_at().as_datetime().to_rfc3339(),
            activities: day.activities.iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ListActivitiesResponse {
    pub activities: Vec<DayActivitiesResponse>,
}

/// Generic message returned for storage failures.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong, try again";

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
        }
    }

    pub fn internal() -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}

impl From<&TripError> for ErrorResponse {
    fn from(error: &TripError) -> Self {
        if error.is_storage() {
            return Self::internal();
        }
        Self {
            code: error.code().to_string(),
            message: error.message(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::TripId;
    use crate::domain::trip::EntityRef;

    #[test]
    fn create_trip_request_deserializes() {
        let json = r#"{
            "destination": "Rio",
            "starts_at": "2024-06-01T00:00:00Z",
            "ends_at": "2024-06-10T00:00:00Z",
            "owner_name": "Ana",
            "owner_email": "ana@x.com",
            "emails_to_invite": ["bob@x.com"]
        }"#;
        let req: CreateTripRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.destination, "Rio");
        assert!(req.starts_at.is_some());
        assert_eq!(req.emails_to_invite, vec!["bob@x.com"]);
    }

    #[test]
    fn missing_fields_default_instead_of_failing() {
        let req: CreateTripRequest = serde_json::from_str(r#"{"destination": "Rio"}"#).unwrap();
        assert!(req.starts_at.is_none());
        assert!(req.emails_to_invite.is_empty());
    }

    #[test]
    fn storage_errors_hide_details() {
        let err = TripError::storage("connection refused on 10.0.0.3");
        let body = ErrorResponse::from(&err);
        assert_eq!(body.code, "INTERNAL_ERROR");
        assert_eq!(body.message, GENERIC_FAILURE_MESSAGE);
    }

    #[test]
    fn domain_errors_keep_code_and_message() {
        let id = TripId::new();
        let body = ErrorResponse::from(&TripError::AlreadyConfirmed(EntityRef::Trip(id)));
        assert_eq!(body.code, "TRIP_ALREADY_CONFIRMED");
        assert!(body.message.contains(&id.to_string()));
    }
}
