//! Parsing of textual identifiers received from the request boundary.
//!
//! Malformed ids are rejected here, before any storage access.

use crate::domain::foundation::{ParticipantId, TripId};
use crate::domain::trip::TripError;

pub fn parse_trip_id(raw: &str) -> Result<TripId, TripError> {
    raw.trim()
        .parse()
        .map_err(|_| TripError::validation("trip_id", "Invalid trip ID"))
}

pub fn parse_participant_id(raw: &str) -> Result<ParticipantId, TripError> {
    raw.trim()
        .parse()
        .map_err(|_| TripError::validation("participant_id", "Invalid participant ID"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_trip_id() {
        let id = TripId::new();
        assert_eq!(parse_trip_id(&id.to_string()).unwrap(), id);
    }

    #[test]
    fn rejects_malformed_ids() {
        assert!(matches!(
            parse_trip_id("not-a-uuid"),
            Err(TripError::ValidationFailed { ref field, .. }) if field == "trip_id"
        ));
        assert!(matches!(
            parse_participant_id(""),
            Err(TripError::ValidationFailed { ref field, .. }) if field == "participant_id"
        ));
    }
}
