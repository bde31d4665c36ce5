//! TripStatus enum for tracking the confirmation lifecycle of a trip.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TripStatus {
    #[default]
    Draft,
    Confirmed,
}

impl TripStatus {
    /// Returns true once the trip has been confirmed.
    pub fn is_confirmed(&self) -> bool {
        matches!(self, TripStatus::Confirmed)
    }

    /// Validates a transition from this status to another.
    ///
    /// Valid transitions:
    /// - Draft -> Confirmed
    pub fn can_transition_to(&self, target: &TripStatus) -> bool {
        use TripStatus::*;
        matches!((self, target), (Draft, Confirmed))
    }

    /// Builds the status from the persisted `is_confirmed` flag.
    pub fn from_confirmed(is_confirmed: bool) -> Self {
        if is_confirmed {
            TripStatus::Confirmed
        } else {
            TripStatus::Draft
        }
    }
}

impl fmt::Display for TripStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TripStatus::Draft => "Draft",
            TripStatus::Confirmed => "Confirmed",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_draft() {
        assert_eq!(TripStatus::default(), TripStatus::Draft);
    }

    #[test]
    fn draft_can_transition_to_confirmed() {
        assert!(TripStatus::Draft.can_transition_to(&TripStatus::Confirmed));
    }

    #[test]
    fn confirmed_is_terminal() {
        assert!(!TripStatus::Confirmed.can_transition_to(&TripStatus::Confirmed));
        assert!(!TripStatus::Confirmed.can_transition_to(&TripStatus::Draft));
    }

    #[test]
    fn from_confirmed_maps_flag() {
        assert_eq!(TripStatus::from_confirmed(false), TripStatus::Draft);
        assert_eq!(TripStatus::from_confirmed(true), TripStatus::Confirmed);
        assert!(TripStatus::Confirmed.is_confirmed());
    }
}
