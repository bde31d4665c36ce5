//! ParticipantStatus enum, independent of the parent trip's status.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Confirmation status of a single participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ParticipantStatus {
    #[default]
    Unconfirmed,
    Confirmed,
}

impl ParticipantStatus {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, ParticipantStatus::Confirmed)
    }

    /// Valid transitions:
    /// - Unconfirmed -> Confirmed
    pub fn can_transition_to(&self, target: &ParticipantStatus) -> bool {
        use ParticipantStatus::*;
        matches!((self, target), (Unconfirmed, Confirmed))
    }

    pub fn from_confirmed(is_confirmed: bool) -> Self {
        if is_confirmed {
            ParticipantStatus::Confirmed
        } else {
            ParticipantStatus::Unconfirmed
        }
    }
}

impl fmt::Display for ParticipantStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ParticipantStatus::Unconfirmed => "Unconfirmed",
            ParticipantStatus::Confirmed => "Confirmed",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unconfirmed() {
        assert_eq!(ParticipantStatus::default(), ParticipantStatus::Unconfirmed);
    }

    #[test]
    fn only_unconfirmed_to_confirmed_is_valid() {
        use ParticipantStatus::*;
        assert!(Unconfirmed.can_transition_to(&Confirmed));
        assert!(!Confirmed.can_transition_to(&Unconfirmed));
        assert!(!Confirmed.can_transition_to(&Confirmed));
        assert!(!Unconfirmed.can_transition_to(&Unconfirmed));
    }
}
