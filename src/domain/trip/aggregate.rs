//! Trip aggregate entity.
//!
//! A trip is a planned journey with a destination and a date range, owned by
//! one person. Participants and activities reference a trip by ID but are
//! not owned by it.

use crate::domain::foundation::{
    DomainError, EmailAddress, ErrorCode, Timestamp, TripId, TripStatus, ValidationError,
};
use serde::{Deserialize, Serialize};

/// Minimum length for a trip destination (after trimming).
pub const MIN_DESTINATION_LENGTH: usize = 3;

/// Maximum length for a trip destination.
pub const MAX_DESTINATION_LENGTH: usize = 255;

/// Maximum length for the owner's display name.
pub const MAX_OWNER_NAME_LENGTH: usize = 255;

/// The person who created the trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripOwner {
    name: String,
    email: EmailAddress,
}

impl TripOwner {
    /// Creates an owner from a display name and a validated email.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the name is blank
    /// - `InvalidLength` if the name is too long
    pub fn new(name: &str, email: EmailAddress) -> Result<Self, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::empty_field("owner_name"));
        }
        if name.chars().count() > MAX_OWNER_NAME_LENGTH {
            return Err(ValidationError::invalid_length(
                "owner_name",
                1,
                MAX_OWNER_NAME_LENGTH,
                name.chars().count(),
            ));
        }
        Ok(Self {
            name: name.to_string(),
            email,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }
}

/// Trip aggregate.
///
/// # Invariants
///
/// - `id` is globally unique and never changes
/// - `destination` is 3-255 characters after trimming
/// - `starts_at` is not after `ends_at`
/// - `status` only moves Draft -> Confirmed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trip {
    id: TripId,
    destination: String,
    starts_at: Timestamp,
    ends_at: Timestamp,
    status: TripStatus,
    owner: TripOwner,
}

impl Trip {
    /// Create a new trip in `Draft` status.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the destination or date range is invalid
    pub fn new(
        id: TripId,
        destination: &str,
        starts_at: Timestamp,
        ends_at: Timestamp,
        owner: TripOwner,
    ) -> Result<Self, DomainError> {
        let destination = Self::validate_destination(destination)?;
        Self::validate_dates(&starts_at, &ends_at)?;

        Ok(Self {
            id,
            destination,
            starts_at,
            ends_at,
            status: TripStatus::Draft,
            owner,
        })
    }

    /// Reconstitute a trip from persistence (no validation).
    pub fn reconstitute(
        id: TripId,
        destination: String,
        starts_at: Timestamp,
        ends_at: Timestamp,
        status: TripStatus,
        owner: TripOwner,
    ) -> Self {
        Self {
            id,
            destination,
            starts_at,
            ends_at,
            status,
            owner,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &TripId {
        &self.id
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn starts_at(&self) -> &Timestamp {
        &self.starts_at
    }

    pub fn ends_at(&self) -> &Timestamp {
        &self.ends_at
    }

    pub fn status(&self) -> TripStatus {
        self.status
    }

    pub fn is_confirmed(&self) -> bool {
        self.status.is_confirmed()
    }

    pub fn owner(&self) -> &TripOwner {
        &self.owner
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Replace destination and dates, leaving the confirmation status untouched.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the destination or date range is invalid
    pub fn update_details(
        &mut self,
        destination: &str,
        starts_at: Timestamp,
        ends_at: Timestamp,
    ) -> Result<(), DomainError> {
        let destination = Self::validate_destination(destination)?;
        Self::validate_dates(&starts_at, &ends_at)?;

        self.destination = destination;
        self.starts_at = starts_at;
        self.ends_at = ends_at;
        Ok(())
    }

    /// Confirm the trip.
    ///
    /// # Errors
    ///
    /// - `TripAlreadyConfirmed` if the trip is already confirmed
    pub fn confirm(&mut self) -> Result<(), DomainError> {
        if !self.status.can_transition_to(&TripStatus::Confirmed) {
            return Err(DomainError::new(
                ErrorCode::TripAlreadyConfirmed,
                format!("Trip already confirmed: {}", self.id),
            ));
        }
        self.status = TripStatus::Confirmed;
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Validation
    // ─────────────────────────────────────────────────────────────────────────

    /// Validates and normalizes a destination.
    pub fn validate_destination(destination: &str) -> Result<String, DomainError> {
        let trimmed = destination.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("destination").into());
        }
        let len = trimmed.chars().count();
        if !(MIN_DESTINATION_LENGTH..=MAX_DESTINATION_LENGTH).contains(&len) {
            return Err(ValidationError::invalid_length(
                "destination",
                MIN_DESTINATION_LENGTH,
                MAX_DESTINATION_LENGTH,
                len,
            )
            .into());
        }
        Ok(trimmed.to_string())
    }

    /// Validates that the trip does not end before it starts.
    pub fn validate_dates(starts_at: &Timestamp, ends_at: &Timestamp) -> Result<(), DomainError> {
        if ends_at.is_before(starts_at) {
            return Err(DomainError::validation(
                "ends_at",
                "Trip cannot end before it starts",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn day(d: u32) -> Timestamp {
        Timestamp::from_datetime(Utc.with_ymd_and_hms(2024, 6, d, 12, 0, 0).unwrap())
    }

    fn owner() -> TripOwner {
        TripOwner::new("Ana", EmailAddress::parse("owner_email", "ana@x.com").unwrap()).unwrap()
    }

    fn test_trip() -> Trip {
        Trip::new(TripId::new(), "Rio", day(1), day(10), owner()).unwrap()
    }

    #[test]
    fn new_trip_is_draft() {
        let trip = test_trip();
        assert_eq!(trip.status(), TripStatus::Draft);
        assert!(!trip.is_confirmed());
    }

    #[test]
    fn new_trip_trims_destination() {
        let trip = Trip::new(TripId::new(), "  Lisbon ", day(1), day(2), owner()).unwrap();
        assert_eq!(trip.destination(), "Lisbon");
    }

    #[test]
    fn new_trip_rejects_short_destination() {
        let result = Trip::new(TripId::new(), "Ri", day(1), day(2), owner());
        assert_eq!(result.unwrap_err().code, ErrorCode::ValidationFailed);
    }

    #[test]
    fn new_trip_rejects_blank_destination() {
        assert!(Trip::new(TripId::new(), "   ", day(1), day(2), owner()).is_err());
    }

    #[test]
    fn new_trip_rejects_inverted_dates() {
        let err = Trip::new(TripId::new(), "Rio", day(10), day(1), owner()).unwrap_err();
        assert_eq!(err.field(), Some("ends_at"));
    }

    #[test]
    fn same_start_and_end_is_allowed() {
        assert!(Trip::new(TripId::new(), "Rio", day(5), day(5), owner()).is_ok());
    }

    #[test]
    fn confirm_moves_to_confirmed() {
        let mut trip = test_trip();
        trip.confirm().unwrap();
        assert!(trip.is_confirmed());
    }

    #[test]
    fn confirm_twice_is_rejected() {
        let mut trip = test_trip();
        trip.confirm().unwrap();
        let err = trip.confirm().unwrap_err();
        assert_eq!(err.code, ErrorCode::TripAlreadyConfirmed);
    }

    #[test]
    fn update_details_preserves_confirmation() {
        let mut trip = test_trip();
        trip.confirm().unwrap();
        trip.update_details("Salvador", day(2), day(3)).unwrap();
        assert!(trip.is_confirmed());
        assert_eq!(trip.destination(), "Salvador");
        assert_eq!(trip.starts_at(), &day(2));
    }

    #[test]
    fn update_details_rejects_invalid_and_keeps_old_values() {
        let mut trip = test_trip();
        assert!(trip.update_details("Salvador", day(9), day(3)).is_err());
        assert_eq!(trip.destination(), "Rio");
    }

    #[test]
    fn owner_requires_name() {
        let email = EmailAddress::parse("owner_email", "ana@x.com").unwrap();
        assert!(TripOwner::new(" ", email).is_err());
    }
}
