//! PostgreSQL implementation of TripRepository.
//!
//! Trips live in `trips`; the owner is stored inline (name + email) and
//! again as the first row in `participants`.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{
    DomainError, EmailAddress, ErrorCode, Timestamp, TripId, TripStatus,
};
use crate::domain::participant::Participant;
use crate::domain::trip::{Trip, TripOwner};
use crate::ports::TripRepository;

/// PostgreSQL implementation of TripRepository.
#[derive(Clone)]
pub struct PostgresTripRepository {
    pool: PgPool,
}

impl PostgresTripRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn exists(&self, id: &TripId) -> Result<bool, DomainError> {
        let (exists,): (bool,) = sqlx::query_as("SELECT EXISTS (SELECT 1 FROM trips WHERE id = $1)")
            .bind(id.as_uuid())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::database("check trip existence", e))?;

        Ok(exists)
    }
}

#[async_trait]
impl TripRepository for PostgresTripRepository {
    async fn create_with_participants(
        &self,
        trip: &Trip,
        participants: &[Participant],
    ) -> Result<(), DomainError> {
        // Dropping the transaction without commit rolls everything back
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database("begin transaction", e))?;

        sqlx::query(
            r#"
            INSERT INTO trips (
                id, destination, owner_email, owner_name, is_confirmed, starts_at, ends_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(trip.id().as_uuid())
        .bind(trip.destination())
        .bind(trip.owner().email().as_str())
        .bind(trip.owner().name())
        .bind(trip.is_confirmed())
        .bind(trip.starts_at().as_datetime())
        .bind(trip.ends_at().as_datetime())
        .execute(&mut *tx)
        .await
        .map_err(|e| DomainError::database("insert trip", e))?;

        for participant in participants {
            sqlx::query(
                r#"
                INSERT INTO participants (id, trip_id, email, name, is_confirmed)
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(participant.id().as_uuid())
            .bind(participant.trip_id().as_uuid())
            .bind(participant.email().as_str())
            .bind(participant.name())
            .bind(participant.is_confirmed())
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::database("insert participant", e))?;
        }

        tx.commit()
            .await
            .map_err(|e| DomainError::database("commit trip creation", e))?;

        Ok(())
    }

    async fn find_by_id(&self, id: &TripId) -> Result<Option<Trip>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, destination, owner_email, owner_name, is_confirmed, starts_at, ends_at
            FROM trips
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("fetch trip", e))?;

        row.map(row_to_trip).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Trip>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, destination, owner_email, owner_name, is_confirmed, starts_at, ends_at
            FROM trips
            ORDER BY starts_at ASC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("list trips", e))?;

        rows.into_iter().map(row_to_trip).collect()
    }

    async fn update_details(
        &self,
        id: &TripId,
        destination: &str,
        starts_at: &Timestamp,
        ends_at: &Timestamp,
    ) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE trips SET
                destination = $2,
                starts_at = $3,
                ends_at = $4
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .bind(destination)
        .bind(starts_at.as_datetime())
        .bind(ends_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("update trip", e))?;

        if result.rows_affected() == 0 {
            return Err(trip_not_found(id));
        }

        Ok(())
    }

    async fn confirm(&self, id: &TripId) -> Result<(), DomainError> {
        let result = sqlx::query("UPDATE trips SET is_confirmed = TRUE WHERE id = $1 AND NOT is_confirmed")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("confirm trip", e))?;

        if result.rows_affected() == 1 {
            return Ok(());
        }

        // Lost the conditional update: either missing or confirmed already
        if self.exists(id).await? {
            Err(DomainError::new(
                ErrorCode::TripAlreadyConfirmed,
                format!("Trip already confirmed: {}", id),
            ))
        } else {
            Err(trip_not_found(id))
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

pub(super) fn trip_not_found(id: &TripId) -> DomainError {
    DomainError::new(ErrorCode::TripNotFound, format!("Trip not found: {}", id))
}

pub(super) fn column<'r, T>(row: &'r sqlx::postgres::PgRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    row.try_get(name)
        .map_err(|e| DomainError::database(&format!("read column {}", name), e))
}

fn row_to_trip(row: sqlx::postgres::PgRow) -> Result<Trip, DomainError> {
    let id: uuid::Uuid = column(&row, "id")?;
    let destination: String = column(&row, "destination")?;
    let owner_email: String = column(&row, "owner_email")?;
    let owner_name: String = column(&row, "owner_name")?;
    let is_confirmed: bool = column(&row, "is_confirmed")?;
    let starts_at: chrono::DateTime<chrono::Utc> = column(&row, "starts_at")?;
    let ends_at: chrono::DateTime<chrono::Utc> = column(&row, "ends_at")?;

    let owner = EmailAddress::parse("owner_email", &owner_email)
        .and_then(|email| TripOwner::new(&owner_name, email))
        .map_err(|e| DomainError::database("decode trip owner", e))?;

    Ok(Trip::reconstitute(
        TripId::from_uuid(id),
        destination,
        Timestamp::from_datetime(starts_at),
        Timestamp::from_datetime(ends_at),
        TripStatus::from_confirmed(is_confirmed),
        owner,
    ))
}
