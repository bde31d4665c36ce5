//! PostgreSQL implementation of ParticipantRepository.

use async_trait::async_trait;
use sqlx::PgPool;

use super::trip_repository::column;
use crate::domain::foundation::{
    DomainError, EmailAddress, ErrorCode, ParticipantId, ParticipantStatus, TripId,
};
use crate::domain::participant::Participant;
use crate::ports::ParticipantRepository;

/// PostgreSQL implementation of ParticipantRepository.
#[derive(Clone)]
pub struct PostgresParticipantRepository {
    pool: PgPool,
}

impl PostgresParticipantRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ParticipantRepository for PostgresParticipantRepository {
    async fn find_by_id(&self, id: &ParticipantId) -> Result<Option<Participant>, DomainError> {
        let row = sqlx::query(
            "SELECT id, trip_id, email, name, is_confirmed FROM participants WHERE id = $1",
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("fetch participant", e))?;

        row.map(row_to_participant).transpose()
    }

    async fn list_by_trip(&self, trip_id: &TripId) -> Result<Vec<Participant>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, trip_id, email, name, is_confirmed
            FROM participants
            WHERE trip_id = $1
            ORDER BY seq ASC
            "#,
        )
        .bind(trip_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("list participants", e))?;

        rows.into_iter().map(row_to_participant).collect()
    }

    async fn confirm(&self, id: &ParticipantId) -> Result<(), DomainError> {
        let result = sqlx::query(
            "UPDATE participants SET is_confirmed = TRUE WHERE id = $1 AND NOT is_confirmed",
        )
        .bind(id.as_uuid())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("confirm participant", e))?;

        if result.rows_affected() == 1 {
            return Ok(());
        }

        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS (SELECT 1 FROM participants WHERE id = $1)")
                .bind(id.as_uuid())
                .fetch_one(&self.pool)
                .await
                .map_err(|e| DomainError::database("check participant existence", e))?;

        if exists {
            Err(DomainError::new(
                ErrorCode::ParticipantAlreadyConfirmed,
                format!("Participant already confirmed: {}", id),
            ))
        } else {
            Err(DomainError::new(
                ErrorCode::ParticipantNotFound,
                format!("Participant not found: {}", id),
            ))
        }
    }
}

fn row_to_participant(row: sqlx::postgres::PgRow) -> Result<Participant, DomainError> {
    let id: uuid::Uuid = column(&row, "id")?;
    let trip_id: uuid::Uuid = column(&row, "trip_id")?;
    let email: String = column(&row, "email")?;
    let name: Option<String> = column(&row, "name")?;
    let is_confirmed: bool = column(&row, "is_confirmed")?;

    let email = EmailAddress::parse("email", &email)
        .map_err(|e| DomainError::database("decode participant email", e))?;

    Ok(Participant::reconstitute(
        ParticipantId::from_uuid(id),
        TripId::from_uuid(trip_id),
        email,
        name,
        ParticipantStatus::from_confirmed(is_confirmed),
    ))
}
