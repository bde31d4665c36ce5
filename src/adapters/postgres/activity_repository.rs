//! PostgreSQL implementation of ActivityRepository.

use async_trait::async_trait;
use sqlx::PgPool;

use super::trip_repository::{column, trip_not_found};
use crate::domain::activity::Activity;
use crate::domain::foundation::{ActivityId, DomainError, Timestamp, TripId};
use crate::ports::ActivityRepository;

/// PostgreSQL implementation of ActivityRepository.
#[derive(Clone)]
pub struct PostgresActivityRepository {
    pool: PgPool,
}

impl PostgresActivityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ActivityRepository for PostgresActivityRepository {
    async fn save(&self, activity: &Activity) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO activities (id, trip_id, title, occurs_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(activity.id().as_uuid())
        .bind(activity.trip_id().as_uuid())
        .bind(activity.title())
        .bind(activity.occurs_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            // The trip_id foreign key is the existence check
            if let sqlx::Error::Database(db) = &e {
                if db.is_foreign_key_violation() {
                    return trip_not_found(activity.trip_id());
                }
            }
            DomainError::database("insert activity", e)
        })?;

        Ok(())
    }

    async fn list_by_trip(&self, trip_id: &TripId) -> Result<Vec<Activity>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, trip_id, title, occurs_at
            FROM activities
            WHERE trip_id = $1
            ORDER BY seq ASC
            "#,
        )
        .bind(trip_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("list activities", e))?;

        rows.into_iter().map(row_to_activity).collect()
    }
}

fn row_to_activity(row: sqlx::postgres::PgRow) -> Result<Activity, DomainError> {
    let id: uuid::Uuid = column(&row, "id")?;
    let trip_id: uuid::Uuid = column(&row, "trip_id")?;
    let title: String = column(&row, "title")?;
    let occurs_at: chrono::DateTime<chrono::Utc> = column(&row, "occurs_at")?;

    Ok(Activity::reconstitute(
        ActivityId::from_uuid(id),
        TripId::from_uuid(trip_id),
        title,
        Timestamp::from_datetime(occurs_at),
    ))
}
