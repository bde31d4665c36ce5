//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresTripRepository` - trips, including atomic trip + participants creation
//! - `PostgresParticipantRepository` - participant lookup and confirmation
//! - `PostgresActivityRepository` - trip activities
//!
//! Schema lives in `migrations/` at the crate root; see [`MIGRATOR`].

mod activity_repository;
mod participant_repository;
mod trip_repository;

pub use activity_repository::PostgresActivityRepository;
pub use participant_repository::PostgresParticipantRepository;
pub use trip_repository::PostgresTripRepository;

/// Embedded schema migrations.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
