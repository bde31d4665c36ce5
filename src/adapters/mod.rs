//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - Axum REST API
//! - `memory` - In-memory repositories for tests and local runs
//! - `notifications` - Background confirmation emails over SMTP
//! - `postgres` - PostgreSQL repositories and migrations

pub mod http;
pub mod memory;
pub mod notifications;
pub mod postgres;

pub use memory::InMemoryJourneyStore;
pub use notifications::{MailTripNotifier, NotificationDispatcher, NotificationWorker, SmtpMailSender};
pub use postgres::{PostgresActivityRepository, PostgresParticipantRepository, PostgresTripRepository};
