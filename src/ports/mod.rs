//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence Ports
//!
//! - `TripRepository` - Trips, including atomic creation with participants
//! - `ParticipantRepository` - Participant lookup and confirmation
//! - `ActivityRepository` - Trip activities
//!
//! ## Notification Ports
//!
//! - `NotificationScheduler` - Non-blocking handoff used by lifecycle handlers
//! - `TripNotifier` - Delivers owner/participant confirmation emails
//! - `MailSender` - Outbound mail transport

mod activity_repository;
mod mail_sender;
mod notification_scheduler;
mod participant_repository;
mod trip_notifier;
mod trip_repository;

pub use activity_repository::ActivityRepository;
pub use mail_sender::{EmailMessage, MailSender};
pub use notification_scheduler::{NotificationScheduler, TripNotification};
pub use participant_repository::ParticipantRepository;
pub use trip_notifier::{NotificationError, TripNotifier};
pub use trip_repository::TripRepository;
