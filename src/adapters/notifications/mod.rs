//! Notification adapters.
//!
//! - `NotificationDispatcher` / `NotificationWorker` - channel-backed scheduler
//! - `MailTripNotifier` - renders confirmation emails from stored trips
//! - `SmtpMailSender` - lettre SMTP transport
//! - `RecordingScheduler` - in-memory scheduler for tests

mod dispatcher;
mod mail_notifier;
mod recording;
mod smtp_sender;

pub use dispatcher::{deliver, NotificationDispatcher, NotificationWorker};
pub use mail_notifier::{
    owner_trip_created_message, participant_trip_confirmed_message, MailTripNotifier,
    CONFIRM_TRIP_SUBJECT,
};
pub use recording::RecordingScheduler;
pub use smtp_sender::{SmtpMailSender, SmtpSetupError};
