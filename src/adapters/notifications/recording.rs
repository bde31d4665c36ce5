//! Recording scheduler for tests and dry runs.

use std::sync::{Mutex, PoisonError};

use crate::ports::{NotificationScheduler, TripNotification};

/// `NotificationScheduler` that only remembers what it was asked to send.
#[derive(Debug, Default)]
pub struct RecordingScheduler {
    scheduled: Mutex<Vec<TripNotification>>,
}

impl RecordingScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notifications scheduled so far, in order.
    pub fn scheduled(&self) -> Vec<TripNotification> {
        self.scheduled
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl NotificationScheduler for RecordingScheduler {
    fn schedule(&self, notification: TripNotification) {
        self.scheduled
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notification);
    }
}
