//! NotificationDispatcher - detached delivery of trip notifications.
//!
//! Lifecycle handlers hand notifications to the dispatcher, which only
//! pushes them onto an unbounded channel. A separate [`NotificationWorker`]
//! drains the channel and runs each delivery as its own task, so one slow
//! SMTP exchange never holds up the next notification.
//!
//! ## Delivery guarantees
//!
//! Fire-and-forget: no retry and no persistence. Failures are logged and
//! dropped. On a shutdown signal the worker stops accepting work, delivers
//! whatever is already queued, waits for in-flight deliveries and returns.
//! Anything scheduled after that is logged and discarded.

use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinSet;

use crate::ports::{NotificationScheduler, TripNotification, TripNotifier};

/// Scheduler side of the notification channel.
#[derive(Clone)]
pub struct NotificationDispatcher {
    sender: mpsc::UnboundedSender<TripNotification>,
}

impl NotificationDispatcher {
    /// Create a dispatcher and the worker that will drain it.
    pub fn new(notifier: Arc<dyn TripNotifier>) -> (Self, NotificationWorker) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (
            Self { sender },
            NotificationWorker {
                receiver,
                notifier,
                in_flight: JoinSet::new(),
            },
        )
    }
}

impl NotificationScheduler for NotificationDispatcher {
    fn schedule(&self, notification: TripNotification) {
        match self.sender.send(notification) {
            Ok(()) => tracing::debug!(%notification, "Notification scheduled"),
            Err(mpsc::error::SendError(dropped)) => tracing::warn!(
                notification = %dropped,
                "Notification worker is not running, dropping notification"
            ),
        }
    }
}

/// Background consumer of scheduled notifications.
pub struct NotificationWorker {
    receiver: mpsc::UnboundedReceiver<TripNotification>,
    notifier: Arc<dyn TripNotifier>,
    in_flight: JoinSet<()>,
}

impl NotificationWorker {
    /// Run until the shutdown signal fires or every dispatcher is dropped.
    ///
    /// Returns the number of notifications handed to the notifier.
    pub async fn run(mut self, mut shutdown: watch::Receiver<bool>) -> usize {
        let mut started = 0;

        if *shutdown.borrow() {
            return self.drain(started).await;
        }

        loop {
            tokio::select! {
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        tracing::info!("Notification worker shutting down");
                        return self.drain(started).await;
                    }
                }

                next = self.receiver.recv() => match next {
                    Some(notification) => {
                        self.start(notification);
                        started += 1;
                    }
                    None => {
                        tracing::info!("All notification dispatchers dropped");
                        return self.drain(started).await;
                    }
                },

                Some(joined) = self.in_flight.join_next(), if !self.in_flight.is_empty() => {
                    log_join(joined);
                }
            }
        }
    }

    fn start(&mut self, notification: TripNotification) {
        let notifier = Arc::clone(&self.notifier);
        self.in_flight.spawn(deliver(notifier, notification));
    }

    async fn drain(mut self, mut started: usize) -> usize {
        self.receiver.close();
        while let Ok(notification) = self.receiver.try_recv() {
            self.start(notification);
            started += 1;
        }
        while let Some(joined) = self.in_flight.join_next().await {
            log_join(joined);
        }
        started
    }
}

/// Deliver one notification, logging instead of propagating failures.
pub async fn deliver(notifier: Arc<dyn TripNotifier>, notification: TripNotification) {
    let result = match &notification {
        TripNotification::OwnerTripCreated(trip_id) => {
            notifier.notify_owner_trip_created(trip_id).await
        }
        TripNotification::ParticipantsTripConfirmed(trip_id) => {
            notifier.notify_participants_trip_confirmed(trip_id).await
        }
    };

    match result {
        Ok(()) => tracing::info!(
            kind = notification.kind(),
            trip_id = %notification.trip_id(),
            "Notification delivered"
        ),
        Err(e) => tracing::error!(
            kind = notification.kind(),
            trip_id = %notification.trip_id(),
            error = %e,
            "Failed to deliver notification"
        ),
    }
}

fn log_join(joined: Result<(), tokio::task::JoinError>) {
    if let Err(e) = joined {
        tracing::error!(error = %e, "Notification delivery task aborted");
    }
}
