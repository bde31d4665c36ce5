//! Integration tests for confirmation emails.
//!
//! These tests verify the detached notification flow:
//! 1. Lifecycle handlers hand notifications to the dispatcher and return
//! 2. The worker delivers them through the mail notifier
//! 3. The notifier renders emails from stored data at send time
//! 4. Shutdown drains queued notifications before the worker exits
//!
//! Mail delivery is captured by a recording sender instead of SMTP.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use tokio::sync::watch;

use journey::adapters::memory::InMemoryJourneyStore;
use journey::adapters::notifications::{
    MailTripNotifier, NotificationDispatcher, NotificationWorker, CONFIRM_TRIP_SUBJECT,
};
use journey::application::{
    ConfirmTripCommand, ConfirmTripHandler, CreateTripCommand, CreateTripHandler,
};
use journey::domain::foundation::{Timestamp, TripId};
use journey::ports::{
    EmailMessage, MailSender, NotificationError, NotificationScheduler, TripNotification,
};

// =============================================================================
// Test Infrastructure
// =============================================================================

/// Captures sent mail; recipients listed in `reject` fail delivery.
#[derive(Default)]
struct RecordingMailer {
    sent: Mutex<Vec<EmailMessage>>,
    reject: HashSet<String>,
}

impl RecordingMailer {
    fn rejecting(recipients: &[&str]) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            reject: recipients.iter().map(|r| r.to_string()).collect(),
        }
    }

    fn sent(&self) -> Vec<EmailMessage> {
        self.sent.lock().unwrap().clone()
    }

    fn recipients(&self) -> HashSet<String> {
        self.sent().into_iter().map(|m| m.to).collect()
    }
}

#[async_trait]
impl MailSender for RecordingMailer {
    async fn send(&self, message: EmailMessage) -> Result<(), NotificationError> {
        if self.reject.contains(&message.to) {
            return Err(NotificationError::Delivery {
                recipient: message.to,
                reason: "mailbox unavailable".to_string(),
            });
        }
        self.sent.lock().unwrap().push(message);
        Ok(())
    }
}

struct Harness {
    store: InMemoryJourneyStore,
    mailer: Arc<RecordingMailer>,
    dispatcher: NotificationDispatcher,
    worker: NotificationWorker,
}

fn harness(mailer: RecordingMailer) -> Harness {
    let store = InMemoryJourneyStore::new();
    let mailer = Arc::new(mailer);
    let notifier = Arc::new(MailTripNotifier::new(
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        mailer.clone(),
    ));
    let (dispatcher, worker) = NotificationDispatcher::new(notifier);
    Harness {
        store,
        mailer,
        dispatcher,
        worker,
    }
}

fn day(d: u32) -> Timestamp {
    Timestamp::from_datetime(Utc.with_ymd_and_hms(2024, 6, d, 0, 0, 0).unwrap())
}

fn rio_trip(invites: &[&str]) -> CreateTripCommand {
    CreateTripCommand {
        destination: "Rio".to_string(),
        starts_at: Some(day(1)),
        ends_at: Some(day(10)),
        owner_name: "Ana".to_string(),
        owner_email: "ana@x.com".to_string(),
        emails_to_invite: invites.iter().map(|s| s.to_string()).collect(),
    }
}

// =============================================================================
// End-to-end delivery
// =============================================================================

#[tokio::test]
async fn create_and_confirm_send_owner_then_participant_emails() {
    let Harness {
        store,
        mailer,
        dispatcher,
        worker,
    } = harness(RecordingMailer::default());
    let scheduler: Arc<dyn NotificationScheduler> = Arc::new(dispatcher);
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let worker = tokio::spawn(worker.run(shutdown_rx));

    let create = CreateTripHandler::new(Arc::new(store.clone()), scheduler.clone());
    let confirm = ConfirmTripHandler::new(Arc::new(store.clone()), scheduler);

    let trip_id = *create
        .handle(rio_trip(&["bob@x.com", "cy@x.com"]))
        .await
        .unwrap()
        .trip_id();
    confirm
        .handle(ConfirmTripCommand { trip_id: trip_id.to_string() })
        .await
        .unwrap();

    shutdown_tx.send(true).unwrap();
    let delivered = worker.await.unwrap();

    assert_eq!(delivered, 2);
    let sent = mailer.sent();
    // Owner email on creation, then one per participant (owner included)
    assert_eq!(sent.len(), 4);
    assert!(sent.iter().all(|m| m.subject == CONFIRM_TRIP_SUBJECT));

    let to_owner: Vec<&EmailMessage> = sent.iter().filter(|m| m.to == "ana@x.com").collect();
    assert_eq!(to_owner.len(), 2);
    let owner_mail = to_owner
        .iter()
        .find(|m| m.body.starts_with("Hello, Ana!"))
        .unwrap();
    assert!(owner_mail.body.contains("Rio"));

    let bob_mail = sent.iter().find(|m| m.to == "bob@x.com").unwrap();
    assert!(bob_mail.body.contains("Ana"));
    assert!(sent.iter().any(|m| m.to == "cy@x.com"));
}

#[tokio::test]
async fn one_failing_recipient_does_not_block_the_rest() {
    let Harness {
        store,
        mailer,
        dispatcher,
        worker,
    } = harness(RecordingMailer::rejecting(&["bob@x.com"]));
    let scheduler: Arc<dyn NotificationScheduler> = Arc::new(dispatcher);
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let worker = tokio::spawn(worker.run(shutdown_rx));

    let create = CreateTripHandler::new(Arc::new(store.clone()), scheduler.clone());
    let confirm = ConfirmTripHandler::new(Arc::new(store.clone()), scheduler);
    let trip_id = *create
        .handle(rio_trip(&["bob@x.com", "cy@x.com"]))
        .await
        .unwrap()
        .trip_id();

    // The lifecycle call succeeds regardless of delivery
    assert!(confirm
        .handle(ConfirmTripCommand { trip_id: trip_id.to_string() })
        .await
        .is_ok());

    shutdown_tx.send(true).unwrap();
    worker.await.unwrap();

    let recipients = mailer.recipients();
    assert!(recipients.contains("cy@x.com"));
    assert!(!recipients.contains("bob@x.com"));
}

#[tokio::test]
async fn notification_for_missing_trip_sends_nothing() {
    let Harness {
        mailer,
        dispatcher,
        worker,
        ..
    } = harness(RecordingMailer::default());
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let worker = tokio::spawn(worker.run(shutdown_rx));

    dispatcher.schedule(TripNotification::ParticipantsTripConfirmed(TripId::new()));
    shutdown_tx.send(true).unwrap();

    assert_eq!(worker.await.unwrap(), 1);
    assert!(mailer.sent().is_empty());
}

// =============================================================================
// Shutdown
// =============================================================================

#[tokio::test]
async fn shutdown_drains_notifications_queued_before_the_worker_started() {
    let Harness {
        store,
        mailer,
        dispatcher,
        worker,
    } = harness(RecordingMailer::default());
    let create = CreateTripHandler::new(Arc::new(store.clone()), Arc::new(dispatcher.clone()));
    for _ in 0..3 {
        create.handle(rio_trip(&[])).await.unwrap();
    }

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    shutdown_tx.send(true).unwrap();
    let delivered = worker.run(shutdown_rx).await;

    assert_eq!(delivered, 3);
    assert_eq!(mailer.sent().len(), 3);

    // Worker is gone; further schedules are dropped without panicking
    dispatcher.schedule(TripNotification::OwnerTripCreated(TripId::new()));
}

#[tokio::test]
async fn worker_exits_when_every_dispatcher_is_dropped() {
    let Harness {
        mailer,
        dispatcher,
        worker,
        ..
    } = harness(RecordingMailer::default());
    let (_shutdown_tx, shutdown_rx) = watch::channel(false);
    let worker = tokio::spawn(worker.run(shutdown_rx));

    dispatcher.schedule(TripNotification::OwnerTripCreated(TripId::new()));
    drop(dispatcher);

    assert_eq!(worker.await.unwrap(), 1);
    assert!(mailer.sent().is_empty());
}
