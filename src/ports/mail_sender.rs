//! MailSender port - outbound email transport.

use async_trait::async_trait;

use super::NotificationError;

/// A rendered plain-text email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Port for delivering a single email.
#[async_trait]
pub trait MailSender: Send + Sync {
    /// Send one message to one recipient.
    ///
    /// # Errors
    ///
    /// - `InvalidMessage` if the message cannot be built
    /// - `Delivery` if the transport rejects it
    async fn send(&self, message: EmailMessage) -> Result<(), NotificationError>;
}
