//! SMTP mail sender built on lettre's async Tokio transport.
//!
//! Works against a local catcher such as Mailpit (plain SMTP, no auth) as
//! well as a real relay (STARTTLS with credentials).

use async_trait::async_trait;
use lettre::message::{header::ContentType, Mailbox};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use secrecy::ExposeSecret;

use crate::config::SmtpConfig;
use crate::ports::{EmailMessage, MailSender, NotificationError};

/// Errors raised while building the SMTP transport.
#[derive(Debug, thiserror::Error)]
pub enum SmtpSetupError {
    #[error("Invalid sender address '{address}': {reason}")]
    InvalidSender { address: String, reason: String },

    #[error("Failed to configure SMTP relay {host}: {reason}")]
    Transport { host: String, reason: String },
}

/// `MailSender` that talks SMTP.
pub struct SmtpMailSender {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailSender {
    /// Build a sender from configuration.
    ///
    /// No connection is opened here; lettre connects lazily per message.
    pub fn from_config(config: &SmtpConfig) -> Result<Self, SmtpSetupError> {
        let from: Mailbox = config
            .from_header()
            .parse()
            .map_err(|e: lettre::address::AddressError| SmtpSetupError::InvalidSender {
                address: config.from_header(),
                reason: e.to_string(),
            })?;

        let mut builder = if config.starttls {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host).map_err(|e| {
                SmtpSetupError::Transport {
                    host: config.host.clone(),
                    reason: e.to_string(),
                }
            })?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.host)
        };

        builder = builder.port(config.port).timeout(Some(config.timeout()));

        if let (Some(username), Some(password)) = (&config.username, &config.password) {
            builder = builder.credentials(Credentials::new(
                username.clone(),
                password.expose_secret().clone(),
            ));
        }

        tracing::info!(
            host = %config.host,
            port = config.port,
            starttls = config.starttls,
            "SMTP mail sender configured"
        );

        Ok(Self {
            transport: builder.build(),
            from,
        })
    }

    fn build(&self, message: EmailMessage) -> Result<Message, NotificationError> {
        let invalid = |recipient: &str, reason: String| NotificationError::InvalidMessage {
            recipient: recipient.to_string(),
            reason,
        };

        let to: Mailbox = message
            .to
            .parse()
            .map_err(|e: lettre::address::AddressError| invalid(&message.to, e.to_string()))?;

        Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(message.subject)
            .header(ContentType::TEXT_PLAIN)
            .body(message.body)
            .map_err(|e| invalid(&message.to, e.to_string()))
    }
}

#[async_trait]
impl MailSender for SmtpMailSender {
    async fn send(&self, message: EmailMessage) -> Result<(), NotificationError> {
        let recipient = message.to.clone();
        let email = self.build(message)?;

        self.transport
            .send(email)
            .await
            .map_err(|e| NotificationError::Delivery {
                recipient: recipient.clone(),
                reason: e.to_string(),
            })?;

        tracing::debug!(recipient = %recipient, "Email sent");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mailpit() -> SmtpConfig {
        SmtpConfig::default()
    }

    #[tokio::test]
    async fn builds_sender_for_plain_smtp() {
        assert!(SmtpMailSender::from_config(&mailpit()).is_ok());
    }

    #[tokio::test]
    async fn rejects_invalid_sender_address() {
        let config = SmtpConfig {
            from_email: "not-an-address".to_string(),
            ..mailpit()
        };
        assert!(matches!(
            SmtpMailSender::from_config(&config),
            Err(SmtpSetupError::InvalidSender { .. })
        ));
    }

    #[tokio::test]
    async fn invalid_recipient_is_rejected_before_sending() {
        let sender = SmtpMailSender::from_config(&mailpit()).unwrap();
        let err = sender
            .send(EmailMessage {
                to: "nobody".to_string(),
                subject: "Confirm your trip".to_string(),
                body: "Hello!".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, NotificationError::InvalidMessage { .. }));
    }
}
