//! Outbound mail configuration

use secrecy::Secret;
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// SMTP relay configuration.
///
/// Defaults target a local Mailpit instance (plain SMTP on 1025, no auth).
#[derive(Debug, Clone, Deserialize)]
pub struct SmtpConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// From email address
    #[serde(default = "default_from_email")]
    pub from_email: String,

    /// From display name
    #[serde(default = "default_from_name")]
    pub from_name: String,

    pub username: Option<String>,

    pub password: Option<Secret<String>>,

    /// Upgrade the connection with STARTTLS
    #[serde(default)]
    pub starttls: bool,

    /// Per-message SMTP timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl SmtpConfig {
    /// Get formatted "From" header value
    pub fn from_header(&self) -> String {
        format!("{} <{}>", self.from_name, self.from_email)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate SMTP configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.host.is_empty() {
            return Err(ValidationError::MissingRequired("JOURNEY__SMTP__HOST"));
        }
        if self.port == 0 {
            return Err(ValidationError::InvalidPort("smtp"));
        }
        if !self.from_email.contains('@') {
            return Err(ValidationError::InvalidFromEmail);
        }
        if self.username.is_some() != self.password.is_some() {
            return Err(ValidationError::IncompleteSmtpCredentials);
        }
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout("smtp"));
        }
        Ok(())
    }
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            from_email: default_from_email(),
            from_name: default_from_name(),
            username: None,
            password: None,
            starttls: false,
            timeout_secs: default_timeout(),
        }
    }
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    1025
}

fn default_from_email() -> String {
    "mailpit@journey.com".to_string()
}

fn default_from_name() -> String {
    "Journey".to_string()
}

fn default_timeout() -> u64 {
    10
}
