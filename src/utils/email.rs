//! Outbound email.
//!
//! [`Mailer`] is the seam between the offer flow and the SMTP relay. It is
//! synchronous; async callers go through [`deliver`], which moves the send
//! onto the blocking pool.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use grillz_config::EmailConfig;
use lettre::message::{Mailbox, header::ContentType};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use tracing::instrument;

#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("Email not configured. Missing: {}", .0.join(", "))]
    NotConfigured(Vec<&'static str>),
    #[error("invalid address '{address}': {reason}")]
    InvalidAddress { address: String, reason: String },
    #[error("{0}")]
    Transport(String),
}

/// A plain-text message ready to hand to a [`Mailer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub to: String,
    pub reply_to: Option<String>,
    pub subject: String,
    pub body: String,
}

pub trait Mailer: Send + Sync + fmt::Debug {
    fn send(&self, email: &OutgoingEmail) -> Result<(), MailError>;
}

/// Sends `email` without blocking the async runtime.
pub async fn deliver(mailer: Arc<dyn Mailer>, email: OutgoingEmail) -> Result<(), MailError> {
    tokio::task::spawn_blocking(move || mailer.send(&email))
        .await
        .map_err(|e| MailError::Transport(format!("Task join error: {}", e)))?
}

/// STARTTLS relay with password authentication.
#[derive(Debug, Clone)]
pub struct SmtpMailer {
    config: EmailConfig,
}

impl SmtpMailer {
    pub fn new(config: EmailConfig) -> Self {
        Self { config }
    }

    fn transport(&self) -> Result<SmtpTransport, MailError> {
        let missing = self.config.missing_keys();
        let (Some(host), Some(username), Some(password)) = (
            self.config.smtp_host.as_deref(),
            self.config.smtp_username.clone(),
            self.config.smtp_password.clone(),
        ) else {
            return Err(MailError::NotConfigured(missing));
        };

        let transport = SmtpTransport::starttls_relay(host)
            .map_err(|e| MailError::Transport(format!("Failed to create SMTP relay: {}", e)))?
            .port(self.config.smtp_port)
            .credentials(Credentials::new(username, password))
            .timeout(Some(Duration::from_secs(self.config.timeout_secs)))
            .build();

        Ok(transport)
    }

    fn sender(&self) -> Result<Mailbox, MailError> {
        let address = self
            .config
            .from_email
            .as_deref()
            .ok_or_else(|| MailError::NotConfigured(vec!["EMAIL_FROM"]))?;
        let mailbox = parse_mailbox(address)?;
        Ok(Mailbox::new(Some(self.config.from_name.clone()), mailbox.email))
    }
}

impl Mailer for SmtpMailer {
    #[instrument(skip(self, email), fields(to = %email.to, subject = %email.subject))]
    fn send(&self, email: &OutgoingEmail) -> Result<(), MailError> {
        let mut builder = Message::builder()
            .from(self.sender()?)
            .to(parse_mailbox(&email.to)?)
            .subject(email.subject.clone());

        if let Some(reply_to) = &email.reply_to {
            builder = builder.reply_to(parse_mailbox(reply_to)?);
        }

        let message = builder
            .header(ContentType::TEXT_PLAIN)
            .body(email.body.clone())
            .map_err(|e| MailError::Transport(format!("Failed to build email: {}", e)))?;

        self.transport()?
            .send(&message)
            .map_err(|e| MailError::Transport(e.to_string()))?;

        tracing::info!("Email sent");
        Ok(())
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox, MailError> {
    address
        .parse::<Mailbox>()
        .map_err(|e| MailError::InvalidAddress {
            address: address.to_string(),
            reason: e.to_string(),
        })
}

/// Keeps every message instead of sending it.
#[cfg(any(test, feature = "test-utils"))]
#[derive(Debug, Default)]
pub struct RecordingMailer {
    sent: std::sync::Mutex<Vec<OutgoingEmail>>,
    fail_for: Option<String>,
}

#[cfg(any(test, feature = "test-utils"))]
impl RecordingMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A mailer that rejects every message addressed to `recipient`.
    pub fn failing_for(recipient: &str) -> Self {
        Self {
            sent: Default::default(),
            fail_for: Some(recipient.to_string()),
        }
    }

    pub fn sent(&self) -> Vec<OutgoingEmail> {
        self.sent
            .lock()
            .map(|sent| sent.clone())
            .unwrap_or_default()
    }
}

#[cfg(any(test, feature = "test-utils"))]
impl Mailer for RecordingMailer {
    fn send(&self, email: &OutgoingEmail) -> Result<(), MailError> {
        if self.fail_for.as_deref() == Some(email.to.as_str()) {
            return Err(MailError::Transport("connection refused".to_string()));
        }
        if let Ok(mut sent) = self.sent.lock() {
            sent.push(email.clone());
        }
        Ok(())
    }
}
