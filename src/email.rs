use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use tracing::info;

use crate::config::EmailConfig;
use crate::error::AppError;
use crate::notifier::NotificationSink;

/// SMTP alert transport. The operator address is both sender and recipient;
/// credentials come from the environment, never from the config file.
pub struct EmailSink {
    mailbox: Mailbox,
    transport: SmtpTransport,
}

impl EmailSink {
    pub fn new(config: &EmailConfig) -> Result<Self, AppError> {
        let mailbox: Mailbox = config.address.parse().map_err(|e| {
            AppError::Config(format!("invalid email address '{}': {e}", config.address))
        })?;
        let transport = SmtpTransport::relay(&config.smtp_host)
            .map_err(|e| {
                AppError::Config(format!("SMTP relay '{}' rejected: {e}", config.smtp_host))
            })?
            .port(config.smtp_port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();
        Ok(Self { mailbox, transport })
    }
}

impl NotificationSink for EmailSink {
    fn notify(&self, subject: &str, body: &str) -> Result<(), AppError> {
        let message = Message::builder()
            .from(self.mailbox.clone())
            .to(self.mailbox.clone())
            .subject(subject)
            .body(body.to_string())
            .map_err(|e| AppError::Notify(format!("failed to build message: {e}")))?;
        self.transport
            .send(&message)
            .map_err(|e| AppError::Notify(e.to_string()))?;
        Ok(())
    }
}

/// Used when email alerts are disabled in config: logs the alert and drops it.
pub struct NullSink;

impl NotificationSink for NullSink {
    fn notify(&self, subject: &str, _body: &str) -> Result<(), AppError> {
        info!(subject, "email alerts disabled; dropping notification");
        Ok(())
    }
}
