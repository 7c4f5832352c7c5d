// Notification gateway port.
//
// One call delivers the whole recipient set: a single message with every
// address in blind carbon copy and a fixed sender. No retry, no batching;
// partial failure is not isolated per recipient.

use async_trait::async_trait;
use thiserror::Error;

pub mod console;
pub mod recording;
pub mod smtp;

#[derive(Debug, Error)]
pub enum MailerError {
    #[error("no recipients")]
    NoRecipients,

    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("message could not be built: {0}")]
    Message(String),

    #[error("transport failed: {0}")]
    Transport(String),
}

#[async_trait]
pub trait Mailer: Send + Sync {
    /// Returns the message id of the sent mail.
    async fn send_bulk(
        &self,
        recipients: &[String],
        subject: &str,
        body: &str,
    ) -> Result<String, MailerError>;
}
