// Console mailer for development: logs instead of sending.

use crate::shared::infrastructure::mailer::{Mailer, MailerError};
use uuid::Uuid;

#[derive(Clone, Debug, Default)]
pub struct ConsoleMailer;

impl ConsoleMailer {
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl Mailer for ConsoleMailer {
    async fn send_bulk(
        &self,
        recipients: &[String],
        subject: &str,
        body: &str,
    ) -> Result<String, MailerError> {
        if recipients.is_empty() {
            return Err(MailerError::NoRecipients);
        }
        let message_id = format!("<{}@chakai.dev>", Uuid::now_v7());
        tracing::info!(
            recipients = recipients.len(),
            %subject,
            body_bytes = body.len(),
            %message_id,
            "bulk mail (development mode, not sent)"
        );
        Ok(message_id)
    }
}
