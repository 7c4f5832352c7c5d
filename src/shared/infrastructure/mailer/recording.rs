// Recording mailer: a test double that keeps every send for inspection.

use crate::shared::infrastructure::mailer::{Mailer, MailerError};
use tokio::sync::Mutex;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedMail {
    pub recipients: Vec<String>,
    pub subject: String,
    pub body: String,
    pub message_id: String,
}

#[derive(Default)]
pub struct RecordingMailer {
    pub sent: Mutex<Vec<RecordedMail>>,
}

impl RecordingMailer {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl Mailer for RecordingMailer {
    async fn send_bulk(
        &self,
        recipients: &[String],
        subject: &str,
        body: &str,
    ) -> Result<String, MailerError> {
        if recipients.is_empty() {
            return Err(MailerError::NoRecipients);
        }
        let message_id = format!("<{}@chakai.test>", Uuid::now_v7());
        self.sent.lock().await.push(RecordedMail {
            recipients: recipients.to_vec(),
            subject: subject.to_string(),
            body: body.to_string(),
            message_id: message_id.clone(),
        });
        Ok(message_id)
    }
}
