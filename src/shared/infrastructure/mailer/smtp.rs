// SMTP mailer using lettre.

use crate::shared::infrastructure::mailer::{Mailer, MailerError};
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use uuid::Uuid;

pub struct SmtpMailer {
    smtp_server: String,
    smtp_port: u16,
    credentials: Credentials,
    /// Fixed sender, e.g. `Chakai <noreply@example.jp>`.
    sender: String,
}

impl SmtpMailer {
    pub fn new(
        smtp_server: String,
        smtp_port: u16,
        smtp_username: String,
        smtp_password: String,
        sender: String,
    ) -> Self {
        Self {
            smtp_server,
            smtp_port,
            credentials: Credentials::new(smtp_username, smtp_password),
            sender,
        }
    }

    fn build_transport(&self) -> Result<AsyncSmtpTransport<Tokio1Executor>, MailerError> {
        Ok(
            AsyncSmtpTransport::<Tokio1Executor>::relay(&self.smtp_server)
                .map_err(|error| MailerError::Transport(format!("SMTP relay error: {error}")))?
                .port(self.smtp_port)
                .credentials(self.credentials.clone())
                .build(),
        )
    }

    fn sender_mailbox(&self) -> Result<Mailbox, MailerError> {
        self.sender
            .parse()
            .map_err(|_| MailerError::InvalidAddress(self.sender.clone()))
    }
}

#[async_trait::async_trait]
impl Mailer for SmtpMailer {
    async fn send_bulk(
        &self,
        recipients: &[String],
        subject: &str,
        body: &str,
    ) -> Result<String, MailerError> {
        if recipients.is_empty() {
            return Err(MailerError::NoRecipients);
        }

        let sender = self.sender_mailbox()?;
        let message_id = format!("<{}@chakai>", Uuid::now_v7());

        // Addresses go in BCC so recipients never see each other.
        let mut builder = Message::builder()
            .from(sender.clone())
            .to(sender)
            .subject(subject)
            .message_id(Some(message_id.clone()))
            .header(ContentType::TEXT_PLAIN);
        for recipient in recipients {
            builder = builder.bcc(recipient
                .parse()
                .map_err(|_| MailerError::InvalidAddress(recipient.clone()))?);
        }
        let message = builder
            .body(body.to_string())
            .map_err(|error| MailerError::Message(error.to_string()))?;

        let transport = self.build_transport()?;
        transport
            .send(message)
            .await
            .map_err(|error| MailerError::Transport(error.to_string()))?;

        tracing::info!(recipients = recipients.len(), %message_id, "bulk mail sent");
        Ok(message_id)
    }
}
