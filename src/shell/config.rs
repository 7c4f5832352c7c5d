// Environment configuration.
//
// SMTP settings are optional as a set: with CHAKAI_SMTP_HOST unset the
// binary falls back to the console mailer, which only logs.

use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub media_dir: PathBuf,
    pub media_base_url: String,
    /// Fixed sender for every outgoing mail.
    pub mail_sender: String,
    pub smtp: Option<SmtpConfig>,
}

fn env_or(name: &str, fallback: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| fallback.to_string())
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let host = env_or("CHAKAI_HOST", "0.0.0.0");
        let port = env_or("CHAKAI_PORT", "8080");
        let bind_addr = format!("{host}:{port}");

        let media_dir = PathBuf::from(env_or("CHAKAI_MEDIA_DIR", "./media"));
        let media_base_url = env_or(
            "CHAKAI_MEDIA_BASE_URL",
            &format!("http://localhost:{port}/media"),
        );
        let mail_sender = env_or("CHAKAI_MAIL_SENDER", "Chakai <noreply@example.jp>");

        let smtp = match std::env::var("CHAKAI_SMTP_HOST") {
            Ok(smtp_host) => Some(SmtpConfig {
                host: smtp_host,
                port: env_or("CHAKAI_SMTP_PORT", "587").parse()?,
                username: std::env::var("CHAKAI_SMTP_USERNAME")?,
                password: std::env::var("CHAKAI_SMTP_PASSWORD")?,
            }),
            Err(_) => None,
        };

        Ok(Self {
            bind_addr,
            media_dir,
            media_base_url,
            mail_sender,
            smtp,
        })
    }
}
