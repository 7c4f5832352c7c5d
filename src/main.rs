use std::sync::Arc;

use chakai::shared::infrastructure::mailer::console::ConsoleMailer;
use chakai::shared::infrastructure::mailer::smtp::SmtpMailer;
use chakai::shared::infrastructure::mailer::Mailer;
use chakai::shared::infrastructure::media_store::fs::FsMediaStore;
use chakai::shell::config::Config;
use chakai::shell::http::router;
use chakai::shell::state::AppState;
use tower_http::services::ServeDir;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;

    let mailer: Arc<dyn Mailer> = match &config.smtp {
        Some(smtp) => {
            tracing::info!(host = %smtp.host, "using SMTP mailer");
            Arc::new(SmtpMailer::new(
                smtp.host.clone(),
                smtp.port,
                smtp.username.clone(),
                smtp.password.clone(),
                config.mail_sender.clone(),
            ))
        }
        None => {
            tracing::info!("no SMTP configured, using console mailer");
            Arc::new(ConsoleMailer::new())
        }
    };
    let media = Arc::new(FsMediaStore::new(
        config.media_dir.clone(),
        config.media_base_url.clone(),
    ));

    let state = AppState::in_memory(mailer, media);
    let app = router(state).nest_service("/media", ServeDir::new(&config.media_dir));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "chakai listening");
    axum::serve(listener, app).await?;

    Ok(())
}
