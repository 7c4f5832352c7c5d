// Bulk mail to selected reservation holders via the notification gateway.
//
// One gateway call for the whole recipient set; a failure fails the mailing
// as a whole, per-recipient delivery is not isolated.

use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::shared::infrastructure::mailer::MailerError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct SendMailingBody {
    pub recipients: Vec<String>,
    pub subject: String,
    pub body: String,
}

#[derive(Serialize)]
pub struct SendMailingResponse {
    pub message_id: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<SendMailingBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state
        .mailer
        .send_bulk(&body.recipients, &body.subject, &body.body)
        .await
    {
        Ok(message_id) => (
            StatusCode::ACCEPTED,
            Json(SendMailingResponse { message_id }),
        )
            .into_response(),
        Err(error @ (MailerError::NoRecipients | MailerError::InvalidAddress(_))) => {
            (StatusCode::UNPROCESSABLE_ENTITY, error.to_string()).into_response()
        }
        Err(error) => {
            tracing::error!(%error, "bulk mailing failed");
            StatusCode::BAD_GATEWAY.into_response()
        }
    }
}
