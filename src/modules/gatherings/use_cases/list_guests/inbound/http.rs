// Admin guest listing: reservation holders aggregated by email, the source
// for the bulk-mail recipient picker.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match state.queries.list_guests().await {
        Ok(guests) => Json(guests).into_response(),
        Err(error) => {
            tracing::error!(%error, "guest listing failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
