// Admin reservation list for one gathering, grouped by time slot so the
// screen can expand and collapse per slot.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(gathering_id): Path<String>,
) -> impl IntoResponse {
    match state.queries.list_reservations(&gathering_id).await {
        Ok(groups) => Json(groups).into_response(),
        Err(error) => {
            tracing::error!(%error, "reservation listing failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
