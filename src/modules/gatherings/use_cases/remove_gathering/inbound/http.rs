use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde::Deserialize;

use crate::modules::gatherings::handler::GatheringCommand;
use crate::modules::gatherings::use_cases::remove_gathering::command::RemoveGathering;
use crate::modules::gatherings::use_cases::respond::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct RemoveGatheringBody {
    pub expected_version: i64,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(gathering_id): Path<String>,
    body: Result<Json<RemoveGatheringBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = RemoveGathering {
        gathering_id: gathering_id.clone(),
        occurred_at: Utc::now().timestamp_millis(),
    };

    match state
        .handler
        .execute(
            &gathering_id,
            Some(body.expected_version),
            GatheringCommand::Remove(command),
        )
        .await
    {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}
