use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::modules::gatherings::handler::GatheringCommand;
use crate::modules::gatherings::use_cases::remove_time_slot::command::RemoveTimeSlot;
use crate::modules::gatherings::use_cases::respond::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct RemoveTimeSlotBody {
    pub expected_version: i64,
}

#[derive(Serialize)]
pub struct RemoveTimeSlotResponse {
    pub version: i64,
}

pub async fn handle(
    State(state): State<AppState>,
    Path((gathering_id, slot_id)): Path<(String, String)>,
    body: Result<Json<RemoveTimeSlotBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = RemoveTimeSlot {
        gathering_id: gathering_id.clone(),
        slot_id,
        occurred_at: Utc::now().timestamp_millis(),
    };

    match state
        .handler
        .execute(
            &gathering_id,
            Some(body.expected_version),
            GatheringCommand::RemoveSlot(command),
        )
        .await
    {
        Ok(version) => Json(RemoveTimeSlotResponse { version }).into_response(),
        Err(error) => error_response(error),
    }
}
