use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::modules::gatherings::handler::GatheringCommand;
use crate::modules::gatherings::use_cases::respond::error_response;
use crate::modules::gatherings::use_cases::update_time_slot::command::UpdateTimeSlot;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct UpdateTimeSlotBody {
    pub label: String,
    pub max_participants: i64,
    pub expected_version: i64,
}

#[derive(Serialize)]
pub struct UpdateTimeSlotResponse {
    pub version: i64,
}

pub async fn handle(
    State(state): State<AppState>,
    Path((gathering_id, slot_id)): Path<(String, String)>,
    body: Result<Json<UpdateTimeSlotBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = UpdateTimeSlot {
        gathering_id: gathering_id.clone(),
        slot_id,
        label: body.label,
        max_participants: body.max_participants,
        occurred_at: Utc::now().timestamp_millis(),
    };

    match state
        .handler
        .execute(
            &gathering_id,
            Some(body.expected_version),
            GatheringCommand::UpdateSlot(command),
        )
        .await
    {
        Ok(version) => Json(UpdateTimeSlotResponse { version }).into_response(),
        Err(error) => error_response(error),
    }
}
