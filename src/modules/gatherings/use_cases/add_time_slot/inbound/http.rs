use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::gatherings::handler::GatheringCommand;
use crate::modules::gatherings::use_cases::add_time_slot::command::AddTimeSlot;
use crate::modules::gatherings::use_cases::respond::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct AddTimeSlotBody {
    pub label: String,
    pub max_participants: i64,
    pub expected_version: i64,
}

#[derive(Serialize)]
pub struct AddTimeSlotResponse {
    pub slot_id: String,
    pub version: i64,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(gathering_id): Path<String>,
    body: Result<Json<AddTimeSlotBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let slot_id = Uuid::now_v7().to_string();
    let command = AddTimeSlot {
        gathering_id: gathering_id.clone(),
        slot_id: slot_id.clone(),
        label: body.label,
        max_participants: body.max_participants,
        occurred_at: Utc::now().timestamp_millis(),
    };

    match state
        .handler
        .execute(
            &gathering_id,
            Some(body.expected_version),
            GatheringCommand::AddSlot(command),
        )
        .await
    {
        Ok(version) => (
            StatusCode::CREATED,
            Json(AddTimeSlotResponse { slot_id, version }),
        )
            .into_response(),
        Err(error) => error_response(error),
    }
}
