use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::modules::gatherings::handler::GatheringCommand;
use crate::modules::gatherings::use_cases::change_reservation::command::ChangeReservation;
use crate::modules::gatherings::use_cases::respond::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ChangeReservationBody {
    pub slot_id: String,
    pub guest_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub party_size: i64,
    #[serde(default)]
    pub companions: Vec<String>,
    #[serde(default)]
    pub notes: String,
    pub expected_version: i64,
}

#[derive(Serialize)]
pub struct ChangeReservationResponse {
    pub version: i64,
}

pub async fn handle(
    State(state): State<AppState>,
    Path((gathering_id, reservation_id)): Path<(String, String)>,
    body: Result<Json<ChangeReservationBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = ChangeReservation {
        gathering_id: gathering_id.clone(),
        reservation_id,
        slot_id: body.slot_id,
        guest_name: body.guest_name,
        email: body.email,
        phone: body.phone,
        party_size: body.party_size,
        companions: body.companions,
        notes: body.notes,
        occurred_at: Utc::now().timestamp_millis(),
    };

    match state
        .handler
        .execute(
            &gathering_id,
            Some(body.expected_version),
            GatheringCommand::Change(command),
        )
        .await
    {
        Ok(version) => Json(ChangeReservationResponse { version }).into_response(),
        Err(error) => error_response(error),
    }
}
