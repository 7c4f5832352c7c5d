// Two doors into the same cancellation: the admin list (by reservation id,
// version-checked) and the holder's lookup flow (by gathering + 6-digit
// number, no version).

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde::Deserialize;

use crate::modules::gatherings::handler::GatheringCommand;
use crate::modules::gatherings::use_cases::cancel_reservation::command::CancelReservation;
use crate::modules::gatherings::use_cases::respond::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct CancelReservationBody {
    pub expected_version: i64,
}

pub async fn handle(
    State(state): State<AppState>,
    Path((gathering_id, reservation_id)): Path<(String, String)>,
    body: Result<Json<CancelReservationBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = CancelReservation {
        gathering_id: gathering_id.clone(),
        reservation_id,
        occurred_at: Utc::now().timestamp_millis(),
    };

    match state
        .handler
        .execute(
            &gathering_id,
            Some(body.expected_version),
            GatheringCommand::Cancel(command),
        )
        .await
    {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}

#[derive(Deserialize)]
pub struct HolderCancelBody {
    pub gathering_id: String,
    pub reservation_number: u32,
}

pub async fn handle_holder(
    State(state): State<AppState>,
    body: Result<Json<HolderCancelBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let found = match state
        .queries
        .find_reservation(&body.gathering_id, body.reservation_number)
        .await
    {
        Ok(found) => found,
        Err(error) => {
            tracing::error!(%error, "reservation lookup failed");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };
    let Some(reservation) = found else {
        return StatusCode::NOT_FOUND.into_response();
    };

    let command = CancelReservation {
        gathering_id: body.gathering_id.clone(),
        reservation_id: reservation.reservation_id,
        occurred_at: Utc::now().timestamp_millis(),
    };

    match state
        .handler
        .execute(&body.gathering_id, None, GatheringCommand::Cancel(command))
        .await
    {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}
