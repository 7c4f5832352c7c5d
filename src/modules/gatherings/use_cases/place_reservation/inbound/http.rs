use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::gatherings::handler::GatheringCommand;
use crate::modules::gatherings::use_cases::place_reservation::command::PlaceReservation;
use crate::modules::gatherings::use_cases::respond::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct PlaceReservationBody {
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
}

#[derive(Serialize)]
pub struct PlaceReservationResponse {
    pub reservation_id: String,
    pub reservation_number: u32,
    pub version: i64,
}

/// Serves both the public booking flow and the admin reservation form.
pub async fn handle(
    State(state): State<AppState>,
    Path(gathering_id): Path<String>,
    body: Result<Json<PlaceReservationBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let reservation_id = Uuid::now_v7().to_string();
    let reservation_number = rand::thread_rng().gen_range(100_000..=999_999);
    let command = PlaceReservation {
        gathering_id: gathering_id.clone(),
        reservation_id: reservation_id.clone(),
        slot_id: body.slot_id,
        reservation_number,
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
        .execute(&gathering_id, None, GatheringCommand::Place(command))
        .await
    {
        Ok(version) => (
            StatusCode::CREATED,
            Json(PlaceReservationResponse {
                reservation_id,
                reservation_number,
                version,
            }),
        )
            .into_response(),
        Err(error) => error_response(error),
    }
}
