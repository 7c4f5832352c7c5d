// Shared mapping from application errors onto HTTP responses.
//
// Status conventions
// - Unknown gathering / slot / reservation, removed gathering: 404
// - Capacity, duplicate-number, already-exists, version conflicts: 409
// - Validation rejections: 422
// - Anything infrastructural: 500, logged, body kept generic.

use crate::modules::gatherings::core::decision::DecideError;
use crate::modules::gatherings::handler::ApplicationError;
use crate::shared::infrastructure::event_store::EventStoreError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

pub fn error_response(error: ApplicationError) -> Response {
    let status = match &error {
        ApplicationError::Domain(decide_error) => match decide_error {
            DecideError::UnknownGathering
            | DecideError::GatheringRemoved
            | DecideError::UnknownTimeSlot
            | DecideError::UnknownReservation => StatusCode::NOT_FOUND,

            DecideError::AlreadyExists
            | DecideError::SlotFull { .. }
            | DecideError::ReservationNumberTaken => StatusCode::CONFLICT,

            DecideError::EmptyParty
            | DecideError::TooManyCompanions
            | DecideError::EmptyTitle
            | DecideError::NegativeCost
            | DecideError::EmptySlotLabel
            | DecideError::NegativeCapacity
            | DecideError::DuplicateSlotLabel => StatusCode::UNPROCESSABLE_ENTITY,
        },

        ApplicationError::Stale { .. } => StatusCode::CONFLICT,
        ApplicationError::VersionConflict(EventStoreError::VersionMismatch { .. }) => {
            StatusCode::CONFLICT
        }

        ApplicationError::VersionConflict(EventStoreError::Backend(_))
        | ApplicationError::Projection(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status == StatusCode::INTERNAL_SERVER_ERROR {
        tracing::error!(%error, "request failed");
        return status.into_response();
    }

    (
        status,
        Json(ErrorBody {
            error: error.to_string(),
        }),
    )
        .into_response()
}
