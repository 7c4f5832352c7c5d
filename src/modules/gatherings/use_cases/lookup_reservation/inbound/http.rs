// The owner lookup flow: a guest finds their reservation with the gathering
// and the 6-digit number from their confirmation.

use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct LookupReservationBody {
    pub gathering_id: String,
    pub reservation_number: u32,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<LookupReservationBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state
        .queries
        .find_reservation(&body.gathering_id, body.reservation_number)
        .await
    {
        Ok(Some(view)) => Json(view).into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(error) => {
            tracing::error!(%error, "reservation lookup failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[cfg(test)]
mod lookup_reservation_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::post,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::modules::gatherings::use_cases::create_gathering::inbound::http as create_http;
    use crate::modules::gatherings::use_cases::place_reservation::inbound::http as place_http;
    use crate::test_support::fixtures::http::make_test_state;

    use super::handle;

    #[tokio::test]
    async fn it_should_find_a_reservation_by_gathering_and_number() {
        let state = make_test_state();
        let app = Router::new()
            .route("/admin/gatherings", post(create_http::handle))
            .route("/gatherings/{id}/reservations", post(place_http::handle))
            .route("/reservations/lookup", post(handle))
            .with_state(state.clone());

        let body = r#"{"title":"Spring tea gathering","venue":"Kouetsu-an","held_on":"2026-04-29","cost_per_person":1500,"slots":[{"label":"10:00","max_participants":10}]}"#;
        let response = app
            .clone()
            .oneshot(
                Request::post("/admin/gatherings")
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let created: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        let gathering_id = created["gathering_id"].as_str().unwrap();
        let slot_id = state
            .queries
            .get_gathering(gathering_id)
            .await
            .unwrap()
            .unwrap()
            .slots[0]
            .slot_id
            .clone();

        let body = format!(
            r#"{{"slot_id":"{slot_id}","guest_name":"Sen Rikyu","email":"rikyu@example.jp","party_size":2}}"#
        );
        let response = app
            .clone()
            .oneshot(
                Request::post(format!("/gatherings/{gathering_id}/reservations"))
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let placed: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        let number = placed["reservation_number"].as_u64().unwrap();

        let body = format!(
            r#"{{"gathering_id":"{gathering_id}","reservation_number":{number}}}"#
        );
        let response = app
            .clone()
            .oneshot(
                Request::post("/reservations/lookup")
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let found: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(found["guest_name"], "Sen Rikyu");
        assert_eq!(found["total_cost"], serde_json::json!(3000));

        // A wrong number finds nothing.
        let wrong = if number == 100_000 { 100_001 } else { number - 1 };
        let body = format!(
            r#"{{"gathering_id":"{gathering_id}","reservation_number":{wrong}}}"#
        );
        let response = app
            .oneshot(
                Request::post("/reservations/lookup")
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
