use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::gatherings::handler::GatheringCommand;
use crate::modules::gatherings::use_cases::create_gathering::command::{
    CreateGathering, NewTimeSlot,
};
use crate::modules::gatherings::use_cases::respond::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct NewTimeSlotBody {
    pub label: String,
    pub max_participants: i64,
}

#[derive(Deserialize)]
pub struct CreateGatheringBody {
    pub title: String,
    pub venue: String,
    pub held_on: String,
    pub cost_per_person: i64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    pub slots: Vec<NewTimeSlotBody>,
}

fn default_active() -> bool {
    true
}

#[derive(Serialize)]
pub struct CreateGatheringResponse {
    pub gathering_id: String,
    pub version: i64,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<CreateGatheringBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let gathering_id = Uuid::now_v7().to_string();
    let command = CreateGathering {
        gathering_id: gathering_id.clone(),
        title: body.title,
        venue: body.venue,
        held_on: body.held_on,
        cost_per_person: body.cost_per_person,
        description: body.description,
        image_url: body.image_url,
        is_active: body.is_active,
        slots: body
            .slots
            .into_iter()
            .map(|slot| NewTimeSlot {
                slot_id: Uuid::now_v7().to_string(),
                label: slot.label,
                max_participants: slot.max_participants,
            })
            .collect(),
        occurred_at: Utc::now().timestamp_millis(),
    };

    match state
        .handler
        .execute(&gathering_id, None, GatheringCommand::Create(command))
        .await
    {
        Ok(version) => (
            StatusCode::CREATED,
            Json(CreateGatheringResponse {
                gathering_id,
                version,
            }),
        )
            .into_response(),
        Err(error) => error_response(error),
    }
}

#[cfg(test)]
mod create_gathering_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::post,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::test_support::fixtures::http::make_test_state;

    use super::handle;

    fn app() -> Router {
        Router::new()
            .route("/admin/gatherings", post(handle))
            .with_state(make_test_state())
    }

    #[tokio::test]
    async fn it_should_return_201_with_the_gathering_id() {
        let body = r#"{"title":"Spring tea gathering","venue":"Kouetsu-an","held_on":"2026-04-29","cost_per_person":1500,"slots":[{"label":"10:00","max_participants":10}]}"#;

        let response = app()
            .oneshot(
                Request::post("/admin/gatherings")
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(json.get("gathering_id").is_some());
        assert_eq!(json.get("version"), Some(&serde_json::json!(1)));
    }

    #[tokio::test]
    async fn it_should_return_422_when_the_title_is_blank() {
        let body = r#"{"title":"  ","venue":"Kouetsu-an","held_on":"2026-04-29","cost_per_person":1500,"slots":[]}"#;

        let response = app()
            .oneshot(
                Request::post("/admin/gatherings")
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn it_should_return_422_on_invalid_json() {
        let response = app()
            .oneshot(
                Request::post("/admin/gatherings")
                    .header("content-type", "application/json")
                    .body(Body::from("not-json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
