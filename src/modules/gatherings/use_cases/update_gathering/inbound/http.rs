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
use crate::modules::gatherings::use_cases::update_gathering::command::UpdateGathering;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct UpdateGatheringBody {
    pub title: String,
    pub venue: String,
    pub held_on: String,
    pub cost_per_person: i64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub is_active: bool,
    /// The stream version the admin screen last saw.
    pub expected_version: i64,
}

#[derive(Serialize)]
pub struct UpdateGatheringResponse {
    pub version: i64,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(gathering_id): Path<String>,
    body: Result<Json<UpdateGatheringBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = UpdateGathering {
        gathering_id: gathering_id.clone(),
        title: body.title,
        venue: body.venue,
        held_on: body.held_on,
        cost_per_person: body.cost_per_person,
        description: body.description,
        image_url: body.image_url,
        is_active: body.is_active,
        occurred_at: Utc::now().timestamp_millis(),
    };

    match state
        .handler
        .execute(
            &gathering_id,
            Some(body.expected_version),
            GatheringCommand::Update(command),
        )
        .await
    {
        Ok(version) => Json(UpdateGatheringResponse { version }).into_response(),
        Err(error) => error_response(error),
    }
}

#[cfg(test)]
mod update_gathering_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::{post, put},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::modules::gatherings::use_cases::create_gathering::inbound::http as create_http;
    use crate::test_support::fixtures::http::make_test_state;

    use super::handle;

    fn app() -> Router {
        Router::new()
            .route("/admin/gatherings", post(create_http::handle))
            .route("/admin/gatherings/{id}", put(handle))
            .with_state(make_test_state())
    }

    async fn create_gathering(app: &Router) -> String {
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
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        json["gathering_id"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn it_should_return_409_on_a_stale_version() {
        let app = app();
        let gathering_id = create_gathering(&app).await;
        let body = r#"{"title":"Edited","venue":"Kouetsu-an","held_on":"2026-04-29","cost_per_person":1500,"is_active":true,"expected_version":7}"#;

        let response = app
            .oneshot(
                Request::put(format!("/admin/gatherings/{gathering_id}"))
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn it_should_return_200_with_the_new_version() {
        let app = app();
        let gathering_id = create_gathering(&app).await;
        let body = r#"{"title":"Edited","venue":"Kouetsu-an","held_on":"2026-04-29","cost_per_person":1500,"is_active":false,"expected_version":1}"#;

        let response = app
            .oneshot(
                Request::put(format!("/admin/gatherings/{gathering_id}"))
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["version"], serde_json::json!(2));
    }
}
