// Catalog reads: the public listing and detail views, and the admin listing
// that also shows hidden gatherings.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::shell::state::AppState;

pub async fn handle_list_public(State(state): State<AppState>) -> impl IntoResponse {
    match state.queries.list_gatherings(true).await {
        Ok(views) => Json(views).into_response(),
        Err(error) => {
            tracing::error!(%error, "gathering listing failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub async fn handle_get_public(
    State(state): State<AppState>,
    Path(gathering_id): Path<String>,
) -> impl IntoResponse {
    match state.queries.get_gathering(&gathering_id).await {
        Ok(Some(view)) if view.is_active => Json(view).into_response(),
        Ok(_) => StatusCode::NOT_FOUND.into_response(),
        Err(error) => {
            tracing::error!(%error, "gathering read failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub async fn handle_list_admin(State(state): State<AppState>) -> impl IntoResponse {
    match state.queries.list_gatherings(false).await {
        Ok(views) => Json(views).into_response(),
        Err(error) => {
            tracing::error!(%error, "gathering listing failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub async fn handle_get_admin(
    State(state): State<AppState>,
    Path(gathering_id): Path<String>,
) -> impl IntoResponse {
    match state.queries.get_gathering(&gathering_id).await {
        Ok(Some(view)) => Json(view).into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(error) => {
            tracing::error!(%error, "gathering read failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[cfg(test)]
mod browse_gatherings_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::{get, post},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::modules::gatherings::use_cases::create_gathering::inbound::http as create_http;
    use crate::test_support::fixtures::http::make_test_state;

    use super::{handle_get_public, handle_list_admin, handle_list_public};

    fn app() -> Router {
        Router::new()
            .route(
                "/admin/gatherings",
                post(create_http::handle).get(handle_list_admin),
            )
            .route("/gatherings", get(handle_list_public))
            .route("/gatherings/{id}", get(handle_get_public))
            .with_state(make_test_state())
    }

    async fn create(app: &Router, title: &str, is_active: bool) -> String {
        let body = format!(
            r#"{{"title":"{title}","venue":"Kouetsu-an","held_on":"2026-04-29","cost_per_person":1500,"is_active":{is_active},"slots":[{{"label":"10:00","max_participants":10}}]}}"#
        );
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
    async fn it_should_hide_inactive_gatherings_from_the_public_listing() {
        let app = app();
        create(&app, "Visible", true).await;
        let hidden_id = create(&app, "Hidden", false).await;

        let response = app
            .clone()
            .oneshot(Request::get("/gatherings").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json.as_array().unwrap().len(), 1);
        assert_eq!(json[0]["title"], "Visible");

        // The detail view hides it too.
        let response = app
            .clone()
            .oneshot(
                Request::get(format!("/gatherings/{hidden_id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        // The admin listing shows everything.
        let response = app
            .oneshot(
                Request::get("/admin/gatherings")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn it_should_return_404_for_an_unknown_gathering() {
        let response = app()
            .oneshot(
                Request::get("/gatherings/gat-unknown")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
