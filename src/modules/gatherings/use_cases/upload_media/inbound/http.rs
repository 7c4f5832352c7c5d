// Gathering image upload. The URL comes back to the admin form, which stores
// it verbatim on the gathering via the usual edit flow.

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;

use crate::shared::infrastructure::media_store::MediaStoreError;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct UploadMediaResponse {
    pub url: String,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(filename): Path<String>,
    bytes: Bytes,
) -> impl IntoResponse {
    match state.media.put(&filename, &bytes).await {
        Ok(url) => (StatusCode::CREATED, Json(UploadMediaResponse { url })).into_response(),
        Err(error @ MediaStoreError::InvalidName(_)) => {
            (StatusCode::UNPROCESSABLE_ENTITY, error.to_string()).into_response()
        }
        Err(error) => {
            tracing::error!(%error, "media upload failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[cfg(test)]
mod upload_media_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::put,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::test_support::fixtures::http::make_test_state;

    use super::handle;

    fn app() -> Router {
        Router::new()
            .route("/admin/media/{filename}", put(handle))
            .with_state(make_test_state())
    }

    #[tokio::test]
    async fn it_should_return_201_with_the_stored_url() {
        let response = app()
            .oneshot(
                Request::put("/admin/media/teahouse.png")
                    .body(Body::from(&b"\x89PNG"[..]))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            json["url"],
            "http://localhost:8080/media/teahouse.png"
        );
    }
}
