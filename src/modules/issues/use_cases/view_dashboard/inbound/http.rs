use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::issues::use_cases::view_dashboard::handler::{
    DEFAULT_TOP_LIMIT, DEFAULT_WINDOW_DAYS,
};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct DashboardParams {
    pub window_days: Option<u32>,
    pub limit: Option<usize>,
}

/// The snapshot itself is always 200: per-panel failures are part of the
/// payload, not an HTTP error.
pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<DashboardParams>,
) -> impl IntoResponse {
    let snapshot = state
        .dashboard_handler
        .load(
            params.window_days.unwrap_or(DEFAULT_WINDOW_DAYS),
            params.limit.unwrap_or(DEFAULT_TOP_LIMIT),
        )
        .await;
    Json(snapshot).into_response()
}

#[cfg(test)]
mod view_dashboard_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::shared::infrastructure::backend::in_memory::InMemoryBackend;
    use crate::shell::state::AppState;
    use crate::tests::fixtures::issues::IssueBuilder;

    use super::handle;

    fn app(state: AppState) -> Router {
        Router::new().route("/dashboard", get(handle)).with_state(state)
    }

    #[tokio::test]
    async fn it_should_return_200_with_ready_panels() {
        let state = AppState::new(InMemoryBackend::with_issues(vec![
            IssueBuilder::new("issue-0001").votes(3).build(),
        ]));
        let response = app(state)
            .oneshot(Request::get("/dashboard").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["categories"]["state"], "ready");
        assert_eq!(json["temporal"]["data"].as_array().map(Vec::len), Some(7));
        assert_eq!(json["notifications"].as_array().map(Vec::len), Some(0));
    }

    #[tokio::test]
    async fn it_should_return_200_with_failed_panels_when_the_backend_is_down() {
        let mut backend = InMemoryBackend::new();
        backend.toggle_offline();
        let response = app(AppState::new(backend))
            .oneshot(Request::get("/dashboard").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["categories"]["state"], "failed");
        assert_eq!(json["notifications"].as_array().map(Vec::len), Some(4));
    }
}
