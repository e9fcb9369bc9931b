use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::issues::core::issue::{IssueCategory, IssueStatus};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct BrowseParams {
    pub category: Option<IssueCategory>,
    pub status: Option<IssueStatus>,
}

pub async fn handle_browse(
    State(state): State<AppState>,
    Query(params): Query<BrowseParams>,
) -> impl IntoResponse {
    match state
        .list_handler
        .browse(params.category, params.status)
        .await
    {
        Ok(issues) => Json(issues).into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

#[derive(Deserialize)]
pub struct MineParams {
    pub user_id: String,
}

pub async fn handle_mine(
    State(state): State<AppState>,
    Query(params): Query<MineParams>,
) -> impl IntoResponse {
    match state.list_handler.mine(&params.user_id).await {
        Ok(issues) => Json(issues).into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
