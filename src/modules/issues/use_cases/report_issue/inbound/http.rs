use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::issues::core::issue::IssueCategory;
use crate::modules::issues::use_cases::report_issue::command::ReportIssue;
use crate::modules::issues::use_cases::report_issue::handler::ApplicationError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ReportIssueBody {
    pub title: String,
    pub description: String,
    pub category: IssueCategory,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub location: String,
    pub image_url: Option<String>,
    pub reported_by: String,
}

#[derive(Serialize)]
pub struct ReportIssueResponse {
    pub issue_id: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<ReportIssueBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let issue_id = Uuid::now_v7();

    let command = ReportIssue {
        issue_id: issue_id.to_string(),
        title: body.title,
        description: body.description,
        category: body.category,
        lat: body.lat,
        lng: body.lng,
        location: body.location,
        image_url: body.image_url,
        created_by: body.reported_by,
        created_at: Utc::now().timestamp_millis(),
    };

    match state.report_handler.handle(command).await {
        Ok(issue) => (
            StatusCode::CREATED,
            Json(ReportIssueResponse {
                issue_id: issue.issue_id,
            }),
        )
            .into_response(),
        Err(ApplicationError::Domain(_)) => StatusCode::CONFLICT.into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
