use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::issues::core::issue::{IssueCategory, IssuePatch};
use crate::modules::issues::use_cases::manage_issue::command::{DeleteIssue, EditIssue};
use crate::modules::issues::use_cases::manage_issue::handler::ApplicationError;
use crate::shared::infrastructure::backend::BackendError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct EditIssueBody {
    pub requested_by: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<IssueCategory>,
    pub location: Option<String>,
}

pub async fn handle_edit(
    State(state): State<AppState>,
    Path(issue_id): Path<String>,
    body: Result<Json<EditIssueBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = EditIssue {
        issue_id,
        requested_by: body.requested_by,
        patch: IssuePatch {
            title: body.title,
            description: body.description,
            category: body.category,
            location: body.location,
        },
    };

    match state.manage_handler.edit(command).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => status_for(error).into_response(),
    }
}

#[derive(Deserialize)]
pub struct DeleteIssueBody {
    pub requested_by: String,
}

pub async fn handle_delete(
    State(state): State<AppState>,
    Path(issue_id): Path<String>,
    body: Result<Json<DeleteIssueBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = DeleteIssue {
        issue_id,
        requested_by: body.requested_by,
    };

    match state.manage_handler.delete(command).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => status_for(error).into_response(),
    }
}

fn status_for(error: ApplicationError) -> StatusCode {
    match error {
        ApplicationError::Domain(_) => StatusCode::CONFLICT,
        ApplicationError::Backend(BackendError::NotFound(_)) => StatusCode::NOT_FOUND,
        ApplicationError::Backend(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
