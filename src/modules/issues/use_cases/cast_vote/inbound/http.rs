use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::modules::issues::core::notification::Notification;
use crate::modules::issues::use_cases::cast_vote::handler::{
    ApplicationError, vote_failed_notification,
};
use crate::shared::infrastructure::backend::BackendError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct CastVoteBody {
    pub voter_id: String,
}

#[derive(Serialize)]
pub struct CastVoteResponse {
    pub votes: u32,
    pub milestone: bool,
    pub notification: Notification,
}

#[derive(Serialize)]
pub struct CastVoteErrorResponse {
    pub notification: Notification,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(issue_id): Path<String>,
    body: Result<Json<CastVoteBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state.vote_handler.handle(&issue_id, &body.voter_id).await {
        Ok(outcome) => Json(CastVoteResponse {
            votes: outcome.votes,
            milestone: outcome.milestone,
            notification: outcome.notification,
        })
        .into_response(),
        Err(error) => {
            let status = match &error {
                ApplicationError::Rejected(_) => StatusCode::CONFLICT,
                ApplicationError::Backend(BackendError::AlreadyVoted(_)) => StatusCode::CONFLICT,
                ApplicationError::Backend(BackendError::Unauthenticated) => {
                    StatusCode::UNAUTHORIZED
                }
                ApplicationError::Backend(BackendError::NotFound(_)) => StatusCode::NOT_FOUND,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            };
            (
                status,
                Json(CastVoteErrorResponse {
                    notification: vote_failed_notification(),
                }),
            )
                .into_response()
        }
    }
}
