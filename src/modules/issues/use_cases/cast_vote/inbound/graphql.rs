use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};

use crate::modules::issues::use_cases::cast_vote::handler::{
    ApplicationError, vote_failed_notification,
};
use crate::modules::issues::use_cases::view_dashboard::inbound::graphql::GqlNotification;
use crate::shell::state::AppState;

#[derive(SimpleObject)]
pub struct GqlVoteResult {
    pub accepted: bool,
    pub votes: Option<u32>,
    pub milestone: bool,
    pub notification: GqlNotification,
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Vote rejections come back as a regular payload with `accepted: false`
    /// so the client can toast them without inspecting GraphQL errors.
    async fn cast_vote(
        &self,
        context: &Context<'_>,
        issue_id: String,
        voter_id: String,
    ) -> GqlResult<GqlVoteResult> {
        let state = context.data_unchecked::<AppState>();
        match state.vote_handler.handle(&issue_id, &voter_id).await {
            Ok(outcome) => Ok(GqlVoteResult {
                accepted: true,
                votes: Some(outcome.votes),
                milestone: outcome.milestone,
                notification: outcome.notification.into(),
            }),
            Err(error) => {
                if let ApplicationError::Unexpected(detail) = &error {
                    tracing::error!(issue_id, detail, "vote mutation failed");
                }
                Ok(GqlVoteResult {
                    accepted: false,
                    votes: None,
                    milestone: false,
                    notification: vote_failed_notification().into(),
                })
            }
        }
    }
}
