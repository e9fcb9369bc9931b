use axum::{
    Router,
    routing::{get, patch, post},
};

use crate::modules::issues::use_cases::cast_vote::inbound::http as vote_http;
use crate::modules::issues::use_cases::list_issues::inbound::http as list_http;
use crate::modules::issues::use_cases::manage_issue::inbound::http as manage_http;
use crate::modules::issues::use_cases::report_issue::inbound::http as report_http;
use crate::modules::issues::use_cases::view_dashboard::inbound::http as dashboard_http;
use crate::modules::issues::use_cases::view_profile::inbound::http as profile_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/issues", post(report_http::handle).get(list_http::handle_browse))
        .route("/my-issues", get(list_http::handle_mine))
        .route(
            "/issues/{issue_id}",
            patch(manage_http::handle_edit).delete(manage_http::handle_delete),
        )
        .route("/issues/{issue_id}/vote", post(vote_http::handle))
        .route("/dashboard", get(dashboard_http::handle))
        .route("/profile/{user_id}", get(profile_http::handle))
        .with_state(state)
}
