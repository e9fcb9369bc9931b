// Outbound port for the hosted backend (auth, persistence, file storage).
//
// Purpose
// - The backend is an external collaborator; this crate consumes its contract
//   and never implements storage or authentication itself.
//
// Testing guidance
// - Use the in-memory implementation for tests and local development.

use async_trait::async_trait;
use thiserror::Error;

use crate::modules::issues::core::issue::{Issue, IssueCategory, IssuePatch};
use crate::modules::issues::core::profile::UserProfile;
use crate::modules::issues::core::views::{CategoryCount, MapIssue, TemporalPoint, TopVotedIssue};

pub mod in_memory;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BackendError {
    #[error("backend unavailable: {0}")]
    Unavailable(String),

    #[error("issue not found: {0}")]
    NotFound(String),

    #[error("vote already cast for issue {0}")]
    AlreadyVoted(String),

    #[error("not authenticated")]
    Unauthenticated,

    #[error("profile not found: {0}")]
    UnknownProfile(String),
}

#[async_trait]
pub trait CivicBackend: Send + Sync {
    async fn fetch_issues(&self) -> Result<Vec<Issue>, BackendError>;
    async fn fetch_user_issues(&self, user_id: &str) -> Result<Vec<Issue>, BackendError>;
    async fn fetch_issue(&self, issue_id: &str) -> Result<Issue, BackendError>;

    async fn fetch_category_distribution(&self) -> Result<Vec<CategoryCount>, BackendError>;
    async fn fetch_temporal_analysis(
        &self,
        window_days: u32,
    ) -> Result<Vec<TemporalPoint>, BackendError>;
    async fn fetch_top_voted_issues(&self, limit: usize)
    -> Result<Vec<TopVotedIssue>, BackendError>;
    async fn fetch_map_issues(&self) -> Result<Vec<MapIssue>, BackendError>;

    async fn submit_issue(&self, issue: Issue) -> Result<Issue, BackendError>;
    async fn update_issue(&self, issue_id: &str, patch: IssuePatch) -> Result<(), BackendError>;
    async fn delete_issue(&self, issue_id: &str) -> Result<(), BackendError>;

    /// At-most-once per voter is enforced here, on the backend side.
    async fn cast_vote(&self, issue_id: &str, voter_id: &str) -> Result<(), BackendError>;

    async fn fetch_user_profile(&self, user_id: &str) -> Result<UserProfile, BackendError>;
}

/// Convenience for narrowing a list to one category on the client side.
pub fn filter_by_category(issues: Vec<Issue>, category: Option<IssueCategory>) -> Vec<Issue> {
    match category {
        Some(category) => issues
            .into_iter()
            .filter(|issue| issue.category == category)
            .collect(),
        None => issues,
    }
}
