// Browse queries over the backend's issue collection. Filtering and ordering
// happen client-side on the already-fetched records.

use std::sync::Arc;

use crate::modules::issues::core::issue::{Issue, IssueCategory, IssueStatus};
use crate::shared::infrastructure::backend::{BackendError, CivicBackend, filter_by_category};

pub struct ListIssuesHandler<TBackend>
where
    TBackend: CivicBackend + 'static,
{
    backend: Arc<TBackend>,
}

impl<TBackend> ListIssuesHandler<TBackend>
where
    TBackend: CivicBackend + 'static,
{
    pub fn new(backend: Arc<TBackend>) -> Self {
        Self { backend }
    }

    /// All issues, newest first, optionally narrowed by category / status.
    pub async fn browse(
        &self,
        category: Option<IssueCategory>,
        status: Option<IssueStatus>,
    ) -> Result<Vec<Issue>, BackendError> {
        let issues = self.backend.fetch_issues().await?;
        let mut issues = filter_by_category(issues, category);
        if let Some(status) = status {
            issues.retain(|issue| issue.status == status);
        }
        issues.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(issues)
    }

    /// The caller's own reports, newest first.
    pub async fn mine(&self, user_id: &str) -> Result<Vec<Issue>, BackendError> {
        let mut issues = self.backend.fetch_user_issues(user_id).await?;
        issues.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(issues)
    }
}
