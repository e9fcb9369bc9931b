use std::sync::Arc;

use thiserror::Error;

use crate::modules::issues::core::issue::Issue;
use crate::modules::issues::use_cases::report_issue::command::ReportIssue;
use crate::modules::issues::use_cases::report_issue::decide::{DecideError, decide_report};
use crate::shared::infrastructure::backend::{BackendError, CivicBackend};

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error("report rejected: {0}")]
    Domain(#[from] DecideError),
}

pub struct ReportIssueHandler<TBackend>
where
    TBackend: CivicBackend + 'static,
{
    backend: Arc<TBackend>,
}

impl<TBackend> ReportIssueHandler<TBackend>
where
    TBackend: CivicBackend + 'static,
{
    pub fn new(backend: Arc<TBackend>) -> Self {
        Self { backend }
    }

    pub async fn handle(&self, command: ReportIssue) -> Result<Issue, ApplicationError> {
        let issue = decide_report(command)?;
        let stored = self.backend.submit_issue(issue).await?;
        tracing::info!(issue_id = %stored.issue_id, "issue reported");
        Ok(stored)
    }
}
