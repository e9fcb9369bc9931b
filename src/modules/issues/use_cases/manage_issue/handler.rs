use std::sync::Arc;

use thiserror::Error;

use crate::modules::issues::use_cases::manage_issue::command::{DeleteIssue, EditIssue};
use crate::modules::issues::use_cases::manage_issue::decide::{
    DecideError, decide_delete, decide_edit,
};
use crate::shared::infrastructure::backend::{BackendError, CivicBackend};

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error("change rejected: {0}")]
    Domain(#[from] DecideError),
}

pub struct ManageIssueHandler<TBackend>
where
    TBackend: CivicBackend + 'static,
{
    backend: Arc<TBackend>,
}

impl<TBackend> ManageIssueHandler<TBackend>
where
    TBackend: CivicBackend + 'static,
{
    pub fn new(backend: Arc<TBackend>) -> Self {
        Self { backend }
    }

    pub async fn edit(&self, command: EditIssue) -> Result<(), ApplicationError> {
        let issue = self.backend.fetch_issue(&command.issue_id).await?;
        decide_edit(&issue, &command)?;
        self.backend
            .update_issue(&command.issue_id, command.patch)
            .await?;
        Ok(())
    }

    pub async fn delete(&self, command: DeleteIssue) -> Result<(), ApplicationError> {
        let issue = self.backend.fetch_issue(&command.issue_id).await?;
        decide_delete(&issue, &command)?;
        self.backend.delete_issue(&command.issue_id).await?;
        tracing::info!(issue_id = %command.issue_id, "issue deleted by owner");
        Ok(())
    }
}

#[cfg(test)]
mod manage_issue_handler_tests {
    use super::*;
    use crate::modules::issues::core::issue::{IssuePatch, IssueStatus};
    use crate::shared::infrastructure::backend::in_memory::InMemoryBackend;
    use crate::tests::fixtures::issues::IssueBuilder;
    use rstest::{fixture, rstest};

    #[fixture]
    fn backend() -> Arc<InMemoryBackend> {
        Arc::new(InMemoryBackend::with_issues(vec![
            IssueBuilder::new("issue-0001")
                .created_by("user-0001")
                .build(),
            IssueBuilder::new("issue-0002")
                .created_by("user-0001")
                .status(IssueStatus::InProgress)
                .build(),
        ]))
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_apply_an_owner_edit_to_a_pending_issue(backend: Arc<InMemoryBackend>) {
        let handler = ManageIssueHandler::new(backend.clone());
        handler
            .edit(EditIssue {
                issue_id: "issue-0001".into(),
                requested_by: "user-0001".into(),
                patch: IssuePatch {
                    title: Some("Large pothole".into()),
                    ..IssuePatch::default()
                },
            })
            .await
            .unwrap();
        let issue = backend.fetch_issue("issue-0001").await.unwrap();
        assert_eq!(issue.title, "Large pothole");
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_reject_an_edit_once_in_progress(backend: Arc<InMemoryBackend>) {
        let handler = ManageIssueHandler::new(backend);
        let result = handler
            .edit(EditIssue {
                issue_id: "issue-0002".into(),
                requested_by: "user-0001".into(),
                patch: IssuePatch {
                    title: Some("Too late".into()),
                    ..IssuePatch::default()
                },
            })
            .await;
        assert!(matches!(
            result,
            Err(ApplicationError::Domain(DecideError::NotPending))
        ));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_delete_for_the_owner_and_refuse_strangers(backend: Arc<InMemoryBackend>) {
        let handler = ManageIssueHandler::new(backend.clone());
        let stranger = handler
            .delete(DeleteIssue {
                issue_id: "issue-0001".into(),
                requested_by: "user-0002".into(),
            })
            .await;
        assert!(matches!(
            stranger,
            Err(ApplicationError::Domain(DecideError::NotOwner))
        ));

        handler
            .delete(DeleteIssue {
                issue_id: "issue-0001".into(),
                requested_by: "user-0001".into(),
            })
            .await
            .unwrap();
        assert!(backend.fetch_issue("issue-0001").await.is_err());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_surface_a_missing_issue(backend: Arc<InMemoryBackend>) {
        let handler = ManageIssueHandler::new(backend);
        let result = handler
            .delete(DeleteIssue {
                issue_id: "issue-9999".into(),
                requested_by: "user-0001".into(),
            })
            .await;
        assert!(matches!(
            result,
            Err(ApplicationError::Backend(BackendError::NotFound(_)))
        ));
    }
}
