// Vote command handler: drives the optimistic transition around the backend
// call and produces the user-facing notification for either outcome.

use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::Mutex;

use crate::modules::issues::core::notification::Notification;
use crate::modules::issues::use_cases::cast_vote::transition::{VoteState, VoteStateError};
use crate::shared::infrastructure::backend::{BackendError, CivicBackend};

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error("vote rejected: {0}")]
    Rejected(#[from] VoteStateError),

    #[error("unexpected: {0}")]
    Unexpected(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteOutcome {
    pub votes: u32,
    pub milestone: bool,
    pub notification: Notification,
}

pub fn vote_failed_notification() -> Notification {
    Notification::new("Could not record vote", "Please try again later")
}

/// One vote control per (voter, issue) pair, mirroring what a card on screen
/// holds locally.
pub struct CastVoteHandler<TBackend>
where
    TBackend: CivicBackend + 'static,
{
    backend: Arc<TBackend>,
    controls: Mutex<HashMap<(String, String), VoteState>>,
}

impl<TBackend> CastVoteHandler<TBackend>
where
    TBackend: CivicBackend + 'static,
{
    pub fn new(backend: Arc<TBackend>) -> Self {
        Self {
            backend,
            controls: Mutex::new(HashMap::new()),
        }
    }

    /// The count a control currently displays, optimistic increment included.
    pub async fn displayed_votes(&self, issue_id: &str, voter_id: &str) -> Option<u32> {
        let controls = self.controls.lock().await;
        controls
            .get(&(voter_id.to_string(), issue_id.to_string()))
            .map(VoteState::votes)
    }

    pub async fn handle(
        &self,
        issue_id: &str,
        voter_id: &str,
    ) -> Result<VoteOutcome, ApplicationError> {
        let key = (voter_id.to_string(), issue_id.to_string());

        // Seed the control from the backend count on first touch.
        if !self.controls.lock().await.contains_key(&key) {
            let issue = self.backend.fetch_issue(issue_id).await?;
            self.controls
                .lock()
                .await
                .entry(key.clone())
                .or_insert_with(|| VoteState::new(issue.votes, false));
        }

        // Phase one: optimistic increment, released before the network call so
        // the pending count stays observable.
        {
            let mut controls = self.controls.lock().await;
            let state = controls
                .get_mut(&key)
                .ok_or_else(|| ApplicationError::Unexpected("vote control vanished".into()))?;
            state.begin()?;
        }

        let call = self.backend.cast_vote(issue_id, voter_id).await;

        // Phase two: settle.
        let mut controls = self.controls.lock().await;
        let state = controls
            .get_mut(&key)
            .ok_or_else(|| ApplicationError::Unexpected("vote control vanished".into()))?;
        match call {
            Ok(()) => {
                state.commit();
                Ok(VoteOutcome {
                    votes: state.votes(),
                    milestone: state.is_milestone(),
                    notification: Notification::new(
                        "Vote recorded",
                        "Thanks for supporting this issue!",
                    ),
                })
            }
            Err(error) => {
                state.roll_back();
                tracing::warn!(issue_id, %error, "vote rolled back");
                Err(ApplicationError::Backend(error))
            }
        }
    }
}

#[cfg(test)]
mod cast_vote_handler_tests {
    use super::*;
    use crate::shared::infrastructure::backend::in_memory::InMemoryBackend;
    use crate::tests::fixtures::issues::IssueBuilder;
    use rstest::{fixture, rstest};
    use tokio::join;

    #[fixture]
    fn backend() -> InMemoryBackend {
        InMemoryBackend::with_issues(vec![IssueBuilder::new("issue-0001").votes(9).build()])
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_commit_the_optimistic_increment_on_success(backend: InMemoryBackend) {
        let handler = CastVoteHandler::new(Arc::new(backend));
        let outcome = handler.handle("issue-0001", "user-0001").await.unwrap();
        assert_eq!(outcome.votes, 10);
        assert!(outcome.milestone);
        assert_eq!(outcome.notification.title, "Vote recorded");
        assert_eq!(
            handler.displayed_votes("issue-0001", "user-0001").await,
            Some(10)
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_roll_back_when_the_backend_fails(mut backend: InMemoryBackend) {
        backend.toggle_offline();
        let handler = CastVoteHandler::new(Arc::new(backend));
        let result = handler.handle("issue-0001", "user-0001").await;
        assert!(matches!(
            result,
            Err(ApplicationError::Backend(BackendError::Unavailable(_)))
        ));
        // Offline on first touch means the control was never seeded.
        assert_eq!(handler.displayed_votes("issue-0001", "user-0001").await, None);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_revert_the_optimistic_increment_when_the_backend_drops_the_vote(
        mut backend: InMemoryBackend,
    ) {
        backend.set_fail_votes();
        let handler = CastVoteHandler::new(Arc::new(backend));
        let result = handler.handle("issue-0001", "user-0001").await;
        assert!(matches!(
            result,
            Err(ApplicationError::Backend(BackendError::Unavailable(_)))
        ));
        assert_eq!(
            handler.displayed_votes("issue-0001", "user-0001").await,
            Some(9),
            "the optimistic 10 must revert to the seeded 9"
        );
        assert_eq!(vote_failed_notification().title, "Could not record vote");
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_revert_the_displayed_count_on_a_rejected_vote(backend: InMemoryBackend) {
        let backend = Arc::new(backend);
        backend.cast_vote("issue-0001", "user-0001").await.unwrap();

        // Handler seeded after the out-of-band vote; backend now rejects the
        // duplicate and the optimistic increment must revert.
        let handler = CastVoteHandler::new(backend);
        let result = handler.handle("issue-0001", "user-0001").await;
        assert!(matches!(
            result,
            Err(ApplicationError::Backend(BackendError::AlreadyVoted(_)))
        ));
        assert_eq!(
            handler.displayed_votes("issue-0001", "user-0001").await,
            Some(10),
            "count reverts to what the control was seeded with"
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_refuse_a_second_click_while_one_is_in_flight(mut backend: InMemoryBackend) {
        backend.set_delay_vote_ms(20);
        let handler = CastVoteHandler::new(Arc::new(backend));
        let (first, second) = join!(
            handler.handle("issue-0001", "user-0001"),
            handler.handle("issue-0001", "user-0001")
        );
        let accepted = [&first, &second].iter().filter(|r| r.is_ok()).count();
        assert_eq!(accepted, 1, "exactly one click may reach the backend");
        let rejected = first.err().or(second.err()).unwrap();
        assert!(matches!(
            rejected,
            ApplicationError::Rejected(VoteStateError::InFlight)
        ));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_refuse_after_a_committed_vote(backend: InMemoryBackend) {
        let handler = CastVoteHandler::new(Arc::new(backend));
        handler.handle("issue-0001", "user-0001").await.unwrap();
        let result = handler.handle("issue-0001", "user-0001").await;
        assert!(matches!(
            result,
            Err(ApplicationError::Rejected(VoteStateError::AlreadyVoted))
        ));
    }
}
