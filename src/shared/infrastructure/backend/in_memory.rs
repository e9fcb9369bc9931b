// In-memory stand-in for the hosted backend.
//
// Responsibilities
// - Serve the same contract as the hosted service for tests and local runs.
// - Recompute every aggregate from the issue collection on each fetch, so the
//   sum invariants hold by construction.
// - Offer an offline toggle and an artificial vote delay for failure-path and
//   in-flight tests.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::{Mutex, RwLock};

use crate::modules::issues::core::aggregate;
use crate::modules::issues::core::issue::{Issue, IssuePatch};
use crate::modules::issues::core::profile::UserProfile;
use crate::modules::issues::core::views::{CategoryCount, MapIssue, TemporalPoint, TopVotedIssue};
use crate::shared::infrastructure::backend::{BackendError, CivicBackend};

#[derive(Default)]
pub struct InMemoryBackend {
    issues: RwLock<Vec<Issue>>,
    // (voter_id, issue_id) pairs that already voted.
    votes: Mutex<HashSet<(String, String)>>,
    profiles: RwLock<HashMap<String, UserProfile>>,
    offline: bool,
    fail_votes: bool,
    delay_vote_ms: Option<u64>,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_issues(issues: Vec<Issue>) -> Self {
        Self {
            issues: RwLock::new(issues),
            ..Self::default()
        }
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    /// Reads keep working; only `cast_vote` fails.
    pub fn set_fail_votes(&mut self) {
        self.fail_votes = true;
    }

    pub fn set_delay_vote_ms(&mut self, millis: u64) {
        self.delay_vote_ms = Some(millis);
    }

    pub async fn insert_profile(&self, user_id: impl Into<String>, profile: UserProfile) {
        self.profiles.write().await.insert(user_id.into(), profile);
    }

    fn ensure_online(&self) -> Result<(), BackendError> {
        if self.offline {
            return Err(BackendError::Unavailable("Backend offline".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl CivicBackend for InMemoryBackend {
    async fn fetch_issues(&self) -> Result<Vec<Issue>, BackendError> {
        self.ensure_online()?;
        Ok(self.issues.read().await.clone())
    }

    async fn fetch_user_issues(&self, user_id: &str) -> Result<Vec<Issue>, BackendError> {
        self.ensure_online()?;
        Ok(self
            .issues
            .read()
            .await
            .iter()
            .filter(|issue| issue.created_by == user_id)
            .cloned()
            .collect())
    }

    async fn fetch_issue(&self, issue_id: &str) -> Result<Issue, BackendError> {
        self.ensure_online()?;
        self.issues
            .read()
            .await
            .iter()
            .find(|issue| issue.issue_id == issue_id)
            .cloned()
            .ok_or_else(|| BackendError::NotFound(issue_id.to_string()))
    }

    async fn fetch_category_distribution(&self) -> Result<Vec<CategoryCount>, BackendError> {
        self.ensure_online()?;
        Ok(aggregate::category_distribution(&self.issues.read().await))
    }

    async fn fetch_temporal_analysis(
        &self,
        window_days: u32,
    ) -> Result<Vec<TemporalPoint>, BackendError> {
        self.ensure_online()?;
        Ok(aggregate::temporal_series(
            &self.issues.read().await,
            window_days,
            Utc::now().date_naive(),
        ))
    }

    async fn fetch_top_voted_issues(
        &self,
        limit: usize,
    ) -> Result<Vec<TopVotedIssue>, BackendError> {
        self.ensure_online()?;
        Ok(aggregate::rank_by_votes(&self.issues.read().await, limit))
    }

    async fn fetch_map_issues(&self) -> Result<Vec<MapIssue>, BackendError> {
        self.ensure_online()?;
        Ok(aggregate::map_points(&self.issues.read().await))
    }

    async fn submit_issue(&self, issue: Issue) -> Result<Issue, BackendError> {
        self.ensure_online()?;
        self.issues.write().await.push(issue.clone());
        Ok(issue)
    }

    async fn update_issue(&self, issue_id: &str, patch: IssuePatch) -> Result<(), BackendError> {
        self.ensure_online()?;
        let mut issues = self.issues.write().await;
        let issue = issues
            .iter_mut()
            .find(|issue| issue.issue_id == issue_id)
            .ok_or_else(|| BackendError::NotFound(issue_id.to_string()))?;
        patch.apply(issue);
        Ok(())
    }

    async fn delete_issue(&self, issue_id: &str) -> Result<(), BackendError> {
        self.ensure_online()?;
        let mut issues = self.issues.write().await;
        let before = issues.len();
        issues.retain(|issue| issue.issue_id != issue_id);
        if issues.len() == before {
            return Err(BackendError::NotFound(issue_id.to_string()));
        }
        Ok(())
    }

    async fn cast_vote(&self, issue_id: &str, voter_id: &str) -> Result<(), BackendError> {
        self.ensure_online()?;
        if voter_id.trim().is_empty() {
            return Err(BackendError::Unauthenticated);
        }
        if self.fail_votes {
            return Err(BackendError::Unavailable("vote endpoint down".into()));
        }
        if let Some(millis) = self.delay_vote_ms {
            tokio::time::sleep(std::time::Duration::from_millis(millis)).await;
        }
        let key = (voter_id.to_string(), issue_id.to_string());
        {
            let mut votes = self.votes.lock().await;
            if votes.contains(&key) {
                return Err(BackendError::AlreadyVoted(issue_id.to_string()));
            }
            let mut issues = self.issues.write().await;
            let issue = issues
                .iter_mut()
                .find(|issue| issue.issue_id == issue_id)
                .ok_or_else(|| BackendError::NotFound(issue_id.to_string()))?;
            issue.votes += 1;
            votes.insert(key);
        }
        Ok(())
    }

    async fn fetch_user_profile(&self, user_id: &str) -> Result<UserProfile, BackendError> {
        self.ensure_online()?;
        self.profiles
            .read()
            .await
            .get(user_id)
            .cloned()
            .ok_or_else(|| BackendError::UnknownProfile(user_id.to_string()))
    }
}
