// Derived read shapes for the dashboard. Recomputed on each fetch, no
// independent identity.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::modules::issues::core::issue::{Issue, IssueCategory, IssueStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: IssueCategory,
    pub count: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemporalPoint {
    pub date: NaiveDate,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopVotedIssue {
    pub issue_id: String,
    pub title: String,
    pub votes: u32,
    pub category: IssueCategory,
    pub status: IssueStatus,
}

impl From<&Issue> for TopVotedIssue {
    fn from(issue: &Issue) -> Self {
        Self {
            issue_id: issue.issue_id.clone(),
            title: issue.title.clone(),
            votes: issue.votes,
            category: issue.category,
            status: issue.status,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapIssue {
    pub issue_id: String,
    pub title: String,
    pub lat: f64,
    pub lng: f64,
    pub category: IssueCategory,
    pub status: IssueStatus,
    pub votes: u32,
}
