use crate::modules::issues::core::issue::{Issue, IssueCategory, IssueStatus};

/// Builder for test issues. Defaults give a pending, unvoted road issue so a
/// test only states what it cares about.
pub struct IssueBuilder {
    issue: Issue,
}

impl IssueBuilder {
    pub fn new(issue_id: &str) -> Self {
        Self {
            issue: Issue {
                issue_id: issue_id.to_string(),
                title: "Pothole on Main Street".to_string(),
                description: "Deep pothole near the crossing".to_string(),
                category: IssueCategory::Road,
                status: IssueStatus::Pending,
                lat: None,
                lng: None,
                location: "Main Street".to_string(),
                votes: 0,
                created_by: "user-0000".to_string(),
                created_at: 1_700_000_000_000,
                image_url: None,
            },
        }
    }

    pub fn category(mut self, category: IssueCategory) -> Self {
        self.issue.category = category;
        self
    }

    pub fn status(mut self, status: IssueStatus) -> Self {
        self.issue.status = status;
        self
    }

    pub fn votes(mut self, votes: u32) -> Self {
        self.issue.votes = votes;
        self
    }

    pub fn coordinates(mut self, lat: f64, lng: f64) -> Self {
        self.issue.lat = Some(lat);
        self.issue.lng = Some(lng);
        self
    }

    pub fn created_by(mut self, user_id: &str) -> Self {
        self.issue.created_by = user_id.to_string();
        self
    }

    pub fn created_at(mut self, millis: i64) -> Self {
        self.issue.created_at = millis;
        self
    }

    pub fn build(self) -> Issue {
        self.issue
    }
}
