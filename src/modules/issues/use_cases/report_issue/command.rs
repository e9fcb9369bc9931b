// Intent to submit a new civic issue. Transport-free; the inbound adapter
// fills in the generated id, the timestamp, and the authenticated reporter.

use crate::modules::issues::core::issue::IssueCategory;

#[derive(Debug, Clone, PartialEq)]
pub struct ReportIssue {
    pub issue_id: String,
    pub title: String,
    pub description: String,
    pub category: IssueCategory,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub location: String,
    pub image_url: Option<String>,
    pub created_by: String,
    pub created_at: i64,
}
