use crate::modules::issues::core::issue::IssuePatch;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditIssue {
    pub issue_id: String,
    pub requested_by: String,
    pub patch: IssuePatch,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteIssue {
    pub issue_id: String,
    pub requested_by: String,
}
