// Pure decision functions for issue lifecycle rules.
//
// Rules
// - Only the reporter may edit or delete their issue.
// - Edits are allowed only while the issue is still pending.

use crate::modules::issues::core::issue::{Issue, IssueStatus};
use crate::modules::issues::use_cases::manage_issue::command::{DeleteIssue, EditIssue};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("only the reporter may modify this issue")]
    NotOwner,

    #[error("issue can only be edited while pending")]
    NotPending,

    #[error("nothing to change")]
    EmptyPatch,

    #[error("title must not be empty")]
    EmptyTitle,
}

pub fn decide_edit(issue: &Issue, command: &EditIssue) -> Result<(), DecideError> {
    if issue.created_by != command.requested_by {
        return Err(DecideError::NotOwner);
    }
    if issue.status != IssueStatus::Pending {
        return Err(DecideError::NotPending);
    }
    if command.patch.is_empty() {
        return Err(DecideError::EmptyPatch);
    }
    if let Some(title) = &command.patch.title {
        if title.trim().is_empty() {
            return Err(DecideError::EmptyTitle);
        }
    }
    Ok(())
}

pub fn decide_delete(issue: &Issue, command: &DeleteIssue) -> Result<(), DecideError> {
    if issue.created_by != command.requested_by {
        return Err(DecideError::NotOwner);
    }
    Ok(())
}
