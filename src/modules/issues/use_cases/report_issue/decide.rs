// Pure decision function for issue submission.
//
// Responsibilities
// - Validate the command and produce the issue record on success.
// - New issues always start pending with zero votes.

use crate::modules::issues::core::issue::{Issue, IssueStatus};
use crate::modules::issues::use_cases::report_issue::command::ReportIssue;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("title must not be empty")]
    EmptyTitle,

    #[error("description must not be empty")]
    EmptyDescription,

    #[error("coordinates must be a finite lat/lng pair")]
    InvalidCoordinates,
}

pub fn decide_report(command: ReportIssue) -> Result<Issue, DecideError> {
    if command.title.trim().is_empty() {
        return Err(DecideError::EmptyTitle);
    }
    if command.description.trim().is_empty() {
        return Err(DecideError::EmptyDescription);
    }
    match (command.lat, command.lng) {
        (None, None) => {}
        (Some(lat), Some(lng))
            if lat.is_finite() && lng.is_finite() && (-90.0..=90.0).contains(&lat)
                && (-180.0..=180.0).contains(&lng) => {}
        _ => return Err(DecideError::InvalidCoordinates),
    }
    Ok(Issue {
        issue_id: command.issue_id,
        title: command.title,
        description: command.description,
        category: command.category,
        status: IssueStatus::Pending,
        lat: command.lat,
        lng: command.lng,
        location: command.location,
        votes: 0,
        created_by: command.created_by,
        created_at: command.created_at,
        image_url: command.image_url,
    })
}
