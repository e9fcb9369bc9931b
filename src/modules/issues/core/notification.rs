use serde::{Deserialize, Serialize};

/// Transient, non-fatal user-facing message. Failures degrade a single visual
/// element; nothing in this crate escalates one into a process error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub detail: String,
}

impl Notification {
    pub fn new(title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            detail: detail.into(),
        }
    }
}
