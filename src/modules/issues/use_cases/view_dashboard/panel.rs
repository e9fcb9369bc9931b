use serde::Serialize;

/// Per-chart fetch state. Each panel settles independently so one slow or
/// failing fetch never blocks the siblings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "data", rename_all = "snake_case")]
pub enum Panel<T> {
    Loading,
    Ready(T),
    Failed,
}

impl<T> Panel<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Panel::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Panel::Failed)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Panel::Ready(data) => Some(data),
            _ => None,
        }
    }
}
