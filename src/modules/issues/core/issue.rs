// Canonical issue record and its closed enumerations.
//
// Boundaries
// - Framework-free. Styling lookups (color, icon) are exhaustive matches so a
//   new category or status is a compile-time event everywhere it is rendered.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueCategory {
    Road,
    Water,
    Sanitation,
    Electricity,
    Other,
}

impl IssueCategory {
    pub const ALL: [IssueCategory; 5] = [
        IssueCategory::Road,
        IssueCategory::Water,
        IssueCategory::Sanitation,
        IssueCategory::Electricity,
        IssueCategory::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            IssueCategory::Road => "Road",
            IssueCategory::Water => "Water",
            IssueCategory::Sanitation => "Sanitation",
            IssueCategory::Electricity => "Electricity",
            IssueCategory::Other => "Other",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            IssueCategory::Road => "#F59E0B",
            IssueCategory::Water => "#2563EB",
            IssueCategory::Sanitation => "#22C55E",
            IssueCategory::Electricity => "#38BDF8",
            IssueCategory::Other => "#6B7280",
        }
    }

    pub fn hover_color(&self) -> &'static str {
        match self {
            IssueCategory::Road => "#FBBF24",
            IssueCategory::Water => "#60A5FA",
            IssueCategory::Sanitation => "#4ADE80",
            IssueCategory::Electricity => "#7DD3FC",
            IssueCategory::Other => "#9CA3AF",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            IssueCategory::Road => "map-pin",
            IssueCategory::Water => "droplet",
            IssueCategory::Sanitation => "trash-2",
            IssueCategory::Electricity => "zap",
            IssueCategory::Other => "help-circle",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssueStatus {
    Pending,
    InProgress,
    Resolved,
}

impl IssueStatus {
    pub fn label(&self) -> &'static str {
        match self {
            IssueStatus::Pending => "Pending",
            IssueStatus::InProgress => "In Progress",
            IssueStatus::Resolved => "Resolved",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            IssueStatus::Pending => "#EAB308",
            IssueStatus::InProgress => "#3B82F6",
            IssueStatus::Resolved => "#22C55E",
        }
    }
}

// Timestamps are epoch milliseconds throughout the crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub issue_id: String,
    pub title: String,
    pub description: String,
    pub category: IssueCategory,
    pub status: IssueStatus,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub location: String,
    pub votes: u32,
    pub created_by: String,
    pub created_at: i64,
    pub image_url: Option<String>,
}

impl Issue {
    pub fn has_coordinates(&self) -> bool {
        matches!(
            (self.lat, self.lng),
            (Some(lat), Some(lng)) if lat.is_finite() && lng.is_finite()
        )
    }
}

/// Pending-only edit payload. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<IssueCategory>,
    pub location: Option<String>,
}

impl IssuePatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.location.is_none()
    }

    pub fn apply(&self, issue: &mut Issue) {
        if let Some(title) = &self.title {
            issue.title = title.clone();
        }
        if let Some(description) = &self.description {
            issue.description = description.clone();
        }
        if let Some(category) = self.category {
            issue.category = category;
        }
        if let Some(location) = &self.location {
            issue.location = location.clone();
        }
    }
}

#[cfg(test)]
mod issue_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(IssueCategory::Road, "road")]
    #[case(IssueCategory::Water, "water")]
    #[case(IssueCategory::Sanitation, "sanitation")]
    #[case(IssueCategory::Electricity, "electricity")]
    #[case(IssueCategory::Other, "other")]
    fn it_should_serialize_categories_in_wire_casing(
        #[case] category: IssueCategory,
        #[case] expected: &str,
    ) {
        let json = serde_json::to_value(category).unwrap();
        assert_eq!(json, serde_json::json!(expected));
    }

    #[rstest]
    fn it_should_serialize_in_progress_status_with_a_dash() {
        let json = serde_json::to_value(IssueStatus::InProgress).unwrap();
        assert_eq!(json, serde_json::json!("in-progress"));
    }

    #[rstest]
    fn it_should_reject_non_finite_coordinates() {
        let issue = Issue {
            issue_id: "issue-0001".into(),
            title: "Pothole".into(),
            description: "Deep pothole".into(),
            category: IssueCategory::Road,
            status: IssueStatus::Pending,
            lat: Some(f64::NAN),
            lng: Some(4.89),
            location: "Main St".into(),
            votes: 0,
            created_by: "user-0001".into(),
            created_at: 1_700_000_000_000,
            image_url: None,
        };
        assert!(!issue.has_coordinates());
    }

    #[rstest]
    fn it_should_apply_only_the_present_patch_fields() {
        let mut issue = Issue {
            issue_id: "issue-0001".into(),
            title: "Pothole".into(),
            description: "Deep pothole".into(),
            category: IssueCategory::Road,
            status: IssueStatus::Pending,
            lat: None,
            lng: None,
            location: "Main St".into(),
            votes: 3,
            created_by: "user-0001".into(),
            created_at: 1_700_000_000_000,
            image_url: None,
        };
        let patch = IssuePatch {
            title: Some("Large pothole".into()),
            ..IssuePatch::default()
        };
        patch.apply(&mut issue);
        assert_eq!(issue.title, "Large pothole");
        assert_eq!(issue.description, "Deep pothole");
        assert_eq!(issue.votes, 3);
    }
}
