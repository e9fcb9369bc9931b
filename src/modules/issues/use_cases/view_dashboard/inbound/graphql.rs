// GraphQL query surface. Wire types (Gql*) stay in the adapter so the core
// remains framework-free.

use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};

use crate::modules::issues::core::issue::{Issue, IssueCategory, IssueStatus};
use crate::modules::issues::core::notification::Notification;
use crate::modules::issues::core::views::{CategoryCount, MapIssue, TemporalPoint, TopVotedIssue};
use crate::modules::issues::use_cases::view_dashboard::handler::{
    DEFAULT_TOP_LIMIT, DEFAULT_WINDOW_DAYS, DashboardSnapshot,
};
use crate::modules::issues::use_cases::view_dashboard::panel::Panel;
use crate::shell::state::AppState;

#[derive(async_graphql::Enum, Copy, Clone, Eq, PartialEq)]
pub enum GqlIssueCategory {
    Road,
    Water,
    Sanitation,
    Electricity,
    Other,
}

impl From<IssueCategory> for GqlIssueCategory {
    fn from(category: IssueCategory) -> Self {
        match category {
            IssueCategory::Road => GqlIssueCategory::Road,
            IssueCategory::Water => GqlIssueCategory::Water,
            IssueCategory::Sanitation => GqlIssueCategory::Sanitation,
            IssueCategory::Electricity => GqlIssueCategory::Electricity,
            IssueCategory::Other => GqlIssueCategory::Other,
        }
    }
}

impl From<GqlIssueCategory> for IssueCategory {
    fn from(category: GqlIssueCategory) -> Self {
        match category {
            GqlIssueCategory::Road => IssueCategory::Road,
            GqlIssueCategory::Water => IssueCategory::Water,
            GqlIssueCategory::Sanitation => IssueCategory::Sanitation,
            GqlIssueCategory::Electricity => IssueCategory::Electricity,
            GqlIssueCategory::Other => IssueCategory::Other,
        }
    }
}

#[derive(async_graphql::Enum, Copy, Clone, Eq, PartialEq)]
pub enum GqlIssueStatus {
    Pending,
    InProgress,
    Resolved,
}

impl From<IssueStatus> for GqlIssueStatus {
    fn from(status: IssueStatus) -> Self {
        match status {
            IssueStatus::Pending => GqlIssueStatus::Pending,
            IssueStatus::InProgress => GqlIssueStatus::InProgress,
            IssueStatus::Resolved => GqlIssueStatus::Resolved,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlIssue {
    pub issue_id: String,
    pub title: String,
    pub description: String,
    pub category: GqlIssueCategory,
    pub status: GqlIssueStatus,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub location: String,
    pub votes: u32,
    pub created_by: String,
    pub created_at: i64,
    pub image_url: Option<String>,
}

impl From<Issue> for GqlIssue {
    fn from(issue: Issue) -> Self {
        Self {
            issue_id: issue.issue_id,
            title: issue.title,
            description: issue.description,
            category: issue.category.into(),
            status: issue.status.into(),
            lat: issue.lat,
            lng: issue.lng,
            location: issue.location,
            votes: issue.votes,
            created_by: issue.created_by,
            created_at: issue.created_at,
            image_url: issue.image_url,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlCategoryCount {
    pub category: GqlIssueCategory,
    pub count: u64,
}

impl From<CategoryCount> for GqlCategoryCount {
    fn from(entry: CategoryCount) -> Self {
        Self {
            category: entry.category.into(),
            count: entry.count,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlTemporalPoint {
    /// ISO calendar date, day granularity.
    pub date: String,
    pub count: u64,
}

impl From<TemporalPoint> for GqlTemporalPoint {
    fn from(point: TemporalPoint) -> Self {
        Self {
            date: point.date.to_string(),
            count: point.count,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlTopVotedIssue {
    pub issue_id: String,
    pub title: String,
    pub votes: u32,
    pub category: GqlIssueCategory,
    pub status: GqlIssueStatus,
}

impl From<TopVotedIssue> for GqlTopVotedIssue {
    fn from(entry: TopVotedIssue) -> Self {
        Self {
            issue_id: entry.issue_id,
            title: entry.title,
            votes: entry.votes,
            category: entry.category.into(),
            status: entry.status.into(),
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlMapIssue {
    pub issue_id: String,
    pub title: String,
    pub lat: f64,
    pub lng: f64,
    pub category: GqlIssueCategory,
    pub status: GqlIssueStatus,
    pub votes: u32,
}

impl From<MapIssue> for GqlMapIssue {
    fn from(point: MapIssue) -> Self {
        Self {
            issue_id: point.issue_id,
            title: point.title,
            lat: point.lat,
            lng: point.lng,
            category: point.category.into(),
            status: point.status.into(),
            votes: point.votes,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlNotification {
    pub title: String,
    pub detail: String,
}

impl From<Notification> for GqlNotification {
    fn from(notification: Notification) -> Self {
        Self {
            title: notification.title,
            detail: notification.detail,
        }
    }
}

/// A failed panel surfaces as a null field plus its notification; the other
/// panels keep their data.
#[derive(SimpleObject)]
pub struct GqlDashboard {
    pub is_loading: bool,
    pub categories: Option<Vec<GqlCategoryCount>>,
    pub temporal: Option<Vec<GqlTemporalPoint>>,
    pub top_voted: Option<Vec<GqlTopVotedIssue>>,
    pub map: Option<Vec<GqlMapIssue>>,
    pub notifications: Vec<GqlNotification>,
}

fn into_field<T, G: From<T>>(panel: Panel<Vec<T>>) -> Option<Vec<G>> {
    match panel {
        Panel::Ready(data) => Some(data.into_iter().map(Into::into).collect()),
        _ => None,
    }
}

impl From<DashboardSnapshot> for GqlDashboard {
    fn from(snapshot: DashboardSnapshot) -> Self {
        let is_loading = snapshot.is_loading();
        Self {
            is_loading,
            categories: into_field(snapshot.categories),
            temporal: into_field(snapshot.temporal),
            top_voted: into_field(snapshot.top_voted),
            map: into_field(snapshot.map),
            notifications: snapshot
                .notifications
                .into_iter()
                .map(Into::into)
                .collect(),
        }
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn dashboard(
        &self,
        context: &Context<'_>,
        window_days: Option<u32>,
        limit: Option<usize>,
    ) -> GqlResult<GqlDashboard> {
        let state = context.data_unchecked::<AppState>();
        let snapshot = state
            .dashboard_handler
            .load(
                window_days.unwrap_or(DEFAULT_WINDOW_DAYS),
                limit.unwrap_or(DEFAULT_TOP_LIMIT),
            )
            .await;
        Ok(snapshot.into())
    }

    async fn issues(
        &self,
        context: &Context<'_>,
        category: Option<GqlIssueCategory>,
    ) -> GqlResult<Vec<GqlIssue>> {
        let state = context.data_unchecked::<AppState>();
        let issues = state
            .list_handler
            .browse(category.map(Into::into), None)
            .await?;
        Ok(issues.into_iter().map(Into::into).collect())
    }

    async fn my_issues(
        &self,
        context: &Context<'_>,
        user_id: String,
    ) -> GqlResult<Vec<GqlIssue>> {
        let state = context.data_unchecked::<AppState>();
        let issues = state.list_handler.mine(&user_id).await?;
        Ok(issues.into_iter().map(Into::into).collect())
    }

    async fn profile(&self, context: &Context<'_>, user_id: String) -> GqlResult<GqlProfileCard> {
        let state = context.data_unchecked::<AppState>();
        let card = state.profile_handler.card(&user_id).await;
        Ok(GqlProfileCard {
            display_name: card.display_name,
            email: card.email,
        })
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlProfileCard {
    pub display_name: String,
    pub email: Option<String>,
}
