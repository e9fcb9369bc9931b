// Dashboard orchestration: four independent fetches issued concurrently, each
// settling into its own panel. Partial failure tolerant by construction; a
// failed fetch degrades one chart and produces one transient notification.

use std::sync::Arc;

use serde::Serialize;
use tokio::join;

use crate::modules::issues::core::notification::Notification;
use crate::modules::issues::core::views::{CategoryCount, MapIssue, TemporalPoint, TopVotedIssue};
use crate::modules::issues::use_cases::view_dashboard::panel::Panel;
use crate::shared::infrastructure::backend::{BackendError, CivicBackend};

pub const DEFAULT_WINDOW_DAYS: u32 = 7;
pub const DEFAULT_TOP_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub categories: Panel<Vec<CategoryCount>>,
    pub temporal: Panel<Vec<TemporalPoint>>,
    pub top_voted: Panel<Vec<TopVotedIssue>>,
    pub map: Panel<Vec<MapIssue>>,
    pub notifications: Vec<Notification>,
}

impl DashboardSnapshot {
    /// Combined loading flag: true while any fetch is still pending.
    pub fn is_loading(&self) -> bool {
        self.categories.is_loading()
            || self.temporal.is_loading()
            || self.top_voted.is_loading()
            || self.map.is_loading()
    }
}

pub struct DashboardHandler<TBackend>
where
    TBackend: CivicBackend + 'static,
{
    backend: Arc<TBackend>,
}

impl<TBackend> DashboardHandler<TBackend>
where
    TBackend: CivicBackend + 'static,
{
    pub fn new(backend: Arc<TBackend>) -> Self {
        Self { backend }
    }

    pub async fn load(&self, window_days: u32, top_limit: usize) -> DashboardSnapshot {
        let (categories, temporal, top_voted, map) = join!(
            self.backend.fetch_category_distribution(),
            self.backend.fetch_temporal_analysis(window_days),
            self.backend.fetch_top_voted_issues(top_limit),
            self.backend.fetch_map_issues(),
        );

        let mut notifications = Vec::new();
        DashboardSnapshot {
            categories: settle(categories, "category distribution", &mut notifications),
            temporal: settle(temporal, "temporal analysis", &mut notifications),
            top_voted: settle(top_voted, "top voted issues", &mut notifications),
            map: settle(map, "map data", &mut notifications),
            notifications,
        }
    }
}

fn settle<T>(
    result: Result<T, BackendError>,
    what: &str,
    notifications: &mut Vec<Notification>,
) -> Panel<T> {
    match result {
        Ok(data) => Panel::Ready(data),
        Err(error) => {
            tracing::warn!(what, %error, "dashboard fetch failed");
            notifications.push(Notification::new(
                format!("Error loading {what}"),
                format!("Could not load {what}. Please try again later."),
            ));
            Panel::Failed
        }
    }
}
