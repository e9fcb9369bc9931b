// Interaction state shared across the dashboard's sibling charts.
//
// Hover is per-chart and transient; the category selection is lifted to the
// dashboard so a click in the pie chart cross-filters the map tab.

use crate::modules::issues::core::issue::IssueCategory;
use crate::modules::issues::core::views::MapIssue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardTab {
    Overview,
    Map,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Normal,
    Emphasized,
    Dimmed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartInteraction {
    hovered: Option<IssueCategory>,
    selected: Option<IssueCategory>,
}

impl ChartInteraction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hover_enter(&mut self, category: IssueCategory) {
        self.hovered = Some(category);
    }

    pub fn hover_leave(&mut self) {
        self.hovered = None;
    }

    pub fn hovered(&self) -> Option<IssueCategory> {
        self.hovered
    }

    /// Click toggle: selecting the selected category again clears the filter.
    pub fn toggle_select(&mut self, category: IssueCategory) {
        self.selected = match self.selected {
            Some(current) if current == category => None,
            _ => Some(category),
        };
    }

    pub fn selected(&self) -> Option<IssueCategory> {
        self.selected
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn emphasis(&self, category: IssueCategory) -> Emphasis {
        if self.hovered == Some(category) || self.selected == Some(category) {
            return Emphasis::Emphasized;
        }
        match self.selected {
            Some(_) => Emphasis::Dimmed,
            None => Emphasis::Normal,
        }
    }

    /// Slice fill, hover variant when the pointer is over it.
    pub fn fill(&self, category: IssueCategory) -> &'static str {
        if self.hovered == Some(category) {
            category.hover_color()
        } else {
            category.color()
        }
    }
}

/// Dashboard-level UI state that survives tab switches: the active tab, the
/// shared cross-filter, and an optional issue to focus on the map (deep link
/// from an issue card).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardUiState {
    pub tab: DashboardTab,
    pub interaction: ChartInteraction,
    pub focus_issue_id: Option<String>,
}

impl DashboardUiState {
    pub fn new() -> Self {
        Self {
            tab: DashboardTab::Overview,
            interaction: ChartInteraction::new(),
            focus_issue_id: None,
        }
    }

    pub fn open_map_focused(issue_id: impl Into<String>) -> Self {
        Self {
            tab: DashboardTab::Map,
            interaction: ChartInteraction::new(),
            focus_issue_id: Some(issue_id.into()),
        }
    }

    pub fn switch_tab(&mut self, tab: DashboardTab) {
        self.tab = tab;
    }

    pub fn filtered_map_points(&self, points: &[MapIssue]) -> Vec<MapIssue> {
        match self.interaction.selected() {
            Some(category) => points
                .iter()
                .filter(|point| point.category == category)
                .cloned()
                .collect(),
            None => points.to_vec(),
        }
    }
}

impl Default for DashboardUiState {
    fn default() -> Self {
        Self::new()
    }
}
