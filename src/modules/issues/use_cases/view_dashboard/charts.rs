// Chart view-models: pure functions of (data, interaction state) producing
// render-ready rows. The rendering itself lives with the frontend; these
// shapes carry everything it needs (labels, fills, tooltips, emphasis).

use crate::modules::issues::core::aggregate::percentage;
use crate::modules::issues::core::issue::{IssueCategory, IssueStatus};
use crate::modules::issues::core::views::{CategoryCount, TemporalPoint, TopVotedIssue};
use crate::modules::issues::use_cases::view_dashboard::selection::{ChartInteraction, Emphasis};

const TITLE_TICK_LIMIT: usize = 15;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySlice {
    pub category: IssueCategory,
    pub label: &'static str,
    pub count: u64,
    pub percent: u32,
    pub fill: &'static str,
    pub icon: &'static str,
    pub emphasis: Emphasis,
    pub tooltip: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryChartView {
    NoData,
    Data {
        total: u64,
        slices: Vec<CategorySlice>,
    },
}

pub fn category_chart(
    counts: &[CategoryCount],
    interaction: &ChartInteraction,
) -> CategoryChartView {
    let total: u64 = counts.iter().map(|c| c.count).sum();
    if total == 0 {
        return CategoryChartView::NoData;
    }
    let slices = counts
        .iter()
        .map(|entry| {
            let percent = percentage(entry.count, total);
            CategorySlice {
                category: entry.category,
                label: entry.category.label(),
                count: entry.count,
                percent,
                fill: interaction.fill(entry.category),
                icon: entry.category.icon(),
                emphasis: interaction.emphasis(entry.category),
                tooltip: format!("{} issues ({percent}%)", entry.count),
            }
        })
        .collect();
    CategoryChartView::Data { total, slices }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemporalTick {
    pub label: String,
    pub count: u64,
    pub tooltip: String,
}

/// One tick per window day; the series arrives gap-free from the adapter so
/// the x-axis stays continuous.
pub fn temporal_chart(points: &[TemporalPoint]) -> Vec<TemporalTick> {
    points
        .iter()
        .map(|point| TemporalTick {
            label: point.date.format("%b %d").to_string(),
            count: point.count,
            tooltip: format!("{} issues", point.count),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopVotedRow {
    pub issue_id: String,
    pub title: String,
    pub tick: String,
    pub votes: u32,
    pub fill: &'static str,
    pub status: IssueStatus,
}

/// Rows for both the bar chart and the adjacent list. The input is already
/// ranked; this function must not re-sort, so the two renderings stay in the
/// identical order.
pub fn top_voted_rows(entries: &[TopVotedIssue]) -> Vec<TopVotedRow> {
    entries
        .iter()
        .map(|entry| TopVotedRow {
            issue_id: entry.issue_id.clone(),
            title: entry.title.clone(),
            tick: truncate_title(&entry.title, TITLE_TICK_LIMIT),
            votes: entry.votes,
            fill: entry.category.color(),
            status: entry.status,
        })
        .collect()
}

fn truncate_title(title: &str, limit: usize) -> String {
    if title.chars().count() <= limit {
        return title.to_string();
    }
    let truncated: String = title.chars().take(limit).collect();
    format!("{truncated}...")
}

#[cfg(test)]
mod charts_tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn counts() -> Vec<CategoryCount> {
        vec![
            CategoryCount {
                category: IssueCategory::Road,
                count: 3,
            },
            CategoryCount {
                category: IssueCategory::Water,
                count: 1,
            },
        ]
    }

    #[rstest]
    fn it_should_render_no_data_for_an_empty_total(counts: Vec<CategoryCount>) {
        let _ = counts;
        let view = category_chart(&[], &ChartInteraction::new());
        assert_eq!(view, CategoryChartView::NoData);
    }

    #[rstest]
    fn it_should_build_slices_with_percent_and_tooltip(counts: Vec<CategoryCount>) {
        let view = category_chart(&counts, &ChartInteraction::new());
        let CategoryChartView::Data { total, slices } = view else {
            panic!("expected data view");
        };
        assert_eq!(total, 4);
        assert_eq!(slices[0].percent, 75);
        assert_eq!(slices[0].tooltip, "3 issues (75%)");
        assert_eq!(slices[1].percent, 25);
        assert_eq!(slices[0].fill, IssueCategory::Road.color());
    }

    #[rstest]
    fn it_should_emphasize_the_hovered_slice_and_dim_the_rest(counts: Vec<CategoryCount>) {
        let mut interaction = ChartInteraction::new();
        interaction.toggle_select(IssueCategory::Road);
        interaction.hover_enter(IssueCategory::Road);

        let view = category_chart(&counts, &interaction);
        let CategoryChartView::Data { slices, .. } = view else {
            panic!("expected data view");
        };
        assert_eq!(slices[0].emphasis, Emphasis::Emphasized);
        assert_eq!(slices[0].fill, IssueCategory::Road.hover_color());
        assert_eq!(slices[1].emphasis, Emphasis::Dimmed);
    }

    #[rstest]
    fn it_should_format_temporal_ticks() {
        let points = vec![TemporalPoint {
            date: chrono::NaiveDate::from_ymd_opt(2024, 6, 4).unwrap(),
            count: 2,
        }];
        let ticks = temporal_chart(&points);
        assert_eq!(ticks[0].label, "Jun 04");
        assert_eq!(ticks[0].tooltip, "2 issues");
    }

    #[rstest]
    fn it_should_truncate_long_titles_and_keep_input_order() {
        let entries = vec![
            TopVotedIssue {
                issue_id: "issue-0001".into(),
                title: "A very long pothole complaint".into(),
                votes: 9,
                category: IssueCategory::Road,
                status: IssueStatus::Pending,
            },
            TopVotedIssue {
                issue_id: "issue-0002".into(),
                title: "Short".into(),
                votes: 9,
                category: IssueCategory::Water,
                status: IssueStatus::Resolved,
            },
        ];
        let rows = top_voted_rows(&entries);
        assert_eq!(rows[0].tick, "A very long pot...");
        assert_eq!(rows[1].tick, "Short");
        assert_eq!(
            rows.iter().map(|r| r.issue_id.as_str()).collect::<Vec<_>>(),
            vec!["issue-0001", "issue-0002"],
            "rows must keep the precomputed ranking order"
        );
    }
}
