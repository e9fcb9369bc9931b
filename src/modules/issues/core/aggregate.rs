// Pure aggregation adapters turning raw issue records into chart-ready shapes.
//
// Responsibilities
// - Never mutate input, never panic, return empty collections for empty input.
// - Keep every derived total equal to the size of the underlying collection.

use chrono::{DateTime, Days, NaiveDate};

use crate::modules::issues::core::issue::Issue;
use crate::modules::issues::core::views::{CategoryCount, MapIssue, TemporalPoint, TopVotedIssue};

/// Groups issues by category, ordered by first occurrence in the input.
pub fn category_distribution(issues: &[Issue]) -> Vec<CategoryCount> {
    let mut counts: Vec<CategoryCount> = Vec::new();
    for issue in issues {
        match counts.iter_mut().find(|c| c.category == issue.category) {
            Some(entry) => entry.count += 1,
            None => counts.push(CategoryCount {
                category: issue.category,
                count: 1,
            }),
        }
    }
    counts
}

/// Rounded percent share of a slice. Zero total means zero percent; the chart
/// layer renders the explicit no-data state instead of dividing.
pub fn percentage(count: u64, total: u64) -> u32 {
    if total == 0 {
        return 0;
    }
    ((count * 100 + total / 2) / total) as u32
}

/// Buckets issues per calendar day over the trailing window ending at `today`.
///
/// Always returns exactly `window_days` points, ascending, with empty days at
/// count 0. Omitting empty days would break the line chart's x-axis
/// continuity, so the gap filling here is load-bearing.
pub fn temporal_series(issues: &[Issue], window_days: u32, today: NaiveDate) -> Vec<TemporalPoint> {
    if window_days == 0 {
        return Vec::new();
    }
    let start = today
        .checked_sub_days(Days::new(u64::from(window_days) - 1))
        .unwrap_or(NaiveDate::MIN);
    let mut points: Vec<TemporalPoint> = (0..window_days)
        .filter_map(|offset| {
            start
                .checked_add_days(Days::new(u64::from(offset)))
                .map(|date| TemporalPoint { date, count: 0 })
        })
        .collect();
    for issue in issues {
        let Some(day) =
            DateTime::from_timestamp_millis(issue.created_at).map(|at| at.date_naive())
        else {
            continue;
        };
        let offset = (day - start).num_days();
        if (0..points.len() as i64).contains(&offset) {
            points[offset as usize].count += 1;
        }
    }
    points
}

/// Stable descending ranking by vote count; ties keep their input order.
pub fn rank_by_votes(issues: &[Issue], limit: usize) -> Vec<TopVotedIssue> {
    let mut ranked: Vec<&Issue> = issues.iter().collect();
    // Vec::sort_by is stable, which is what keeps tie order deterministic.
    ranked.sort_by(|a, b| b.votes.cmp(&a.votes));
    ranked.into_iter().take(limit).map(Into::into).collect()
}

/// Projects issues onto the map, dropping records without finite coordinates.
pub fn map_points(issues: &[Issue]) -> Vec<MapIssue> {
    issues
        .iter()
        .filter(|issue| issue.has_coordinates())
        .map(|issue| MapIssue {
            issue_id: issue.issue_id.clone(),
            title: issue.title.clone(),
            lat: issue.lat.unwrap_or_default(),
            lng: issue.lng.unwrap_or_default(),
            category: issue.category,
            status: issue.status,
            votes: issue.votes,
        })
        .collect()
}
