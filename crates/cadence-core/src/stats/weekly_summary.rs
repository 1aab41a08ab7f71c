//! Weekly summary: daily buckets plus per-project time totals.

use std::collections::HashMap;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::day::weekday_label;
use crate::stats::CompletionRecord;

/// Bucket name for records with no associated project.
pub const UNASSIGNED_PROJECT: &str = "unassigned";

/// One day of the weekly summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySummary {
    pub date: NaiveDate,
    /// Short weekday label ("Mon" .. "Sun").
    pub day_of_week: String,
    /// Completions on that day.
    pub count: u32,
    pub has_completions: bool,
}

/// Total minutes recorded against one project over the week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectTime {
    pub project: String,
    pub total_minutes: u64,
}

/// Aggregate view over one week of completed-task records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySummary {
    pub week_start: NaiveDate,
    /// Exactly seven entries, ascending from `week_start`.
    pub days: Vec<DaySummary>,
    /// Per-project totals, descending by total minutes.
    pub by_project: Vec<ProjectTime>,
}

/// Summarize the 7-day window `[week_start, week_start + 7 days)`.
///
/// Records outside the window are ignored. Records with no project group
/// under [`UNASSIGNED_PROJECT`]. Project totals are integer minute sums,
/// sorted descending; ties break alphabetically so output is deterministic.
pub fn weekly_summary(records: &[CompletionRecord], week_start: NaiveDate) -> WeeklySummary {
    let week_end = week_start + Duration::days(7);

    let mut day_counts: HashMap<NaiveDate, u32> = HashMap::new();
    let mut project_minutes: HashMap<String, u64> = HashMap::new();

    for record in records {
        let day = record.completed_at.date_naive();
        if day < week_start || day >= week_end {
            continue;
        }

        *day_counts.entry(day).or_insert(0) += 1;

        let project = record
            .project
            .clone()
            .unwrap_or_else(|| UNASSIGNED_PROJECT.to_string());
        *project_minutes.entry(project).or_insert(0) += u64::from(record.duration_minutes);
    }

    let days = (0..7)
        .map(|offset| {
            let date = week_start + Duration::days(offset);
            let count = day_counts.get(&date).copied().unwrap_or(0);
            DaySummary {
                date,
                day_of_week: weekday_label(date).to_string(),
                count,
                has_completions: count > 0,
            }
        })
        .collect();

    let mut by_project: Vec<ProjectTime> = project_minutes
        .into_iter()
        .map(|(project, total_minutes)| ProjectTime { project, total_minutes })
        .collect();
    by_project.sort_by(|a, b| {
        b.total_minutes
            .cmp(&a.total_minutes)
            .then_with(|| a.project.cmp(&b.project))
    });

    WeeklySummary {
        week_start,
        days,
        by_project,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn record(d: u32, project: Option<&str>, minutes: u32) -> CompletionRecord {
        CompletionRecord {
            completed_at: Utc.with_ymd_and_hms(2026, 2, d, 12, 0, 0).unwrap(),
            project: project.map(str::to_string),
            duration_minutes: minutes,
        }
    }

    fn week_start() -> NaiveDate {
        // 2026-02-09 is a Monday.
        NaiveDate::from_ymd_opt(2026, 2, 9).unwrap()
    }

    #[test]
    fn summary_has_seven_labelled_days() {
        let summary = weekly_summary(&[], week_start());
        assert_eq!(summary.days.len(), 7);
        assert_eq!(summary.days[0].day_of_week, "Mon");
        assert_eq!(summary.days[6].day_of_week, "Sun");
        assert_eq!(summary.days[6].date, NaiveDate::from_ymd_opt(2026, 2, 15).unwrap());
        assert!(summary.days.iter().all(|d| !d.has_completions));
    }

    #[test]
    fn counts_land_on_their_day() {
        let records = vec![record(9, None, 30), record(9, None, 15), record(11, None, 45)];
        let summary = weekly_summary(&records, week_start());

        assert_eq!(summary.days[0].count, 2);
        assert!(summary.days[0].has_completions);
        assert_eq!(summary.days[1].count, 0);
        assert_eq!(summary.days[2].count, 1);
    }

    #[test]
    fn window_bounds_are_half_open() {
        let records = vec![
            record(8, None, 10),  // day before week_start
            record(9, None, 10),  // first day
            record(15, None, 10), // last day
            record(16, None, 10), // week_start + 7, excluded
        ];
        let summary = weekly_summary(&records, week_start());
        let total: u32 = summary.days.iter().map(|d| d.count).sum();
        assert_eq!(total, 2);
    }

    #[test]
    fn projects_sum_and_sort_descending() {
        let records = vec![
            record(9, Some("atlas"), 50),
            record(10, Some("atlas"), 25),
            record(10, Some("borealis"), 120),
            record(12, None, 30),
        ];
        let summary = weekly_summary(&records, week_start());

        assert_eq!(
            summary.by_project,
            vec![
                ProjectTime { project: "borealis".to_string(), total_minutes: 120 },
                ProjectTime { project: "atlas".to_string(), total_minutes: 75 },
                ProjectTime { project: UNASSIGNED_PROJECT.to_string(), total_minutes: 30 },
            ]
        );
    }

    #[test]
    fn project_ties_break_alphabetically() {
        let records = vec![record(9, Some("zeta"), 40), record(10, Some("alpha"), 40)];
        let summary = weekly_summary(&records, week_start());
        assert_eq!(summary.by_project[0].project, "alpha");
        assert_eq!(summary.by_project[1].project, "zeta");
    }
}
