//! Aggregation views over completed-task records.
//!
//! This module derives the calendar heatmap and weekly summary consumed by
//! presentation collaborators, plus the guarded progress percentage used by
//! every progress readout.

mod monthly_heatmap;
mod progress;
mod weekly_summary;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use monthly_heatmap::{monthly_heatmap, HeatmapDay, MonthlyHeatmap};
pub use progress::progress_percent;
pub use weekly_summary::{weekly_summary, DaySummary, ProjectTime, WeeklySummary, UNASSIGNED_PROJECT};

/// A completed-task record feeding the aggregation views.
///
/// A calendar day may carry zero or more records; unlike habit history
/// these are a multiset of timestamps, not per-day flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionRecord {
    /// When the task was completed.
    pub completed_at: DateTime<Utc>,
    /// Owning project, if any. `None` aggregates under the
    /// [`UNASSIGNED_PROJECT`] bucket.
    #[serde(default)]
    pub project: Option<String>,
    /// Time spent on the task, in whole minutes.
    #[serde(default)]
    pub duration_minutes: u32,
}
