//! Task records and presentation bucketing.
//!
//! Tasks arrive as snapshots from the persistence collaborator; the engine
//! only partitions them into mutually-exclusive presentation buckets and
//! relocates them between week-board columns. Ids are opaque caller-supplied
//! strings.

pub mod buckets;
pub mod week_board;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use buckets::{classify_for_today, group_tasks_for_cards, CardGroups, TodayView};
pub use week_board::{WeekBoard, WeekColumn};

/// Task priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
    Urgent,
}

impl TaskPriority {
    /// Whether this priority qualifies for the high-priority card group.
    pub fn is_high(&self) -> bool {
        matches!(self, TaskPriority::High | TaskPriority::Urgent)
    }
}

impl Default for TaskPriority {
    fn default() -> Self {
        TaskPriority::Medium
    }
}

/// A task snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier, supplied by the caller
    pub id: String,
    /// Task title
    pub title: String,
    /// Optional description
    #[serde(default)]
    pub description: Option<String>,
    /// When the task is due, if at all
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    /// Scheduled start time, if the task has been placed on the timeline
    #[serde(default)]
    pub scheduled_start: Option<DateTime<Utc>>,
    /// Task priority
    #[serde(default)]
    pub priority: TaskPriority,
    /// Explicit "next up" flag
    #[serde(default)]
    pub next_up: bool,
    /// Owning project, if any
    #[serde(default)]
    pub project: Option<String>,
    /// Whether the task is completed
    #[serde(default)]
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
