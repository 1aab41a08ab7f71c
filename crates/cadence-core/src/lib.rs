//! # Cadence Core Library
//!
//! Pure, synchronous derivation logic for a personal productivity system:
//! habit streaks, calendar aggregation, and task bucketing. Every operation
//! takes an input snapshot and returns a new output snapshot; nothing here
//! performs I/O, blocks, or mutates shared state. Persistence and
//! presentation are external collaborators that feed history in and render
//! the derived views.
//!
//! ## Key Components
//!
//! - [`CompletionHistory`] + [`log_completion`]: sparse per-day completion
//!   flags and full streak recomputation
//! - [`history_window`]: dense, gap-filled calendar windows with
//!   streak-break detection
//! - [`monthly_heatmap`] / [`weekly_summary`]: aggregate views over
//!   completed-task records
//! - [`classify_for_today`] / [`group_tasks_for_cards`] / [`WeekBoard`]:
//!   mutually-exclusive presentation buckets

pub mod day;
pub mod error;
pub mod habit;
pub mod stats;
pub mod task;

pub use day::{parse_day, start_of_day, weekday_label};
pub use error::{CoreError, Result, ValidationError};
pub use habit::{
    history_window, log_completion, recompute_streak, CompletionEntry, CompletionHistory,
    HistoryWindow, StreakBreak, StreakState, STREAK_LOOKBACK_DAYS,
};
pub use stats::{
    monthly_heatmap, progress_percent, weekly_summary, CompletionRecord, DaySummary, HeatmapDay,
    MonthlyHeatmap, ProjectTime, WeeklySummary, UNASSIGNED_PROJECT,
};
pub use task::{
    classify_for_today, group_tasks_for_cards, CardGroups, Task, TaskPriority, TodayView,
    WeekBoard, WeekColumn,
};
