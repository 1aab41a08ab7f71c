//! Mutually-exclusive task buckets for the day and card views.
//!
//! Both partitions classify each task independently and place it in exactly
//! one bucket; precedence is resolved per task, not by successive filters
//! sharing state.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::day::start_of_day;
use crate::task::Task;

/// Day-view partition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TodayView {
    /// Due strictly before the start of today.
    pub overdue: Vec<Task>,
    /// Due on today's calendar day.
    pub due_today: Vec<Task>,
    /// Due within the next seven days, exclusive of today.
    pub upcoming: Vec<Task>,
    /// No due date, or due beyond the upcoming horizon.
    pub backlog: Vec<Task>,
}

impl TodayView {
    /// Total tasks across all buckets.
    pub fn len(&self) -> usize {
        self.overdue.len() + self.due_today.len() + self.upcoming.len() + self.backlog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Card-view partition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardGroups {
    pub overdue: Vec<Task>,
    pub next_up: Vec<Task>,
    pub scheduled: Vec<Task>,
    pub high_priority: Vec<Task>,
    pub backlog: Vec<Task>,
}

impl CardGroups {
    /// Total tasks across all groups.
    pub fn len(&self) -> usize {
        self.overdue.len()
            + self.next_up.len()
            + self.scheduled.len()
            + self.high_priority.len()
            + self.backlog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Partition tasks for the day view.
///
/// Every task lands in exactly one bucket. Overdue and due-today checks
/// take precedence over the upcoming horizon; tasks with no due date or due
/// beyond seven days fall to the backlog.
pub fn classify_for_today(tasks: Vec<Task>, now: DateTime<Utc>) -> TodayView {
    let today_start = start_of_day(now);
    let today = now.date_naive();
    let horizon = today + Duration::days(7);

    let mut view = TodayView::default();
    for task in tasks {
        match task.due_date {
            Some(due) if due < today_start => view.overdue.push(task),
            Some(due) if due.date_naive() == today => view.due_today.push(task),
            Some(due) if due.date_naive() > today && due.date_naive() <= horizon => {
                view.upcoming.push(task)
            }
            _ => view.backlog.push(task),
        }
    }
    view
}

/// Partition tasks for the card view, first match wins.
///
/// Precedence: overdue, then the explicit next-up flag, then having a
/// scheduled start, then urgent/high priority, then backlog.
pub fn group_tasks_for_cards(tasks: Vec<Task>, now: DateTime<Utc>) -> CardGroups {
    let today_start = start_of_day(now);

    let mut groups = CardGroups::default();
    for task in tasks {
        if task.due_date.is_some_and(|due| due < today_start) {
            groups.overdue.push(task);
        } else if task.next_up {
            groups.next_up.push(task);
        } else if task.scheduled_start.is_some() {
            groups.scheduled.push(task);
        } else if task.priority.is_high() {
            groups.high_priority.push(task);
        } else {
            groups.backlog.push(task);
        }
    }
    groups
}
