//! Week-board column moves.
//!
//! The board is an immutable snapshot: an overdue column plus one column
//! per weekday (0=Sun .. 6=Sat numbering, matching the rest of the system).
//! Moving a task returns a new snapshot; failed moves return the input
//! unchanged because the caller is an interactive surface where the item
//! may already have been moved by a concurrent action.

use std::collections::BTreeMap;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::task::Task;

/// A named board column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekColumn {
    Overdue,
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl WeekColumn {
    /// All columns in board order.
    pub const ALL: [WeekColumn; 8] = [
        WeekColumn::Overdue,
        WeekColumn::Sunday,
        WeekColumn::Monday,
        WeekColumn::Tuesday,
        WeekColumn::Wednesday,
        WeekColumn::Thursday,
        WeekColumn::Friday,
        WeekColumn::Saturday,
    ];

    /// Column for a weekday.
    pub fn from_weekday(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Sun => WeekColumn::Sunday,
            Weekday::Mon => WeekColumn::Monday,
            Weekday::Tue => WeekColumn::Tuesday,
            Weekday::Wed => WeekColumn::Wednesday,
            Weekday::Thu => WeekColumn::Thursday,
            Weekday::Fri => WeekColumn::Friday,
            Weekday::Sat => WeekColumn::Saturday,
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            WeekColumn::Overdue => "Overdue",
            WeekColumn::Sunday => "Sun",
            WeekColumn::Monday => "Mon",
            WeekColumn::Tuesday => "Tue",
            WeekColumn::Wednesday => "Wed",
            WeekColumn::Thursday => "Thu",
            WeekColumn::Friday => "Fri",
            WeekColumn::Saturday => "Sat",
        }
    }
}

/// Week-board snapshot: every column present, possibly empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekBoard {
    columns: BTreeMap<WeekColumn, Vec<Task>>,
}

impl Default for WeekBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl WeekBoard {
    /// Create an empty board with all columns present.
    pub fn new() -> Self {
        let columns = WeekColumn::ALL
            .into_iter()
            .map(|column| (column, Vec::new()))
            .collect();
        Self { columns }
    }

    /// Tasks in a column, in board order.
    pub fn column(&self, column: WeekColumn) -> &[Task] {
        self.columns.get(&column).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Append a task to a column.
    pub fn push(&mut self, column: WeekColumn, task: Task) {
        self.columns.entry(column).or_default().push(task);
    }

    /// Total tasks on the board.
    pub fn len(&self) -> usize {
        self.columns.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Relocate one task between columns.
    ///
    /// Returns the board unchanged when `source == destination`, and when
    /// the task is not found in the claimed source column (a defensive
    /// no-op, not an error). Otherwise the task is removed from `source`
    /// and appended to `destination`.
    pub fn move_task(
        mut self,
        task_id: &str,
        source: WeekColumn,
        destination: WeekColumn,
    ) -> WeekBoard {
        if source == destination {
            return self;
        }

        let position = self
            .columns
            .get(&source)
            .and_then(|tasks| tasks.iter().position(|t| t.id == task_id));
        let Some(position) = position else {
            return self;
        };

        let task = self
            .columns
            .get_mut(&source)
            .map(|tasks| tasks.remove(position));
        if let Some(task) = task {
            self.columns.entry(destination).or_default().push(task);
        }
        self
    }
}
