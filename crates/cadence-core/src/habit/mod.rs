//! Habit completion history and streak computation.
//!
//! A habit's history is a sparse set of dated completion flags, at most one
//! per calendar day. The engine recomputes [`StreakState`] in full on every
//! logged completion rather than maintaining it incrementally, so the state
//! is always consistent with the whole history.
//!
//! Streak semantics: a streak is a maximal run of consecutive calendar days
//! each carrying a completed entry. A missing entry for "today" does not
//! break the current streak -- not having done it *yet* is distinct from
//! having broken the run.

pub mod window;

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

pub use window::{history_window, HistoryWindow, StreakBreak};

/// How far back the streak walk looks from the anchor day.
pub const STREAK_LOOKBACK_DAYS: i64 = 365;

/// A single dated completion flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionEntry {
    /// Calendar day, timezone-naive.
    pub date: NaiveDate,
    /// Whether the habit was completed on that day.
    pub completed: bool,
}

/// Completion history for one habit, keyed by calendar day.
///
/// At most one entry per day is enforced by construction; iteration is
/// date-ascending regardless of insertion order. Serializes as a sequence
/// of [`CompletionEntry`] values with ISO `YYYY-MM-DD` dates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<CompletionEntry>", into = "Vec<CompletionEntry>")]
pub struct CompletionHistory {
    days: BTreeMap<NaiveDate, bool>,
}

impl CompletionHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a history from entries in any order.
    ///
    /// Duplicate dates collapse to the last entry seen.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = CompletionEntry>,
    {
        let mut days = BTreeMap::new();
        for entry in entries {
            days.insert(entry.date, entry.completed);
        }
        Self { days }
    }

    /// Whether the given day has a completed entry.
    pub fn is_completed(&self, day: NaiveDate) -> bool {
        self.days.get(&day).copied().unwrap_or(false)
    }

    /// The recorded flag for a day, if any entry exists.
    pub fn get(&self, day: NaiveDate) -> Option<bool> {
        self.days.get(&day).copied()
    }

    /// Number of recorded days.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Whether the history has no entries at all.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Entries in ascending date order.
    pub fn entries(&self) -> impl Iterator<Item = CompletionEntry> + '_ {
        self.days.iter().map(|(&date, &completed)| CompletionEntry { date, completed })
    }

    /// Most recent day with a completed entry.
    pub fn last_completed_date(&self) -> Option<NaiveDate> {
        self.days
            .iter()
            .rev()
            .find(|(_, &completed)| completed)
            .map(|(&date, _)| date)
    }

    fn mark_completed(&mut self, day: NaiveDate) {
        self.days.insert(day, true);
    }
}

impl From<Vec<CompletionEntry>> for CompletionHistory {
    fn from(entries: Vec<CompletionEntry>) -> Self {
        Self::from_entries(entries)
    }
}

impl From<CompletionHistory> for Vec<CompletionEntry> {
    fn from(history: CompletionHistory) -> Self {
        history.entries().collect()
    }
}

/// Derived streak counters for one habit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakState {
    /// Length of the consecutive-day run touching yesterday or today.
    pub current_streak_days: u32,
    /// Best streak ever recorded.
    ///
    /// Updated as `max(previous best, current)` on every recomputation -- a
    /// ratchet, never re-derived by scanning all historical runs. If the
    /// history is edited out of band, this value can under-report.
    pub best_streak_days: u32,
    /// Most recent day with a completed entry, if any.
    pub last_completed_date: Option<NaiveDate>,
}

/// Recompute the streak state from the full history, anchored at `today`.
///
/// Walks backward day-by-day from `today` for at most
/// [`STREAK_LOOKBACK_DAYS`] days. An incomplete `today` is skipped rather
/// than treated as a break; the first incomplete day at offset one or more
/// ends the walk.
pub fn recompute_streak(
    history: &CompletionHistory,
    previous: StreakState,
    today: NaiveDate,
) -> StreakState {
    let mut current = 0u32;

    for offset in 0..STREAK_LOOKBACK_DAYS {
        let day = today - Duration::days(offset);
        if history.is_completed(day) {
            current += 1;
        } else if offset == 0 {
            // Not done yet today; the run may still be alive through yesterday.
            continue;
        } else {
            break;
        }
    }

    StreakState {
        current_streak_days: current,
        best_streak_days: previous.best_streak_days.max(current),
        last_completed_date: history.last_completed_date(),
    }
}

/// Log a completion for `day` and recompute the streak state.
///
/// Idempotent: if `day` is already completed the history is returned
/// unchanged. A pre-existing incomplete entry for `day` is flipped to
/// completed, preserving the one-entry-per-day invariant. The returned
/// state is always recomputed from the (possibly updated) full history,
/// anchored at `today`.
pub fn log_completion(
    mut history: CompletionHistory,
    previous: StreakState,
    day: NaiveDate,
    today: NaiveDate,
) -> (CompletionHistory, StreakState) {
    if !history.is_completed(day) {
        history.mark_completed(day);
    }
    let state = recompute_streak(&history, previous, today);
    (history, state)
}
