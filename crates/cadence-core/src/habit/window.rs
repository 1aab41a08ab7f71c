//! Dense history windows and streak-break detection.
//!
//! Presentation collaborators render calendars from a fixed-length run of
//! consecutive days, so the sparse history is expanded here: every day in
//! the window is present, absent days filled with `completed = false`.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::habit::{CompletionEntry, CompletionHistory};

/// The first incomplete day after a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakBreak {
    /// Day the run ended on (the incomplete day itself).
    pub date: NaiveDate,
    /// Length of the completed run that ended here.
    pub previous_streak: u32,
}

/// A gap-filled window of consecutive days plus the breaks inside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryWindow {
    /// Exactly the requested number of days, ascending, ending at the anchor.
    pub days: Vec<CompletionEntry>,
    /// Breaks detected inside the window, in date order.
    pub streak_breaks: Vec<StreakBreak>,
}

/// Produce a dense window of `window_size_days` consecutive days ending at
/// `today`.
///
/// Days absent from the history appear with `completed = false`. Scanning
/// left to right, every completed run followed by an incomplete day emits
/// one [`StreakBreak`] on that incomplete day; a trailing run still active
/// at the window end emits nothing.
pub fn history_window(
    history: &CompletionHistory,
    window_size_days: u32,
    today: NaiveDate,
) -> Result<HistoryWindow, ValidationError> {
    if window_size_days == 0 {
        return Err(ValidationError::invalid_value(
            "window_size_days",
            "window must cover at least one day",
        ));
    }

    let start = today - Duration::days(i64::from(window_size_days) - 1);

    let mut days = Vec::with_capacity(window_size_days as usize);
    let mut streak_breaks = Vec::new();
    let mut run = 0u32;

    for offset in 0..i64::from(window_size_days) {
        let date = start + Duration::days(offset);
        let completed = history.is_completed(date);
        days.push(CompletionEntry { date, completed });

        if completed {
            run += 1;
        } else {
            if run > 0 {
                streak_breaks.push(StreakBreak {
                    date,
                    previous_streak: run,
                });
            }
            run = 0;
        }
    }

    Ok(HistoryWindow { days, streak_breaks })
}
