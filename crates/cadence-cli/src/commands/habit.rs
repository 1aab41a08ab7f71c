//! Habit streak commands.
//!
//! History comes in as a JSON file (a sequence of `{date, completed}`
//! entries); results are printed as pretty JSON. Writing the updated
//! history back is the caller's job -- the CLI never owns storage.

use std::path::PathBuf;

use cadence_core::{history_window, log_completion, recompute_streak, CompletionHistory, StreakState};
use clap::Subcommand;
use serde_json::json;

use crate::config::Config;

#[derive(Subcommand)]
pub enum HabitAction {
    /// Log a completion and print the updated history and streak state
    Log {
        /// Path to the JSON history file
        #[arg(long)]
        history: PathBuf,
        /// Day to log (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,
        /// Anchor day for recomputation (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        today: Option<String>,
        /// Previously recorded best streak
        #[arg(long, default_value = "0")]
        best: u32,
    },
    /// Recompute and print the streak state
    Status {
        /// Path to the JSON history file
        #[arg(long)]
        history: PathBuf,
        /// Anchor day for recomputation (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        today: Option<String>,
        /// Previously recorded best streak
        #[arg(long, default_value = "0")]
        best: u32,
    },
    /// Print a dense history window with streak breaks
    Window {
        /// Path to the JSON history file
        #[arg(long)]
        history: PathBuf,
        /// Window size in days (defaults to the configured window_days)
        #[arg(long)]
        days: Option<u32>,
        /// Last day of the window (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        today: Option<String>,
    },
}

pub fn run(action: HabitAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        HabitAction::Log { history, date, today, best } => {
            let loaded: CompletionHistory = super::read_json(&history)?;
            let day = super::resolve_day(date.as_deref())?;
            let anchor = super::resolve_day(today.as_deref())?;
            let previous = StreakState {
                best_streak_days: best,
                ..StreakState::default()
            };

            tracing::debug!(%day, %anchor, "logging completion");
            let (updated, state) = log_completion(loaded, previous, day, anchor);

            let output = json!({ "history": updated, "state": state });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        HabitAction::Status { history, today, best } => {
            let loaded: CompletionHistory = super::read_json(&history)?;
            let anchor = super::resolve_day(today.as_deref())?;
            let previous = StreakState {
                best_streak_days: best,
                ..StreakState::default()
            };

            let state = recompute_streak(&loaded, previous, anchor);
            println!("{}", serde_json::to_string_pretty(&state)?);
        }
        HabitAction::Window { history, days, today } => {
            let loaded: CompletionHistory = super::read_json(&history)?;
            let anchor = super::resolve_day(today.as_deref())?;
            let days = days.unwrap_or_else(|| Config::load().window_days);

            let window = history_window(&loaded, days, anchor)?;
            println!("{}", serde_json::to_string_pretty(&window)?);
        }
    }
    Ok(())
}
