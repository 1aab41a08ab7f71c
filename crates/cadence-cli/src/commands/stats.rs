//! Aggregate statistics commands.

use std::path::PathBuf;

use cadence_core::{monthly_heatmap, weekly_summary, CompletionRecord};
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use clap::Subcommand;

use crate::config::Config;

#[derive(Subcommand)]
pub enum StatsAction {
    /// Monthly completion heatmap
    Heatmap {
        /// Path to the JSON completion-records file
        #[arg(long)]
        records: PathBuf,
        /// Year (defaults to the current year)
        #[arg(long)]
        year: Option<i32>,
        /// Month 1-12 (defaults to the current month)
        #[arg(long)]
        month: Option<u32>,
        /// Render as an ASCII strip instead of JSON
        #[arg(long)]
        ascii: bool,
    },
    /// Weekly summary with per-project time totals
    Week {
        /// Path to the JSON completion-records file
        #[arg(long)]
        records: PathBuf,
        /// First day of the week (YYYY-MM-DD, defaults to the current week
        /// aligned to the configured week_start)
        #[arg(long)]
        start: Option<String>,
    },
}

/// Most recent `start` weekday at or before `today`.
fn align_week_start(today: NaiveDate, start: Weekday) -> NaiveDate {
    let offset = (7 + i64::from(today.weekday().num_days_from_monday())
        - i64::from(start.num_days_from_monday()))
        % 7;
    today - Duration::days(offset)
}

pub fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        StatsAction::Heatmap { records, year, month, ascii } => {
            let loaded: Vec<CompletionRecord> = super::read_json(&records)?;
            let now = chrono::Local::now().date_naive();
            let year = year.unwrap_or_else(|| now.year());
            let month = month.unwrap_or_else(|| now.month());

            let heatmap = monthly_heatmap(&loaded, year, month)?;
            if ascii {
                print!("{}", heatmap.render_ascii());
            } else {
                println!("{}", serde_json::to_string_pretty(&heatmap)?);
            }
        }
        StatsAction::Week { records, start } => {
            let loaded: Vec<CompletionRecord> = super::read_json(&records)?;
            let week_start = match start.as_deref() {
                Some(raw) => cadence_core::parse_day(raw)?,
                None => align_week_start(
                    chrono::Local::now().date_naive(),
                    Config::load().week_start_weekday(),
                ),
            };

            let summary = weekly_summary(&loaded, week_start);
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn week_aligns_backward_to_start_day() {
        // 2026-02-12 is a Thursday.
        let thursday = NaiveDate::from_ymd_opt(2026, 2, 12).unwrap();
        assert_eq!(
            align_week_start(thursday, Weekday::Mon),
            NaiveDate::from_ymd_opt(2026, 2, 9).unwrap()
        );
        assert_eq!(
            align_week_start(thursday, Weekday::Sun),
            NaiveDate::from_ymd_opt(2026, 2, 8).unwrap()
        );
        // A week-start day aligns to itself.
        assert_eq!(align_week_start(thursday, Weekday::Thu), thursday);
    }
}
