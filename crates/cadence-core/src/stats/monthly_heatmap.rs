//! Monthly completion heatmap.
//!
//! Every calendar day of the requested month is present, days with no
//! completions included, each bucketed into an intensity level via fixed
//! thresholds. The thresholds are a deterministic policy, not configurable.

use std::collections::HashMap;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::stats::CompletionRecord;

/// One day of the heatmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeatmapDay {
    pub date: NaiveDate,
    /// Completions on that calendar day.
    pub count: u32,
    /// Bucketed intensity: 0 (none) through 4 (more than ten).
    pub level: u8,
}

impl HeatmapDay {
    /// Block character for ASCII rendering, one per level.
    pub fn heat_char(&self) -> char {
        match self.level {
            0 => ' ',
            1 => '░',
            2 => '▒',
            3 => '▓',
            _ => '█',
        }
    }
}

/// Heatmap covering a full calendar month, no gaps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyHeatmap {
    pub year: i32,
    /// Month number, 1-12.
    pub month: u32,
    /// One entry per day of the month, ascending.
    pub days: Vec<HeatmapDay>,
}

impl MonthlyHeatmap {
    /// Total completions across the month.
    pub fn total(&self) -> u32 {
        self.days.iter().map(|d| d.count).sum()
    }

    /// Render the month as an ASCII strip with a legend.
    pub fn render_ascii(&self) -> String {
        let mut output = String::new();
        output.push_str(&format!("{:04}-{:02}\n", self.year, self.month));
        for day in &self.days {
            output.push(day.heat_char());
        }
        output.push('\n');
        output.push_str("Legend: ' ' (0) ░ (1-2) ▒ (3-5) ▓ (6-10) █ (>10)\n");
        output
    }
}

/// Bucket a per-day completion count into an intensity level.
///
/// Fixed breakpoints: 0, 1-2, 3-5, 6-10, more than 10.
pub fn heat_level(count: u32) -> u8 {
    match count {
        0 => 0,
        1..=2 => 1,
        3..=5 => 2,
        6..=10 => 3,
        _ => 4,
    }
}

/// Build the heatmap for a given month.
///
/// Rejects months outside 1-12 and year/month pairs the calendar cannot
/// represent. Records falling outside the month are ignored.
pub fn monthly_heatmap(
    records: &[CompletionRecord],
    year: i32,
    month: u32,
) -> Result<MonthlyHeatmap, ValidationError> {
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
        ValidationError::invalid_value(
            "month",
            format!("{year:04}-{month:02} is not a valid calendar month"),
        )
    })?;

    let mut counts: HashMap<NaiveDate, u32> = HashMap::new();
    for record in records {
        let day = record.completed_at.date_naive();
        if day.year() == year && day.month() == month {
            *counts.entry(day).or_insert(0) += 1;
        }
    }

    let mut days = Vec::new();
    let mut date = first;
    while date.month() == month {
        let count = counts.get(&date).copied().unwrap_or(0);
        days.push(HeatmapDay {
            date,
            count,
            level: heat_level(count),
        });
        date += Duration::days(1);
    }

    Ok(MonthlyHeatmap { year, month, days })
}
