pub mod config;
pub mod habit;
pub mod stats;
pub mod task;

use std::path::Path;

use cadence_core::parse_day;
use chrono::NaiveDate;

/// Read and deserialize a JSON snapshot file.
pub fn read_json<T: for<'de> serde::Deserialize<'de>>(
    path: &Path,
) -> Result<T, Box<dyn std::error::Error>> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Resolve an optional `YYYY-MM-DD` argument, defaulting to the local
/// calendar day.
pub fn resolve_day(arg: Option<&str>) -> Result<NaiveDate, Box<dyn std::error::Error>> {
    match arg {
        Some(raw) => Ok(parse_day(raw)?),
        None => Ok(chrono::Local::now().date_naive()),
    }
}
