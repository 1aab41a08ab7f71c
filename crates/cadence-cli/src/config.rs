//! TOML-based CLI configuration.
//!
//! Stores presentation defaults the engine itself does not own:
//! - History window size for `habit window`
//! - Week start day for `stats week`
//!
//! Configuration is stored at `~/.config/cadence/config.toml`.

use std::path::PathBuf;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Returns `~/.config/cadence[-dev]/` based on CADENCE_ENV.
///
/// Set CADENCE_ENV=dev to use a development data directory.
pub fn data_dir() -> Result<PathBuf, Box<dyn std::error::Error>> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("CADENCE_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("cadence-dev")
    } else {
        base_dir.join("cadence")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// CLI configuration.
///
/// Serialized to/from TOML at `~/.config/cadence/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Default number of days for `habit window`.
    #[serde(default = "default_window_days")]
    pub window_days: u32,
    /// Week start day for `stats week` ("monday", "sunday", ...).
    #[serde(default = "default_week_start")]
    pub week_start: String,
}

fn default_window_days() -> u32 {
    30
}
fn default_week_start() -> String {
    "monday".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_days: default_window_days(),
            week_start: default_week_start(),
        }
    }
}

impl Config {
    fn path() -> Result<PathBuf, Box<dyn std::error::Error>> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load the config, falling back to defaults when the file is missing
    /// or unreadable.
    pub fn load() -> Self {
        let Ok(path) = Self::path() else {
            return Self::default();
        };
        std::fs::read_to_string(path)
            .ok()
            .and_then(|raw| toml::from_str(&raw).ok())
            .unwrap_or_default()
    }

    /// Persist the config.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let raw = toml::to_string_pretty(self)?;
        std::fs::write(Self::path()?, raw)?;
        Ok(())
    }

    /// Look up a config value by key.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "window_days" => Some(self.window_days.to_string()),
            "week_start" => Some(self.week_start.clone()),
            _ => None,
        }
    }

    /// Set a config value by key and persist it.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), Box<dyn std::error::Error>> {
        match key {
            "window_days" => {
                self.window_days = value.parse()?;
            }
            "week_start" => {
                value.parse::<Weekday>().map_err(|_| {
                    format!("'{value}' is not a weekday name")
                })?;
                self.week_start = value.to_lowercase();
            }
            _ => return Err(format!("unknown key: {key}").into()),
        }
        self.save()
    }

    /// Week start as a chrono weekday, defaulting to Monday.
    pub fn week_start_weekday(&self) -> Weekday {
        self.week_start.parse().unwrap_or(Weekday::Mon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.window_days, 30);
        assert_eq!(config.week_start_weekday(), Weekday::Mon);
    }

    #[test]
    fn week_start_parses_names() {
        let config = Config {
            week_start: "sunday".to_string(),
            ..Config::default()
        };
        assert_eq!(config.week_start_weekday(), Weekday::Sun);
    }

    #[test]
    fn unknown_week_start_falls_back_to_monday() {
        let config = Config {
            week_start: "someday".to_string(),
            ..Config::default()
        };
        assert_eq!(config.week_start_weekday(), Weekday::Mon);
    }

    #[test]
    fn get_known_keys() {
        let config = Config::default();
        assert_eq!(config.get("window_days").as_deref(), Some("30"));
        assert_eq!(config.get("week_start").as_deref(), Some("monday"));
        assert_eq!(config.get("nope"), None);
    }
}
