//! Task bucketing commands.

use std::path::PathBuf;

use cadence_core::{classify_for_today, group_tasks_for_cards, Task};
use clap::Subcommand;

#[derive(Subcommand)]
pub enum TaskAction {
    /// Partition tasks into the day view (overdue/due-today/upcoming/backlog)
    Today {
        /// Path to the JSON task-snapshot file
        #[arg(long)]
        tasks: PathBuf,
    },
    /// Partition tasks into card groups (overdue/next-up/scheduled/high-priority/backlog)
    Cards {
        /// Path to the JSON task-snapshot file
        #[arg(long)]
        tasks: PathBuf,
    },
}

pub fn run(action: TaskAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        TaskAction::Today { tasks } => {
            let loaded: Vec<Task> = super::read_json(&tasks)?;
            let view = classify_for_today(loaded, chrono::Utc::now());
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
        TaskAction::Cards { tasks } => {
            let loaded: Vec<Task> = super::read_json(&tasks)?;
            let groups = group_tasks_for_cards(loaded, chrono::Utc::now());
            println!("{}", serde_json::to_string_pretty(&groups)?);
        }
    }
    Ok(())
}
