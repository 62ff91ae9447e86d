//! Task CLI commands

use clap::Subcommand;

use crate::display::task::{format_task_details, format_task_list};
use crate::error::{SatchelError, SatchelResult};
use crate::models::Priority;
use crate::services::TaskService;
use crate::storage::Storage;

/// Task subcommands
#[derive(Subcommand)]
pub enum TaskCommands {
    /// Add a new task
    Add {
        /// Task title
        title: String,
        /// Longer description
        #[arg(short, long, default_value = "")]
        description: String,
        /// Priority (high, medium, low, or 1-3)
        #[arg(short, long, default_value = "medium")]
        priority: String,
        /// Due date (DD-MM-YYYY)
        #[arg(long, default_value = "")]
        due_date: String,
    },
    /// List all tasks
    List,
    /// Show a task with its description
    Show {
        /// Task ID
        id: u64,
    },
    /// Mark a task as done
    Done {
        /// Task ID
        id: u64,
    },
    /// Edit a task (omitted fields keep their current value)
    Edit {
        /// Task ID
        id: u64,
        /// New title
        #[arg(short, long)]
        title: Option<String>,
        /// New description
        #[arg(short, long)]
        description: Option<String>,
        /// New priority (high, medium, low, or 1-3)
        #[arg(short, long)]
        priority: Option<String>,
        /// New due date (DD-MM-YYYY)
        #[arg(long)]
        due_date: Option<String>,
    },
    /// Delete a task
    Delete {
        /// Task ID
        id: u64,
    },
    /// Export all tasks to a CSV file
    Export {
        /// Path to the CSV file to write
        file: String,
    },
    /// Import tasks from a CSV file
    Import {
        /// Path to the CSV file to read
        file: String,
    },
}

fn parse_priority(raw: &str) -> SatchelResult<Priority> {
    Priority::parse(raw).ok_or_else(|| {
        SatchelError::Validation(format!(
            "Invalid priority: '{}'. Valid values: high, medium, low (or 1, 2, 3)",
            raw
        ))
    })
}

/// Handle a task command
pub fn handle_task_command(storage: &mut Storage, cmd: TaskCommands) -> SatchelResult<()> {
    let mut service = TaskService::new(storage);

    match cmd {
        TaskCommands::Add {
            title,
            description,
            priority,
            due_date,
        } => {
            let priority = parse_priority(&priority)?;
            let task = service.add(&title, &description, priority, &due_date)?;
            println!("Created task {} ({})", task.id, task.title);
        }

        TaskCommands::List => {
            print!("{}", format_task_list(service.list()));
        }

        TaskCommands::Show { id } => {
            let task = service.get(id)?;
            print!("{}", format_task_details(task));
        }

        TaskCommands::Done { id } => {
            service.mark_done(id)?;
            println!("Marked task {} as done", id);
        }

        TaskCommands::Edit {
            id,
            title,
            description,
            priority,
            due_date,
        } => {
            // Keep-if-blank: an absent or empty priority keeps the level
            let priority = match priority.as_deref() {
                Some(raw) if !raw.is_empty() => Some(parse_priority(raw)?),
                _ => None,
            };
            service.edit(
                id,
                title.as_deref().unwrap_or(""),
                description.as_deref().unwrap_or(""),
                priority,
                due_date.as_deref().unwrap_or(""),
            )?;
            println!("Updated task {}", id);
        }

        TaskCommands::Delete { id } => {
            service.delete(id)?;
            println!("Deleted task {}", id);
        }

        TaskCommands::Export { file } => {
            let count = service.list().len();
            service.export_csv(&file)?;
            println!("Exported {} tasks to {}", count, file);
        }

        TaskCommands::Import { file } => {
            let summary = service.import_csv(&file)?;
            println!(
                "Imported {} tasks from {} ({} rows skipped)",
                summary.imported, file, summary.skipped
            );
        }
    }

    Ok(())
}
