//! Task model
//!
//! Tasks carry a completion flag, a closed priority level and a free-form
//! due date string.

use csv::StringRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::record::{csv_bool, csv_field, csv_id, CsvRowError, Record};

/// Task priority level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    /// Parse a priority from user input. Accepts the numeric menu tokens
    /// ("1" = high, "2" = medium, "3" = low) as well as the level names.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "1" | "high" => Some(Self::High),
            "2" | "medium" => Some(Self::Medium),
            "3" | "low" => Some(Self::Low),
            _ => None,
        }
    }

    /// Lowercase token used in CSV rows and JSON documents
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::High => write!(f, "High"),
            Self::Medium => write!(f, "Medium"),
            Self::Low => write!(f, "Low"),
        }
    }
}

/// A to-do item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier within the tasks collection
    pub id: u64,

    /// Short title shown in list views
    pub title: String,

    /// Longer description
    pub description: String,

    /// Whether the task has been completed
    #[serde(default)]
    pub done: bool,

    /// Priority level
    #[serde(default)]
    pub priority: Priority,

    /// Due date, `DD-MM-YYYY`. Kept as entered; not parsed at construction.
    pub due_date: String,
}

impl Task {
    /// Create a new, not-yet-done task
    pub fn new(
        id: u64,
        title: impl Into<String>,
        description: impl Into<String>,
        priority: Priority,
        due_date: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            done: false,
            priority,
            due_date: due_date.into(),
        }
    }
}

impl Record for Task {
    const ENTITY: &'static str = "Task";
    const FILE_NAME: &'static str = "tasks.json";
    const REQUIRED_FIELDS: &'static [&'static str] =
        &["id", "title", "description", "done", "priority", "due_date"];
    const CSV_HEADER: &'static [&'static str] =
        &["id", "title", "description", "done", "priority", "due_date"];

    fn id(&self) -> u64 {
        self.id
    }

    fn csv_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.title.clone(),
            self.description.clone(),
            self.done.to_string(),
            self.priority.as_str().to_string(),
            self.due_date.clone(),
        ]
    }

    fn from_csv_row(row: &StringRecord) -> Result<Self, CsvRowError> {
        let id = csv_id(row, 0)?;
        let title = csv_field(row, 1, "title")?.to_string();
        let description = csv_field(row, 2, "description")?.to_string();
        let done = csv_bool(row, 3, "done")?;
        let priority_raw = csv_field(row, 4, "priority")?;
        let priority = Priority::parse(priority_raw)
            .ok_or_else(|| CsvRowError::Coercion(format!("invalid priority '{}'", priority_raw)))?;
        let due_date = csv_field(row, 5, "due_date")?.to_string();
        Ok(Self {
            id,
            title,
            description,
            done,
            priority,
            due_date,
        })
    }
}
