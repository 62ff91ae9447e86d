//! Task service

use std::path::Path;

use crate::csvio::{export_csv_file, import_csv_file};
use crate::error::{SatchelError, SatchelResult};
use crate::models::{Priority, Task};
use crate::storage::Storage;

use super::ImportSummary;

/// Service for task management
pub struct TaskService<'a> {
    storage: &'a mut Storage,
}

impl<'a> TaskService<'a> {
    /// Create a new task service
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// Create a task and persist. New tasks start not done.
    pub fn add(
        &mut self,
        title: &str,
        description: &str,
        priority: Priority,
        due_date: &str,
    ) -> SatchelResult<Task> {
        let task = Task::new(
            self.storage.tasks.next_id(),
            title,
            description,
            priority,
            due_date,
        );
        self.storage.tasks.add(task.clone())?;
        Ok(task)
    }

    /// All tasks, in collection order
    pub fn list(&self) -> &[Task] {
        self.storage.tasks.all()
    }

    /// Look up a single task
    pub fn get(&self, id: u64) -> SatchelResult<&Task> {
        self.storage
            .tasks
            .get(id)
            .ok_or_else(|| SatchelError::task_not_found(id))
    }

    /// Mark a task as completed
    pub fn mark_done(&mut self, id: u64) -> SatchelResult<()> {
        self.storage.tasks.update(id, |task| task.done = true)
    }

    /// Edit a task with keep-if-blank semantics. The priority is already
    /// parsed at the CLI boundary; `None` keeps the current level.
    pub fn edit(
        &mut self,
        id: u64,
        title: &str,
        description: &str,
        priority: Option<Priority>,
        due_date: &str,
    ) -> SatchelResult<()> {
        self.storage.tasks.update(id, |task| {
            if !title.is_empty() {
                task.title = title.to_string();
            }
            if !description.is_empty() {
                task.description = description.to_string();
            }
            if let Some(priority) = priority {
                task.priority = priority;
            }
            if !due_date.is_empty() {
                task.due_date = due_date.to_string();
            }
        })
    }

    /// Delete a task
    pub fn delete(&mut self, id: u64) -> SatchelResult<()> {
        self.storage.tasks.delete(id)
    }

    /// Export all tasks to a CSV file
    pub fn export_csv<P: AsRef<Path>>(&self, path: P) -> SatchelResult<()> {
        export_csv_file(self.storage.tasks.all(), path)
    }

    /// Import tasks from a CSV file, appending to the collection
    pub fn import_csv<P: AsRef<Path>>(&mut self, path: P) -> SatchelResult<ImportSummary> {
        let outcome = import_csv_file::<Task, _>(path)?;
        let imported = self.storage.tasks.append_all(outcome.records)?;
        Ok(ImportSummary {
            imported,
            skipped: outcome.skipped,
        })
    }
}
