//! Task display formatting

use crate::models::Task;

/// Format the task list as a table
pub fn format_task_list(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return "No tasks found.\n".to_string();
    }

    let title_width = tasks
        .iter()
        .map(|t| t.title.len())
        .max()
        .unwrap_or(5)
        .max(5);

    let mut output = String::new();
    output.push_str(&format!(
        "{:>4}  {:<title_width$}  {:<6}  {:<8}  {}\n",
        "ID",
        "Title",
        "Status",
        "Priority",
        "Due",
        title_width = title_width,
    ));
    output.push_str(&format!(
        "{:->4}  {:-<title_width$}  {:-<6}  {:-<8}  {:-<10}\n",
        "",
        "",
        "",
        "",
        "",
        title_width = title_width,
    ));

    for task in tasks {
        output.push_str(&format!(
            "{:>4}  {:<title_width$}  {:<6}  {:<8}  {}\n",
            task.id,
            task.title,
            if task.done { "done" } else { "open" },
            task.priority,
            task.due_date,
            title_width = title_width,
        ));
    }

    output
}

/// Format a single task with its description
pub fn format_task_details(task: &Task) -> String {
    format!(
        "ID: {}\nTitle: {}\nStatus: {}\nPriority: {}\nDue: {}\n\n{}\n",
        task.id,
        task.title,
        if task.done { "done" } else { "open" },
        task.priority,
        task.due_date,
        task.description
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Priority;

    #[test]
    fn test_empty_list() {
        assert_eq!(format_task_list(&[]), "No tasks found.\n");
    }

    #[test]
    fn test_list_shows_status() {
        let mut done = Task::new(1, "done thing", "", Priority::High, "01-01-2025");
        done.done = true;
        let open = Task::new(2, "open thing", "", Priority::Low, "02-01-2025");

        let output = format_task_list(&[done, open]);
        assert!(output.contains("done"));
        assert!(output.contains("open"));
        assert!(output.contains("High"));
    }
}
