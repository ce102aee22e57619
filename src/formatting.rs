//! Formatting helpers for CLI output
//!
//! This module contains formatting logic for displaying tasks, statistics,
//! and filter settings.

use crate::model::{FilterOptions, SortKey, Task};
use crate::store::TaskStatistics;

/// Format a task list into a display string
///
/// # Arguments
/// * `tasks` - The tasks to format, already filtered and sorted
///
/// # Returns
/// Formatted string representation of the tasks
pub fn format_tasks(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return "No tasks found".to_string();
    }

    let mut result = format!("Found {} task(s):\n\n", tasks.len());
    for task in tasks {
        result.push_str(&format!(
            "- [{}] {} (status: {}, priority: {})\n",
            task.id, task.title, task.status, task.priority
        ));
        result.push_str(&format!("  Description: {}\n", task.description));
        result.push_str(&format!("  Due: {}\n", task.due_date));
    }

    result
}

/// Format the dashboard statistics line
pub fn format_statistics(stats: &TaskStatistics) -> String {
    format!(
        "Total: {} | Pending: {} | In progress: {} | Completed: {}",
        stats.total, stats.pending, stats.in_progress, stats.completed
    )
}

/// Format the active filter settings
pub fn format_filters(filters: &FilterOptions) -> String {
    let sort_by = match filters.sort_by {
        SortKey::None => "none",
        SortKey::DueDate => "dueDate",
        SortKey::Priority => "priority",
        SortKey::Status => "status",
    };
    let search = if filters.search.is_empty() {
        "(none)".to_string()
    } else {
        format!("\"{}\"", filters.search)
    };
    format!(
        "status: {:?} | priority: {:?} | search: {} | sortBy: {}",
        filters.status, filters.priority, search, sort_by
    )
}
