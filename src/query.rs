//! Pure filter and sort engines
//!
//! Both functions derive a view list from the canonical collection without
//! mutating it: filtering returns a subset in unchanged relative order,
//! sorting returns a reordered copy using a stable sort so that equal-key
//! tasks keep their relative input order.

use crate::model::{FilterOptions, SortKey, Task};
use chrono::NaiveDate;

/// Select the tasks matching the active filters
///
/// A task passes when every dimension holds: status filter is `all` or equal,
/// priority filter is `all` or equal, and the search string is empty or a
/// case-insensitive substring of the title. Only the title is searched.
///
/// # Arguments
/// * `tasks` - The canonical collection
/// * `filters` - The active filter settings
///
/// # Returns
/// A new vector containing clones of the matching tasks, in input order.
/// An empty result is valid, not an error.
pub fn filter_tasks(tasks: &[Task], filters: &FilterOptions) -> Vec<Task> {
    let search_lower = filters.search.to_lowercase();
    tasks
        .iter()
        .filter(|task| {
            filters.status.matches(task.status)
                && filters.priority.matches(task.priority)
                && (search_lower.is_empty()
                    || task.title.to_lowercase().contains(&search_lower))
        })
        .cloned()
        .collect()
}

/// Parse a due date string as YYYY-MM-DD
///
/// Unparsable strings yield `None`, which the due-date sort places after all
/// parsable dates. The sort stays total either way.
fn parse_due_date(due_date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(due_date, "%Y-%m-%d").ok()
}

/// Order a task list by the given sort key
///
/// Always returns a copy; the input order is never mutated. Ordering rules:
/// - `None`: input order unchanged
/// - `DueDate`: ascending by parsed date, unparsable dates last
/// - `Priority`: high, then medium, then low
/// - `Status`: pending, then in-progress, then completed
///
/// The sort is stable: tasks with equal keys keep their relative input order,
/// so repeated sorting never reshuffles the view.
pub fn sort_tasks(tasks: Vec<Task>, sort_by: SortKey) -> Vec<Task> {
    let mut sorted = tasks;
    match sort_by {
        SortKey::None => {}
        SortKey::DueDate => {
            // None sorts after Some thanks to the bool in the key
            sorted.sort_by_key(|task| {
                let date = parse_due_date(&task.due_date);
                (date.is_none(), date)
            });
        }
        SortKey::Priority => {
            sorted.sort_by_key(|task| task.priority.severity_rank());
        }
        SortKey::Status => {
            sorted.sort_by_key(|task| task.status.workflow_rank());
        }
    }
    sorted
}
