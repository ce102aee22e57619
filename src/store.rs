//! Task store: the canonical state controller
//!
//! `TaskStore` exclusively owns the canonical task collection and the active
//! filter settings. UI events call its mutation methods; every mutation
//! persists synchronously before returning, and the view list is derived
//! fresh on every read through the filter and sort engines.
//!
//! The canonical collection is replaced wholesale on each mutation rather
//! than edited in place, so a previously returned view stays valid until the
//! next read.

use crate::model::{FilterOptions, Task, TaskFormData, TaskStatus, Theme};
use crate::query::{filter_tasks, sort_tasks};
use crate::storage::{
    KeyValueStore, load_filters, load_tasks, load_theme, save_filters, save_tasks, save_theme,
};
use crate::validation::{ValidationError, validate_draft};
use chrono::Utc;
use thiserror::Error;

/// Error returned by store mutations
///
/// Validation failures are recoverable and carry the message shown to the
/// user; storage failures come from the underlying key-value write. A missing
/// target id is never an error, delete/update/status-change simply no-op.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("storage write failed: {0}")]
    Storage(#[from] anyhow::Error),
}

/// Counts over the canonical, unfiltered collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskStatistics {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub in_progress: usize,
}

/// Owner of the canonical task collection and active filters
///
/// Constructed once per application instance from persisted-or-default state.
/// The persistence collaborator never owns state; it only serializes what the
/// store hands it.
pub struct TaskStore<S: KeyValueStore> {
    tasks: Vec<Task>,
    filters: FilterOptions,
    theme: Theme,
    storage: S,
}

impl<S: KeyValueStore> TaskStore<S> {
    /// Open a store, loading tasks, filters and theme from persisted state
    ///
    /// Absent or unparsable entries fall back to the documented defaults:
    /// empty collection, unconstrained filters, light theme. Each entry is
    /// read independently, so one bad entry never taints the others.
    pub fn open(storage: S) -> Self {
        let tasks = load_tasks(&storage);
        let filters = load_filters(&storage);
        let theme = load_theme(&storage);
        Self {
            tasks,
            filters,
            theme,
            storage,
        }
    }

    /// The canonical, unfiltered collection in insertion order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// The active filter settings
    pub fn filters(&self) -> &FilterOptions {
        &self.filters
    }

    /// Generate a fresh task id
    ///
    /// Millisecond timestamps are monotonically distinguishable for
    /// interactive use; the bump loop guards against a collision with any id
    /// already in the collection.
    fn generate_task_id(&self) -> String {
        let mut millis = Utc::now().timestamp_millis();
        let mut id = millis.to_string();
        while self.tasks.iter().any(|t| t.id == id) {
            millis += 1;
            id = millis.to_string();
        }
        id
    }

    /// Replace the canonical collection and persist it
    fn commit(&mut self, tasks: Vec<Task>) -> Result<(), StoreError> {
        save_tasks(&mut self.storage, &tasks)?;
        self.tasks = tasks;
        Ok(())
    }

    /// Validate a draft and append it to the collection as a new task
    ///
    /// On validation failure the collection is untouched and nothing is
    /// written. On success the created task (with its assigned id) is
    /// appended to the end of the canonical collection, persisted, and
    /// returned.
    pub fn add_task(&mut self, draft: TaskFormData) -> Result<Task, StoreError> {
        validate_draft(&draft)?;

        let task = Task {
            id: self.generate_task_id(),
            title: draft.title,
            description: draft.description,
            due_date: draft.due_date,
            priority: draft.priority,
            status: draft.status,
        };

        let mut updated = self.tasks.clone();
        updated.push(task.clone());
        self.commit(updated)?;
        Ok(task)
    }

    /// Remove the task with the given id
    ///
    /// An absent id is a no-op, not an error.
    pub fn delete_task(&mut self, id: &str) -> Result<(), StoreError> {
        let updated: Vec<Task> = self.tasks.iter().filter(|t| t.id != id).cloned().collect();
        self.commit(updated)
    }

    /// Replace the stored task whose id matches `task.id`
    ///
    /// Full replacement semantics: every field of the stored task becomes the
    /// corresponding field of `task`. No-op if no task matches.
    pub fn update_task(&mut self, task: Task) -> Result<(), StoreError> {
        let updated: Vec<Task> = self
            .tasks
            .iter()
            .map(|t| if t.id == task.id { task.clone() } else { t.clone() })
            .collect();
        self.commit(updated)
    }

    /// Change only the status of the task with the given id
    ///
    /// All other fields are left untouched. No-op if the id is absent.
    pub fn set_status(&mut self, id: &str, status: TaskStatus) -> Result<(), StoreError> {
        let updated: Vec<Task> = self
            .tasks
            .iter()
            .map(|t| {
                if t.id == id {
                    Task {
                        status,
                        ..t.clone()
                    }
                } else {
                    t.clone()
                }
            })
            .collect();
        self.commit(updated)
    }

    /// Replace the active filter settings wholesale
    ///
    /// Filters are persisted under their own key, independent of the tasks.
    pub fn set_filters(&mut self, filters: FilterOptions) -> Result<(), StoreError> {
        save_filters(&mut self.storage, &filters)?;
        self.filters = filters;
        Ok(())
    }

    /// Derive the view list from the canonical collection
    ///
    /// Filtering first, then sorting by the active sort key. Always computed
    /// fresh; nothing is cached between reads.
    pub fn visible_tasks(&self) -> Vec<Task> {
        let filtered = filter_tasks(&self.tasks, &self.filters);
        sort_tasks(filtered, self.filters.sort_by)
    }

    /// Count tasks per status over the canonical collection
    ///
    /// The counts ignore the active filters on purpose: the dashboard shows
    /// overall numbers even while the view is narrowed down.
    pub fn statistics(&self) -> TaskStatistics {
        let mut stats = TaskStatistics {
            total: self.tasks.len(),
            ..Default::default()
        };
        for task in &self.tasks {
            match task.status {
                TaskStatus::Pending => stats.pending += 1,
                TaskStatus::InProgress => stats.in_progress += 1,
                TaskStatus::Completed => stats.completed += 1,
            }
        }
        stats
    }

    /// The active UI theme
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Set and persist the UI theme
    pub fn set_theme(&mut self, theme: Theme) -> Result<(), StoreError> {
        save_theme(&mut self.storage, theme)?;
        self.theme = theme;
        Ok(())
    }

    /// Flip between light and dark, persist, and return the new theme
    pub fn toggle_theme(&mut self) -> Result<Theme, StoreError> {
        let next = self.theme.toggled();
        self.set_theme(next)?;
        Ok(next)
    }

    /// Borrow the underlying key-value store
    pub fn storage(&self) -> &S {
        &self.storage
    }
}
