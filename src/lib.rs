//! taskdeck - a persistent task tracker core
//!
//! This library implements the state and transformation pipeline of a
//! task-tracking UI: draft validation, pure filtering and sorting, and a
//! store that owns the canonical task collection and persists it through a
//! string-keyed storage boundary.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **Store Layer**: [`TaskStore`] - owns canonical state, applies mutations
//! - **Domain Layer**: `model`, `validation`, `query` - entities, rules and
//!   the pure filter/sort engines
//! - **Persistence Layer**: `storage` - key-value backed JSON persistence
//!
//! # Example
//!
//! ```
//! use taskdeck::{MemoryStore, Priority, TaskFormData, TaskStatus, TaskStore};
//!
//! let mut store = TaskStore::open(MemoryStore::new());
//! let task = store.add_task(TaskFormData {
//!     title: "Write the changelog".to_string(),
//!     description: "Cover everything since 0.1".to_string(),
//!     due_date: "2025-10-01".to_string(),
//!     priority: Priority::High,
//!     status: TaskStatus::Pending,
//! }).unwrap();
//!
//! store.set_status(&task.id, TaskStatus::Completed).unwrap();
//! assert_eq!(store.statistics().completed, 1);
//! ```

pub mod formatting;
pub mod model;
pub mod query;
pub mod storage;
pub mod store;
pub mod validation;

// Re-export commonly used types
pub use model::{
    FilterOptions, Priority, PriorityFilter, SortKey, StatusFilter, Task, TaskFormData,
    TaskStatus, Theme,
};
pub use query::{filter_tasks, sort_tasks};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use store::{StoreError, TaskStatistics, TaskStore};
pub use validation::{ValidationError, validate_draft};
