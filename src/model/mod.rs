//! Domain models for the task tracker
//!
//! This module contains the core data structures and their implementations.
//! It is split into submodules for better organization:
//! - `task`: Task entity, draft form data, priority/status enums, theme
//! - `filters`: Filter and sort settings applied when deriving the view list

mod filters;
mod task;

// Re-export all public types
pub use filters::{FilterOptions, PriorityFilter, SortKey, StatusFilter};
pub use task::{Priority, Task, TaskFormData, TaskStatus, Theme};
