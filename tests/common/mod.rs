//! Common test utilities for integration tests
//!
//! Each integration test binary compiles its own copy and uses a subset.
#![allow(dead_code)]

use taskdeck::{MemoryStore, Priority, Task, TaskFormData, TaskStatus, TaskStore};

/// Create a store backed by a fresh in-memory key-value store
pub fn memory_store() -> TaskStore<MemoryStore> {
    TaskStore::open(MemoryStore::new())
}

/// Create a valid draft with the given title
pub fn draft(title: &str) -> TaskFormData {
    TaskFormData {
        title: title.to_string(),
        description: "description".to_string(),
        due_date: "2025-01-01".to_string(),
        priority: Priority::Low,
        status: TaskStatus::Pending,
    }
}

/// Create a fully specified draft
pub fn full_draft(
    title: &str,
    description: &str,
    due_date: &str,
    priority: Priority,
    status: TaskStatus,
) -> TaskFormData {
    TaskFormData {
        title: title.to_string(),
        description: description.to_string(),
        due_date: due_date.to_string(),
        priority,
        status,
    }
}

/// Create a task with an explicit id, for seeding collections directly
pub fn task(id: &str, title: &str, priority: Priority, status: TaskStatus) -> Task {
    Task {
        id: id.to_string(),
        title: title.to_string(),
        description: "description".to_string(),
        due_date: "2025-01-01".to_string(),
        priority,
        status,
    }
}
