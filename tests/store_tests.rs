//! Task store behavior tests
mod common;

use taskdeck::storage::{MemoryStore, save_tasks};
use taskdeck::{
    FilterOptions, Priority, SortKey, StatusFilter, StoreError, TaskStatus, TaskStore,
    ValidationError,
};

use common::{draft, full_draft, memory_store, task};

#[test]
fn test_add_task_on_empty_collection() {
    let mut store = memory_store();
    let input = full_draft(
        "X",
        "d",
        "2025-01-01",
        Priority::Low,
        TaskStatus::Pending,
    );

    let created = store.add_task(input.clone()).unwrap();

    assert_eq!(store.tasks().len(), 1);
    assert!(!created.id.is_empty());
    assert_eq!(created.title, input.title);
    assert_eq!(created.description, input.description);
    assert_eq!(created.due_date, input.due_date);
    assert_eq!(created.priority, input.priority);
    assert_eq!(created.status, input.status);
}

#[test]
fn test_add_task_assigns_unique_ids() {
    let mut store = memory_store();
    let a = store.add_task(draft("first")).unwrap();
    let b = store.add_task(draft("second")).unwrap();
    let c = store.add_task(draft("third")).unwrap();

    assert_ne!(a.id, b.id);
    assert_ne!(b.id, c.id);
    assert_ne!(a.id, c.id);
}

#[test]
fn test_add_task_appends_in_insertion_order() {
    let mut store = memory_store();
    store.add_task(draft("first")).unwrap();
    store.add_task(draft("second")).unwrap();

    let titles: Vec<_> = store.tasks().iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["first", "second"]);
}

#[test]
fn test_add_task_with_empty_title_rejected() {
    let mut store = memory_store();
    store.add_task(draft("keep me")).unwrap();

    let err = store.add_task(draft("   ")).unwrap_err();

    assert!(matches!(
        err,
        StoreError::Validation(ValidationError::TitleRequired)
    ));
    // Collection untouched by the failed mutation
    assert_eq!(store.tasks().len(), 1);
}

#[test]
fn test_delete_task_removes_matching_id() {
    let mut store = memory_store();
    let a = store.add_task(draft("a")).unwrap();
    let b = store.add_task(draft("b")).unwrap();

    store.delete_task(&a.id).unwrap();

    let ids: Vec<_> = store.tasks().iter().map(|t| t.id.clone()).collect();
    assert_eq!(ids, vec![b.id]);
}

#[test]
fn test_delete_nonexistent_id_is_a_noop() {
    let mut store = memory_store();
    store.add_task(draft("a")).unwrap();

    store.delete_task("nonexistent-id").unwrap();

    assert_eq!(store.tasks().len(), 1);
}

#[test]
fn test_update_task_replaces_all_fields() {
    let mut store = memory_store();
    let created = store.add_task(draft("old title")).unwrap();

    let mut replacement = created.clone();
    replacement.title = "new title".to_string();
    replacement.description = "new description".to_string();
    replacement.due_date = "2026-12-31".to_string();
    replacement.priority = Priority::High;
    replacement.status = TaskStatus::InProgress;
    store.update_task(replacement.clone()).unwrap();

    assert_eq!(store.tasks(), &[replacement]);
}

#[test]
fn test_update_with_unknown_id_is_a_noop() {
    let mut store = memory_store();
    let created = store.add_task(draft("stay")).unwrap();

    let mut ghost = created.clone();
    ghost.id = "unknown".to_string();
    ghost.title = "changed".to_string();
    store.update_task(ghost).unwrap();

    assert_eq!(store.tasks()[0].title, "stay");
    assert_eq!(store.tasks().len(), 1);
}

#[test]
fn test_set_status_touches_only_the_status_field() {
    let mut storage = MemoryStore::new();
    save_tasks(
        &mut storage,
        &[
            task("1", "A", Priority::Low, TaskStatus::Pending),
            task("2", "B", Priority::High, TaskStatus::Pending),
        ],
    )
    .unwrap();
    let mut store = TaskStore::open(storage);

    store.set_status("2", TaskStatus::Completed).unwrap();

    let changed = &store.tasks()[1];
    assert_eq!(changed.status, TaskStatus::Completed);
    assert_eq!(changed.title, "B");
    assert_eq!(changed.priority, Priority::High);
    // Other tasks unaffected
    assert_eq!(store.tasks()[0].status, TaskStatus::Pending);
}

#[test]
fn test_set_status_unknown_id_is_a_noop() {
    let mut store = memory_store();
    store.add_task(draft("a")).unwrap();

    store.set_status("missing", TaskStatus::Completed).unwrap();

    assert_eq!(store.tasks()[0].status, TaskStatus::Pending);
}

#[test]
fn test_visible_tasks_applies_status_filter() {
    let mut storage = MemoryStore::new();
    save_tasks(
        &mut storage,
        &[
            task("1", "A", Priority::Low, TaskStatus::Pending),
            task("2", "B", Priority::High, TaskStatus::Completed),
        ],
    )
    .unwrap();
    let mut store = TaskStore::open(storage);

    store
        .set_filters(FilterOptions {
            status: StatusFilter::Completed,
            ..Default::default()
        })
        .unwrap();

    let visible = store.visible_tasks();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, "2");
}

#[test]
fn test_visible_tasks_is_derived_fresh() {
    let mut store = memory_store();
    store
        .set_filters(FilterOptions {
            status: StatusFilter::Completed,
            ..Default::default()
        })
        .unwrap();
    assert!(store.visible_tasks().is_empty());

    // A mutation after the filters were set shows up on the next read
    let created = store.add_task(draft("late arrival")).unwrap();
    store.set_status(&created.id, TaskStatus::Completed).unwrap();
    assert_eq!(store.visible_tasks().len(), 1);
}

#[test]
fn test_visible_tasks_sorts_filtered_subset() {
    let mut store = memory_store();
    store
        .add_task(full_draft("low", "d", "2025-01-01", Priority::Low, TaskStatus::Pending))
        .unwrap();
    store
        .add_task(full_draft("high", "d", "2025-01-01", Priority::High, TaskStatus::Pending))
        .unwrap();

    store
        .set_filters(FilterOptions {
            sort_by: SortKey::Priority,
            ..Default::default()
        })
        .unwrap();

    let titles: Vec<_> = store
        .visible_tasks()
        .into_iter()
        .map(|t| t.title)
        .collect();
    assert_eq!(titles, vec!["high", "low"]);
}

#[test]
fn test_statistics_cover_canonical_collection() {
    let mut store = memory_store();
    let a = store.add_task(draft("a")).unwrap();
    let b = store.add_task(draft("b")).unwrap();
    store.add_task(draft("c")).unwrap();
    store.set_status(&a.id, TaskStatus::Completed).unwrap();
    store.set_status(&b.id, TaskStatus::InProgress).unwrap();

    // Narrow the view; the statistics must not change
    store
        .set_filters(FilterOptions {
            status: StatusFilter::Completed,
            ..Default::default()
        })
        .unwrap();

    let stats = store.statistics();
    assert_eq!(stats.total, 3);
    assert_eq!(stats.completed, 1);
    assert_eq!(stats.in_progress, 1);
    assert_eq!(stats.pending, 1);
}
