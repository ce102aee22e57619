//! Durable key-value storage boundary
//!
//! The store persists its state through a minimal string-keyed interface,
//! mirroring the browser-local storage the UI layer runs against. Three
//! independent keys are used: tasks, filter settings, and the UI theme. Each
//! key is written and read on its own, so corruption or absence of one entry
//! never affects the others.
//!
//! Typed load helpers degrade silently: a missing or unparsable entry yields
//! the documented default instead of an error.

use crate::model::{FilterOptions, Task, Theme};
use anyhow::Result;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Storage key holding the JSON task collection
pub const TASKS_KEY: &str = "tasks";
/// Storage key holding the JSON filter settings
pub const FILTERS_KEY: &str = "filters";
/// Storage key holding the theme string
pub const THEME_KEY: &str = "theme";

/// A durable string-keyed store
///
/// The contract matches browser-local storage: `get` returns the stored
/// string if the key exists, `set` overwrites it. Values are opaque to the
/// store; serialization is the caller's concern.
pub trait KeyValueStore {
    /// Read the value stored under `key`, or `None` if absent
    fn get(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// File-backed store keeping one file per key inside a data directory
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory if needed
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.key_path(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        fs::write(self.key_path(key), value)?;
        Ok(())
    }
}

/// In-memory store for tests and embedding
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Load the task collection, falling back to an empty collection
///
/// Absent or unparsable stored JSON is not an error: the caller gets the
/// default and the bad entry is overwritten on the next save.
pub fn load_tasks(store: &dyn KeyValueStore) -> Vec<Task> {
    store
        .get(TASKS_KEY)
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default()
}

/// Persist the task collection as a JSON array
pub fn save_tasks(store: &mut dyn KeyValueStore, tasks: &[Task]) -> Result<()> {
    let raw = serde_json::to_string(tasks)?;
    store.set(TASKS_KEY, &raw)
}

/// Load the filter settings, falling back to the defaults
/// (status=all, priority=all, empty search, no sorting)
pub fn load_filters(store: &dyn KeyValueStore) -> FilterOptions {
    store
        .get(FILTERS_KEY)
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default()
}

/// Persist the filter settings as a JSON object
pub fn save_filters(store: &mut dyn KeyValueStore, filters: &FilterOptions) -> Result<()> {
    let raw = serde_json::to_string(filters)?;
    store.set(FILTERS_KEY, &raw)
}

/// Load the theme, falling back to light
pub fn load_theme(store: &dyn KeyValueStore) -> Theme {
    store
        .get(THEME_KEY)
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or_default()
}

/// Persist the theme as a plain string (`light` or `dark`)
pub fn save_theme(store: &mut dyn KeyValueStore, theme: Theme) -> Result<()> {
    store.set(THEME_KEY, &theme.to_string())
}
