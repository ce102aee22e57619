use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Priority of a task
///
/// Serialized lowercase to match the persisted JSON layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Can wait
    Low,
    /// Normal urgency
    Medium,
    /// Needs attention first
    High,
}

impl Priority {
    /// Severity rank used for sorting: the highest priority sorts first.
    ///
    /// # Returns
    /// 0 for high, 1 for medium, 2 for low
    pub fn severity_rank(self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(format!(
                "Invalid priority '{}'. Valid options are: low, medium, high",
                s
            )),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        };
        write!(f, "{}", s)
    }
}

/// Status of a task in its workflow
///
/// Serialized kebab-case (`in-progress` keeps its hyphen) to match the
/// persisted JSON layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// Not started yet
    Pending,
    /// Being worked on
    InProgress,
    /// Done
    Completed,
}

impl TaskStatus {
    /// Workflow rank used for sorting: pending before in-progress before completed.
    pub fn workflow_rank(self) -> u8 {
        match self {
            TaskStatus::Pending => 0,
            TaskStatus::InProgress => 1,
            TaskStatus::Completed => 2,
        }
    }
}

impl FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(TaskStatus::Pending),
            "in-progress" => Ok(TaskStatus::InProgress),
            "completed" => Ok(TaskStatus::Completed),
            _ => Err(format!(
                "Invalid status '{}'. Valid options are: pending, in-progress, completed",
                s
            )),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Completed => "completed",
        };
        write!(f, "{}", s)
    }
}

/// A task in the tracker
///
/// The `id` is an opaque unique string assigned on creation and never changed
/// afterwards. `due_date` is stored as the raw string the user entered; it is
/// only interpreted as a date when sorting by due date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier, immutable after creation
    pub id: String,
    /// Short title describing the task
    pub title: String,
    /// Longer free-form description
    pub description: String,
    /// Due date string (expected format: YYYY-MM-DD, but any string is kept)
    #[serde(rename = "dueDate")]
    pub due_date: String,
    /// Current priority
    pub priority: Priority,
    /// Current workflow status
    pub status: TaskStatus,
}

/// Transient draft used for create/edit form input
///
/// Carries everything a [`Task`] has except the id, which is assigned by the
/// store on successful creation. A draft is discarded after it is either
/// committed or cancelled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskFormData {
    pub title: String,
    pub description: String,
    #[serde(rename = "dueDate")]
    pub due_date: String,
    pub priority: Priority,
    pub status: TaskStatus,
}

impl TaskFormData {
    /// Pre-fill a draft from an existing task (edit mode)
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            due_date: task.due_date.clone(),
            priority: task.priority,
            status: task.status,
        }
    }
}

/// UI color theme
///
/// Outside the core pipeline, but part of the storage boundary: the active
/// theme is persisted under its own key and toggled between the two values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The other theme
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(format!(
                "Invalid theme '{}'. Valid options are: light, dark",
                s
            )),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        };
        write!(f, "{}", s)
    }
}
