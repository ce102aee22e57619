use super::task::{Priority, TaskStatus};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Status dimension of the active filters
///
/// `All` places no constraint on the status dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    InProgress,
    Completed,
}

impl StatusFilter {
    /// Whether a task with the given status passes this filter
    pub fn matches(self, status: TaskStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Pending => status == TaskStatus::Pending,
            StatusFilter::InProgress => status == TaskStatus::InProgress,
            StatusFilter::Completed => status == TaskStatus::Completed,
        }
    }
}

impl From<TaskStatus> for StatusFilter {
    fn from(status: TaskStatus) -> Self {
        match status {
            TaskStatus::Pending => StatusFilter::Pending,
            TaskStatus::InProgress => StatusFilter::InProgress,
            TaskStatus::Completed => StatusFilter::Completed,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(StatusFilter::All),
            "pending" => Ok(StatusFilter::Pending),
            "in-progress" => Ok(StatusFilter::InProgress),
            "completed" => Ok(StatusFilter::Completed),
            _ => Err(format!(
                "Invalid status filter '{}'. Valid options are: all, pending, in-progress, completed",
                s
            )),
        }
    }
}

/// Priority dimension of the active filters
///
/// `All` places no constraint on the priority dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityFilter {
    #[default]
    All,
    Low,
    Medium,
    High,
}

impl PriorityFilter {
    /// Whether a task with the given priority passes this filter
    pub fn matches(self, priority: Priority) -> bool {
        match self {
            PriorityFilter::All => true,
            PriorityFilter::Low => priority == Priority::Low,
            PriorityFilter::Medium => priority == Priority::Medium,
            PriorityFilter::High => priority == Priority::High,
        }
    }
}

impl From<Priority> for PriorityFilter {
    fn from(priority: Priority) -> Self {
        match priority {
            Priority::Low => PriorityFilter::Low,
            Priority::Medium => PriorityFilter::Medium,
            Priority::High => PriorityFilter::High,
        }
    }
}

impl FromStr for PriorityFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(PriorityFilter::All),
            "low" => Ok(PriorityFilter::Low),
            "medium" => Ok(PriorityFilter::Medium),
            "high" => Ok(PriorityFilter::High),
            _ => Err(format!(
                "Invalid priority filter '{}'. Valid options are: all, low, medium, high",
                s
            )),
        }
    }
}

/// Field the view list is ordered by
///
/// An unrecognized value in persisted filter settings deserializes as `None`
/// rather than failing the whole filters entry; the strict parse for user
/// input lives in the `FromStr` impl.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    /// Keep canonical (insertion) order
    #[default]
    None,
    /// Ascending by parsed due date
    DueDate,
    /// Highest priority first
    Priority,
    /// Workflow order: pending, in-progress, completed
    Status,
}

impl<'de> serde::Deserialize<'de> for SortKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        // Unknown keys collapse to None instead of poisoning the whole
        // filters entry
        let raw = String::deserialize(deserializer)?;
        Ok(raw.parse().unwrap_or(SortKey::None))
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(SortKey::None),
            "dueDate" | "due-date" => Ok(SortKey::DueDate),
            "priority" => Ok(SortKey::Priority),
            "status" => Ok(SortKey::Status),
            _ => Err(format!(
                "Invalid sort key '{}'. Valid options are: none, dueDate, priority, status",
                s
            )),
        }
    }
}

/// Active filter and sort settings for deriving the view list
///
/// "All" on a dimension and an empty search string mean that dimension is
/// unconstrained; the default settings pass every task through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterOptions {
    /// Status constraint
    pub status: StatusFilter,
    /// Priority constraint
    pub priority: PriorityFilter,
    /// Case-insensitive substring matched against task titles
    pub search: String,
    /// View ordering
    #[serde(rename = "sortBy")]
    pub sort_by: SortKey,
}
