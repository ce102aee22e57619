//! Draft validation for the task tracker
//!
//! This module contains the validation rules applied to form input before a
//! task is created or edited. Rules are checked in a fixed order and the
//! first failing rule wins; errors are never aggregated.

use crate::model::TaskFormData;
use thiserror::Error;

/// Reason a task draft was rejected
///
/// Each variant carries the single human-readable message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Task title is required.")]
    TitleRequired,
    #[error("Task description is required.")]
    DescriptionRequired,
    #[error("Due date is required.")]
    DueDateRequired,
}

/// Validate a task draft
///
/// Rules, in order (short-circuit on the first failure):
/// 1. title, trimmed, must be non-empty
/// 2. description, trimmed, must be non-empty
/// 3. due date must be a non-empty string
///
/// The due date is only checked for presence; no format or parseability check
/// is performed, so unparsable date strings are accepted here and handled by
/// the sort engine. Pure and idempotent.
///
/// # Arguments
/// * `draft` - The form input to validate
///
/// # Returns
/// `Ok(())` if the draft is acceptable, otherwise the first failing rule
pub fn validate_draft(draft: &TaskFormData) -> Result<(), ValidationError> {
    if draft.title.trim().is_empty() {
        return Err(ValidationError::TitleRequired);
    }
    if draft.description.trim().is_empty() {
        return Err(ValidationError::DescriptionRequired);
    }
    if draft.due_date.is_empty() {
        return Err(ValidationError::DueDateRequired);
    }
    Ok(())
}
