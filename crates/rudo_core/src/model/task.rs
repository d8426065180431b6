//! Task domain model.
//!
//! # Responsibility
//! - Define the task record shared by storage and callers.
//! - Validate task text before persistence.
//!
//! # Invariants
//! - `id` is assigned by storage, unique within the owning list and never
//!   reused, even after deletion or across process restarts.
//! - `completed` only ever moves from `false` to `true`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// A single unit of work inside one todo list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Storage-assigned id, unique within the owning list.
    pub id: i64,
    /// Free-form, non-empty description.
    pub text: String,
    /// Completion flag, `false` at creation.
    pub completed: bool,
}

/// Rejection reasons for task input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Task text is empty after trimming surrounding whitespace.
    EmptyText,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText => write!(f, "task text cannot be empty"),
        }
    }
}

impl Error for TaskValidationError {}

/// Trims task text and rejects input that is empty afterwards.
pub fn normalize_task_text(text: &str) -> Result<&str, TaskValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(TaskValidationError::EmptyText);
    }
    Ok(trimmed)
}
