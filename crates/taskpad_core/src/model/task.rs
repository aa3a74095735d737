//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record and its serialized field names.
//! - Map each priority to the fixed rank used for display ordering.
//!
//! # Invariants
//! - `id` is stable for the task lifetime and never reused by the store.
//! - `description` is non-empty after trimming; the store enforces this on
//!   creation and the codec re-checks it on load.
//! - Rank ordering is Urgent(1) < Normal(2) < Later(3); lower sorts first.

use serde::{Deserialize, Serialize};

/// Stable identifier for a task within one store.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = u64;

/// How soon a task should surface in the display ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Needs attention first.
    Urgent,
    /// Regular day-to-day work.
    Normal,
    /// Whenever there is time.
    Later,
}

impl Priority {
    /// Fixed display weight; lower values sort first.
    ///
    /// The rank exists only for ordering and is never persisted.
    pub fn rank(self) -> u8 {
        match self {
            Self::Urgent => 1,
            Self::Normal => 2,
            Self::Later => 3,
        }
    }
}

/// Canonical record for a single tracked to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable store-assigned ID used for toggle/delete addressing.
    pub id: TaskId,
    /// Free-text description; immutable after creation.
    pub description: String,
    /// Completion flag; the only mutable field.
    pub done: bool,
    /// Display priority; immutable after creation.
    pub priority: Priority,
}

impl Task {
    /// Creates a new, not-yet-done task.
    pub fn new(id: TaskId, description: impl Into<String>, priority: Priority) -> Self {
        Self {
            id,
            description: description.into(),
            done: false,
            priority,
        }
    }
}
