//! Canonical serialization for the persisted task list.
//!
//! # Responsibility
//! - Encode the task list into the one persisted JSON shape.
//! - Decode and validate persisted values before the store adopts them.
//!
//! # Invariants
//! - The persisted value is a JSON array of task records; array order is
//!   insertion order.
//! - Duplicate ids, blank descriptions, and non-array shapes are corrupt.
//!   Legacy keyed-object layouts are not migrated; they fail decoding.

use crate::model::task::Task;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Persisted value failed to parse or validate against the canonical
/// task-array shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorruptStateError {
    /// Human-readable reason the value was rejected.
    pub message: String,
}

impl CorruptStateError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Display for CorruptStateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "corrupt persisted task list: {}", self.message)
    }
}

impl Error for CorruptStateError {}

/// Encodes the task list into its canonical persisted form.
pub fn encode_tasks(tasks: &[Task]) -> Result<String, serde_json::Error> {
    serde_json::to_string(tasks)
}

/// Decodes and validates a persisted task list.
///
/// # Errors
/// - Returns `CorruptStateError` when the value is not a JSON task array,
///   when two records share an id, or when a description is blank.
pub fn decode_tasks(raw: &str) -> Result<Vec<Task>, CorruptStateError> {
    let tasks: Vec<Task> = serde_json::from_str(raw)
        .map_err(|err| CorruptStateError::new(format!("not a task array: {err}")))?;

    let mut seen_ids = HashSet::new();
    for task in &tasks {
        if !seen_ids.insert(task.id) {
            return Err(CorruptStateError::new(format!(
                "duplicate task id {}",
                task.id
            )));
        }
        if task.description.trim().is_empty() {
            return Err(CorruptStateError::new(format!(
                "task {} has a blank description",
                task.id
            )));
        }
    }

    Ok(tasks)
}
