//! Storage capability contract consumed by the task store.
//!
//! # Responsibility
//! - Define the key-value load/save seam any backend must satisfy.
//! - Keep backend failure reporting semantic (`WriteError`), not
//!   transport-specific.
//!
//! # Invariants
//! - `load` treats "not found" as `None`; it never fails.
//! - `save` replaces the whole value under the key or reports why it
//!   could not.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Save failure reported by a persistence backend.
///
/// The store surfaces this to its caller without rolling back the
/// in-memory mutation that triggered the save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteError {
    /// Storage key whose save was rejected.
    pub key: String,
    /// Backend-provided failure description.
    pub message: String,
}

impl WriteError {
    pub fn new(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            message: message.into(),
        }
    }
}

impl Display for WriteError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "failed to save key `{}`: {}", self.key, self.message)
    }
}

impl Error for WriteError {}

/// Narrow key-value capability backing task-list durability.
///
/// The store is the only writer; backends never interpret the value
/// beyond storing and returning it byte-for-byte.
pub trait PersistenceAdapter {
    /// Returns the stored value for `key`, or `None` when absent.
    fn load(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    fn save(&mut self, key: &str, value: &str) -> Result<(), WriteError>;
}
