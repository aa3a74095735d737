//! In-memory key-value backend.
//!
//! # Responsibility
//! - Provide the reference in-memory adapter used by tests and demos.
//! - Allow injecting save failures to exercise write-error handling.

use super::adapter::{PersistenceAdapter, WriteError};
use std::collections::HashMap;

/// HashMap-backed adapter; values live for the adapter lifetime only.
#[derive(Debug, Default, Clone)]
pub struct MemoryAdapter {
    values: HashMap<String, String>,
    fail_saves: bool,
}

impl MemoryAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an adapter pre-populated with one stored value, e.g. to
    /// simulate state left behind by an earlier session.
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut adapter = Self::new();
        adapter.values.insert(key.into(), value.into());
        adapter
    }

    /// When set, every subsequent `save` is rejected.
    pub fn set_fail_saves(&mut self, fail: bool) {
        self.fail_saves = fail;
    }

    /// Raw stored value for assertions.
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl PersistenceAdapter for MemoryAdapter {
    fn load(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), WriteError> {
        if self.fail_saves {
            return Err(WriteError::new(key, "memory backend rejected the write"));
        }
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
