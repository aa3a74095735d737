//! File-backed key-value backend, one JSON file per key.
//!
//! # Responsibility
//! - Persist values as `<dir>/<key>.json` for local single-user use.
//! - Report save failures as `WriteError` instead of panicking.
//!
//! # Invariants
//! - `load` treats any read failure as an absent value; unreadable state
//!   is logged, then handled upstream by the codec/seed fallback.
//! - Keys are used verbatim as file stems and must be plain file-name
//!   tokens (no path separators).

use super::adapter::{PersistenceAdapter, WriteError};
use log::warn;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Adapter storing each key as a JSON file under one directory.
#[derive(Debug, Clone)]
pub struct FileAdapter {
    dir: PathBuf,
}

impl FileAdapter {
    /// Creates an adapter rooted at `dir`.
    ///
    /// The directory is created lazily on first save, so constructing an
    /// adapter for a missing directory is not an error.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl PersistenceAdapter for FileAdapter {
    fn load(&self, key: &str) -> Option<String> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Some(raw),
            Err(err) if err.kind() == ErrorKind::NotFound => None,
            Err(err) => {
                warn!(
                    "event=file_load module=persist status=error key={key} error={err}"
                );
                None
            }
        }
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), WriteError> {
        fs::create_dir_all(&self.dir).map_err(|err| {
            WriteError::new(
                key,
                format!("cannot create directory `{}`: {err}", self.dir.display()),
            )
        })?;
        fs::write(self.path_for(key), value).map_err(|err| WriteError::new(key, err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::FileAdapter;
    use crate::persist::adapter::PersistenceAdapter;

    #[test]
    fn load_returns_none_for_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let adapter = FileAdapter::new(dir.path());
        assert_eq!(adapter.load("tasks"), None);
    }

    #[test]
    fn save_creates_the_directory_and_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("state");
        let mut adapter = FileAdapter::new(&nested);

        adapter.save("tasks", "[]").unwrap();

        assert!(nested.join("tasks.json").is_file());
        assert_eq!(adapter.load("tasks").as_deref(), Some("[]"));
    }
}
