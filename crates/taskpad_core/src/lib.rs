//! Core domain logic for Taskpad.
//! This crate is the single source of truth for task-list invariants.

pub mod logging;
pub mod model;
pub mod persist;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{Priority, Task, TaskId};
pub use persist::adapter::{PersistenceAdapter, WriteError};
pub use persist::codec::{decode_tasks, encode_tasks, CorruptStateError};
pub use persist::file::FileAdapter;
pub use persist::memory::MemoryAdapter;
pub use store::task_store::{LoadOutcome, StoreError, StoreResult, TaskStore};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
