//! Task store: sole owner and mutator of the task list.
//!
//! # Responsibility
//! - Apply add/toggle/delete mutations and keep them durable.
//! - Derive the priority-ordered display view without touching stored
//!   order.
//!
//! # Invariants
//! - No two tasks ever share an id; ids come from a counter that only
//!   grows, so deleted ids are never reused.
//! - Validation failures (`EmptyDescription`, `NotFound`) apply nothing
//!   and never reach the adapter.
//! - A failed save leaves the in-memory mutation in place and is reported
//!   to the caller.

use crate::model::task::{Priority, Task, TaskId};
use crate::persist::adapter::{PersistenceAdapter, WriteError};
use crate::persist::codec::{decode_tasks, encode_tasks, CorruptStateError};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure of a task-store mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Add refused: the description was empty after trimming.
    EmptyDescription,
    /// Toggle/delete referenced an id that is not in the list.
    NotFound(TaskId),
    /// The backend rejected the save. The in-memory mutation stands;
    /// only durability failed, so callers should warn rather than retry
    /// the mutation.
    Write(WriteError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "task description cannot be empty"),
            Self::NotFound(id) => write!(f, "task not found: {id}"),
            Self::Write(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Write(err) => Some(err),
            Self::EmptyDescription | Self::NotFound(_) => None,
        }
    }
}

impl From<WriteError> for StoreError {
    fn from(value: WriteError) -> Self {
        Self::Write(value)
    }
}

/// How `TaskStore::open` obtained its initial task list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A well-formed persisted list was adopted.
    Loaded,
    /// No persisted value existed; the default seed set was adopted.
    Seeded,
    /// The persisted value was malformed; the default seed set was
    /// adopted and the rejection reason is carried here.
    Recovered(CorruptStateError),
}

impl LoadOutcome {
    fn label(&self) -> &'static str {
        match self {
            Self::Loaded => "loaded",
            Self::Seeded => "seeded",
            Self::Recovered(_) => "recovered",
        }
    }
}

/// Single source of truth for task state, generic over the injected
/// persistence backend.
pub struct TaskStore<P: PersistenceAdapter> {
    tasks: Vec<Task>,
    next_id: TaskId,
    adapter: P,
    key: String,
}

impl<P: PersistenceAdapter> TaskStore<P> {
    /// Opens a store bound to `key` on the given backend.
    ///
    /// # Contract
    /// - A present, well-formed value is adopted as-is.
    /// - An absent value yields the default seed set.
    /// - A malformed value yields the seed set plus
    ///   `LoadOutcome::Recovered`; opening never fails.
    /// - Opening performs no save by itself.
    pub fn open(adapter: P, key: impl Into<String>) -> (Self, LoadOutcome) {
        let key = key.into();
        let (tasks, outcome) = match adapter.load(&key) {
            None => (Self::default_seed(), LoadOutcome::Seeded),
            Some(raw) => match decode_tasks(&raw) {
                Ok(tasks) => (tasks, LoadOutcome::Loaded),
                Err(err) => {
                    warn!(
                        "event=store_open module=store status=recovered key={key} error={err}"
                    );
                    (Self::default_seed(), LoadOutcome::Recovered(err))
                }
            },
        };

        let next_id = tasks.iter().map(|task| task.id).max().unwrap_or(0) + 1;
        info!(
            "event=store_open module=store status=ok key={} outcome={} tasks={}",
            key,
            outcome.label(),
            tasks.len()
        );

        (
            Self {
                tasks,
                next_id,
                adapter,
                key,
            },
            outcome,
        )
    }

    /// Fixed fallback list used when no persisted state is usable.
    ///
    /// Covers all three priorities (and one already-done entry) so a
    /// fresh install demonstrates the display ordering.
    pub fn default_seed() -> Vec<Task> {
        vec![
            Task::new(1, "Plan the week", Priority::Urgent),
            Task::new(2, "Reply to pending mail", Priority::Normal),
            Task {
                id: 3,
                description: "Set up the task tracker".to_string(),
                done: true,
                priority: Priority::Urgent,
            },
            Task::new(4, "Clean out the garage", Priority::Later),
        ]
    }

    /// Appends a new task and persists the list.
    ///
    /// The description is trimmed before storage. Returns the created
    /// task on success.
    ///
    /// # Errors
    /// - `StoreError::EmptyDescription` when the trimmed description is
    ///   empty; nothing changes.
    /// - `StoreError::Write` when the save fails; the task is still in
    ///   the list.
    pub fn add_task(&mut self, description: &str, priority: Priority) -> StoreResult<Task> {
        let description = description.trim();
        if description.is_empty() {
            return Err(StoreError::EmptyDescription);
        }

        let task = Task::new(self.next_id, description, priority);
        self.next_id += 1;
        self.tasks.push(task.clone());
        info!(
            "event=task_add module=store status=ok id={} priority={:?} tasks={}",
            task.id,
            task.priority,
            self.tasks.len()
        );

        self.persist()?;
        Ok(task)
    }

    /// Flips the completion flag of the task with `id` and persists.
    ///
    /// Two toggles in succession restore the original `done` value; each
    /// call still mutates and persists.
    ///
    /// # Errors
    /// - `StoreError::NotFound` when no task has `id`; nothing changes.
    /// - `StoreError::Write` when the save fails; the flip stands.
    pub fn toggle_task(&mut self, id: TaskId) -> StoreResult<Task> {
        let task = self
            .tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(StoreError::NotFound(id))?;
        task.done = !task.done;
        let updated = task.clone();
        info!(
            "event=task_toggle module=store status=ok id={id} done={}",
            updated.done
        );

        self.persist()?;
        Ok(updated)
    }

    /// Removes the task with `id` and persists. Deletion is irreversible.
    ///
    /// # Errors
    /// - `StoreError::NotFound` when no task has `id`; nothing changes.
    /// - `StoreError::Write` when the save fails; the removal stands.
    pub fn delete_task(&mut self, id: TaskId) -> StoreResult<()> {
        let position = self
            .tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or(StoreError::NotFound(id))?;
        self.tasks.remove(position);
        info!(
            "event=task_delete module=store status=ok id={id} tasks={}",
            self.tasks.len()
        );

        self.persist()
    }

    /// Priority-ordered snapshot for display.
    ///
    /// Pure derivation: rank ascending, stable on ties so equal-priority
    /// tasks keep their insertion order. The stored sequence is never
    /// reordered.
    pub fn sorted_view(&self) -> Vec<Task> {
        let mut view = self.tasks.clone();
        view.sort_by_key(|task| task.priority.rank());
        view
    }

    /// Tasks in canonical storage (insertion) order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Looks up one task by id.
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Storage key this store persists under.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read access to the injected backend, e.g. for test assertions.
    pub fn adapter(&self) -> &P {
        &self.adapter
    }

    /// Mutable access to the injected backend.
    pub fn adapter_mut(&mut self) -> &mut P {
        &mut self.adapter
    }

    fn persist(&mut self) -> StoreResult<()> {
        let encoded = encode_tasks(&self.tasks)
            .map_err(|err| WriteError::new(&self.key, format!("cannot encode task list: {err}")))?;
        if let Err(err) = self.adapter.save(&self.key, &encoded) {
            warn!(
                "event=store_save module=store status=error key={} error={err}",
                self.key
            );
            return Err(StoreError::Write(err));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::TaskStore;
    use crate::model::task::Priority;
    use crate::persist::memory::MemoryAdapter;

    #[test]
    fn default_seed_covers_all_priorities() {
        let seed = TaskStore::<MemoryAdapter>::default_seed();
        assert!(!seed.is_empty());
        for priority in [Priority::Urgent, Priority::Normal, Priority::Later] {
            assert!(seed.iter().any(|task| task.priority == priority));
        }
    }

    #[test]
    fn next_id_starts_past_the_highest_persisted_id() {
        let raw = r#"[{"id":41,"description":"old","done":false,"priority":"normal"}]"#;
        let (mut store, _) = TaskStore::open(MemoryAdapter::with_value("tasks", raw), "tasks");

        let task = store.add_task("new", Priority::Normal).unwrap();
        assert_eq!(task.id, 42);
    }
}
