#![forbid(unsafe_code)]

//! The store facade the application uses.

use taskmaster_core::{Task, TaskList};

use crate::error::StoreResult;
use crate::slot::SlotBackend;

/// Facade over a [`SlotBackend`] with the load semantics the UI relies on:
/// missing or unparseable persisted data degrades to an empty sequence and is
/// never surfaced to the user.
///
/// The store holds no task state of its own; the [`TaskList`] owned by the
/// application model stays authoritative. Save failures are returned to the
/// caller, which logs and continues; nothing here is fatal and nothing is
/// retried.
pub struct TaskStore {
    backend: Box<dyn SlotBackend>,
}

impl TaskStore {
    /// Create a store over the given backend.
    #[must_use]
    pub fn new(backend: Box<dyn SlotBackend>) -> Self {
        Self { backend }
    }

    /// Hydrate the task sequence from the slot.
    ///
    /// Runs once at startup. A slot that is absent yields an empty sequence;
    /// a slot that fails to parse also yields an empty sequence, logged at
    /// WARN and swallowed.
    #[must_use]
    pub fn load_or_default(&self) -> Vec<Task> {
        match self.backend.load() {
            Ok(tasks) => {
                tracing::debug!(backend = %self.backend.name(), count = tasks.len(), "loaded snapshot");
                tasks
            }
            Err(e) => {
                tracing::warn!(backend = %self.backend.name(), error = %e, "unreadable snapshot, starting empty");
                Vec::new()
            }
        }
    }

    /// Serialize the full sequence and overwrite the slot.
    pub fn save(&self, tasks: &TaskList) -> StoreResult<()> {
        self.backend.save(tasks.tasks())
    }

    /// Remove the slot entirely.
    pub fn clear(&self) -> StoreResult<()> {
        self.backend.clear()
    }

    /// The backend name, for logging.
    #[must_use]
    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }

    /// Whether the backend is usable.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.backend.is_available()
    }
}

impl std::fmt::Debug for TaskStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskStore")
            .field("backend", &self.backend.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slot::MemorySlot;

    #[test]
    fn load_or_default_on_empty_slot() {
        let store = TaskStore::new(Box::new(MemorySlot::new()));
        assert!(store.load_or_default().is_empty());
    }

    #[test]
    fn load_or_default_swallows_corrupt_data() {
        let store = TaskStore::new(Box::new(MemorySlot::with_raw("not json at all")));
        assert!(store.load_or_default().is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let store = TaskStore::new(Box::new(MemorySlot::new()));
        let mut list = TaskList::new();
        list.add("Buy milk");
        list.toggle(0);

        store.save(&list).unwrap();
        assert_eq!(store.load_or_default(), list.tasks());
    }

    #[test]
    fn save_empty_list_persists_empty_array() {
        let slot = MemorySlot::new();
        slot.save(&[Task::new("stale")]).unwrap();

        let store = TaskStore::new(Box::new(slot));
        store.save(&TaskList::new()).unwrap();
        assert!(store.load_or_default().is_empty());
    }

    #[test]
    fn backend_name_is_reported() {
        let store = TaskStore::new(Box::new(MemorySlot::new()));
        assert_eq!(store.backend_name(), "MemorySlot");
        assert!(store.is_available());
    }
}
