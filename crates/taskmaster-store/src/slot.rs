#![forbid(unsafe_code)]

//! Slot backends: where the serialized task sequence lives.
//!
//! A slot holds exactly one value: the JSON array of task records,
//! insertion-ordered. Saving overwrites the whole value; loading reads it
//! back. The file backend uses a write-to-temp + rename pattern so no
//! partial-write state is ever observable.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use taskmaster_core::Task;

use crate::error::{StoreError, StoreResult};

/// Trait for pluggable slot storage backends.
///
/// Implementations must be `Send + Sync` so test harnesses can share them.
///
/// # Implementation Notes
///
/// - `load` returns an empty sequence when the slot has never been written
///   (first run). A present-but-unparseable slot is an error at this layer;
///   the [`TaskStore`](crate::TaskStore) facade decides to swallow it.
/// - `save` replaces the whole slot atomically.
pub trait SlotBackend: Send + Sync {
    /// Human-readable name for logging.
    fn name(&self) -> &str;

    /// Read the slot. Empty slot yields `Ok(vec![])`.
    fn load(&self) -> StoreResult<Vec<Task>>;

    /// Serialize the full sequence and overwrite the slot.
    fn save(&self, tasks: &[Task]) -> StoreResult<()>;

    /// Remove the slot entirely.
    fn clear(&self) -> StoreResult<()>;

    /// Check if the backend is available and functional.
    fn is_available(&self) -> bool {
        true
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Memory slot (tests, ephemeral runs)
// ─────────────────────────────────────────────────────────────────────────────

/// In-memory slot holding the raw serialized snapshot.
///
/// Storing the serialized text rather than parsed records keeps the backend
/// honest: load exercises the same decode path as the file backend, and tests
/// can pre-populate the slot with malformed data.
#[derive(Default)]
pub struct MemorySlot {
    raw: RwLock<Option<String>>,
}

impl MemorySlot {
    /// Create an empty memory slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a memory slot pre-populated with raw (possibly invalid) text.
    #[must_use]
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: RwLock::new(Some(raw.into())),
        }
    }

    /// The raw stored text, if any. For test assertions.
    #[must_use]
    pub fn raw(&self) -> Option<String> {
        self.raw.read().ok()?.clone()
    }
}

impl SlotBackend for MemorySlot {
    fn name(&self) -> &str {
        "MemorySlot"
    }

    fn load(&self) -> StoreResult<Vec<Task>> {
        let guard = self
            .raw
            .read()
            .map_err(|_| StoreError::Unavailable("lock poisoned".into()))?;
        match guard.as_deref() {
            None => Ok(Vec::new()),
            Some(raw) => Ok(serde_json::from_str(raw)?),
        }
    }

    fn save(&self, tasks: &[Task]) -> StoreResult<()> {
        let raw = serde_json::to_string(tasks)?;
        let mut guard = self
            .raw
            .write()
            .map_err(|_| StoreError::Unavailable("lock poisoned".into()))?;
        *guard = Some(raw);
        Ok(())
    }

    fn clear(&self) -> StoreResult<()> {
        let mut guard = self
            .raw
            .write()
            .map_err(|_| StoreError::Unavailable("lock poisoned".into()))?;
        *guard = None;
        Ok(())
    }
}

impl std::fmt::Debug for MemorySlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let populated = self.raw.read().map(|g| g.is_some()).unwrap_or(false);
        f.debug_struct("MemorySlot")
            .field("populated", &populated)
            .finish()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File slot (production)
// ─────────────────────────────────────────────────────────────────────────────

/// File-based slot: one JSON file holding the task array.
///
/// # File Format
///
/// ```json
/// [
///   {"text": "Buy milk", "completed": false}
/// ]
/// ```
///
/// # Atomic Writes
///
/// Writes use a temporary file + rename pattern:
/// 1. Write to `{path}.tmp`
/// 2. Flush and sync
/// 3. Rename `{path}.tmp` -> `{path}`
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    /// Create a file slot at the given path.
    ///
    /// The file does not need to exist; it is created on first save.
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The slot path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Default slot location: `$XDG_STATE_HOME/taskmaster/tasks.json`,
    /// falling back to `~/.local/state` and finally the current directory.
    #[must_use]
    pub fn default_path() -> PathBuf {
        state_dir_or_fallback().join("taskmaster").join("tasks.json")
    }

    fn temp_path(&self) -> PathBuf {
        let mut tmp = self.path.clone();
        tmp.set_extension("json.tmp");
        tmp
    }
}

/// Get the state directory, falling back to the current dir if unavailable.
fn state_dir_or_fallback() -> PathBuf {
    if let Ok(state_home) = std::env::var("XDG_STATE_HOME") {
        return PathBuf::from(state_home);
    }
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".local").join("state");
    }
    PathBuf::from(".")
}

impl SlotBackend for FileSlot {
    fn name(&self) -> &str {
        "FileSlot"
    }

    fn load(&self) -> StoreResult<Vec<Task>> {
        if !self.path.exists() {
            // First run, nothing persisted yet.
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);
        let tasks: Vec<Task> = serde_json::from_reader(reader)
            .map_err(|e| StoreError::Serialization(format!("failed to parse snapshot: {e}")))?;
        Ok(tasks)
    }

    fn save(&self, tasks: &[Task]) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Write to temp file first (atomic pattern).
        let tmp_path = self.temp_path();
        {
            let file = File::create(&tmp_path)?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer(&mut writer, tasks)
                .map_err(|e| StoreError::Serialization(format!("failed to serialize: {e}")))?;
            writer.flush()?;
            writer.get_ref().sync_all()?;
        }

        fs::rename(&tmp_path, &self.path)?;

        tracing::debug!(path = %self.path.display(), tasks = tasks.len(), "saved snapshot");
        Ok(())
    }

    fn clear(&self) -> StoreResult<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }

    fn is_available(&self) -> bool {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                return fs::create_dir_all(parent).is_ok();
            }
            let probe = parent.join(".taskmaster_write_probe");
            if fs::write(&probe, b"probe").is_ok() {
                let _ = fs::remove_file(&probe);
                return true;
            }
        }
        false
    }
}

impl std::fmt::Debug for FileSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileSlot").field("path", &self.path).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tasks() -> Vec<Task> {
        vec![
            Task::new("Buy milk"),
            Task {
                text: "Walk dog".into(),
                completed: true,
            },
        ]
    }

    #[test]
    fn memory_slot_round_trip() {
        let slot = MemorySlot::new();
        assert!(slot.load().unwrap().is_empty());

        let tasks = sample_tasks();
        slot.save(&tasks).unwrap();
        assert_eq!(slot.load().unwrap(), tasks);

        slot.clear().unwrap();
        assert!(slot.load().unwrap().is_empty());
        assert!(slot.raw().is_none());
    }

    #[test]
    fn memory_slot_invalid_raw_is_error() {
        let slot = MemorySlot::with_raw("this is not json");
        assert!(matches!(slot.load(), Err(StoreError::Serialization(_))));
    }

    #[test]
    fn memory_slot_stores_bare_array() {
        let slot = MemorySlot::new();
        slot.save(&[Task::new("Buy milk")]).unwrap();
        assert_eq!(
            slot.raw().unwrap(),
            r#"[{"text":"Buy milk","completed":false}]"#
        );
    }
}


#[cfg(test)]
mod properties {
    use super::*;
    use proptest::prelude::*;

    fn task_strategy() -> impl Strategy<Value = Task> {
        ("\\PC{0,40}", any::<bool>()).prop_map(|(text, completed)| Task {
            text,
            completed,
        })
    }

    proptest! {
        #[test]
        fn slot_round_trip(tasks in proptest::collection::vec(task_strategy(), 0..12)) {
            let slot = MemorySlot::new();
            slot.save(&tasks).unwrap();
            prop_assert_eq!(slot.load().unwrap(), tasks);
        }
    }
}
