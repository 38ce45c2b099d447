#![forbid(unsafe_code)]

//! The task record.

use serde::{Deserialize, Serialize};

/// One to-do item: display text plus a completion flag.
///
/// The text is immutable after creation (there is no edit operation).
/// Identity is positional: a task is addressed by its index in the
/// [`TaskList`](crate::TaskList) at the time of the current render.
///
/// The serialized form is exactly `{"text": ..., "completed": ...}` so that
/// snapshots written by earlier versions of the application parse unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Display text. Non-empty after trimming by construction.
    pub text: String,
    /// Whether the task has been marked done.
    pub completed: bool,
}

impl Task {
    /// Create a pending task from the given text, trimming surrounding
    /// whitespace.
    ///
    /// Validation (rejecting empty-after-trim text) happens at the
    /// [`TaskList::add`](crate::TaskList::add) boundary, not here.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into().trim().to_string(),
            completed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trims_and_starts_pending() {
        let task = Task::new("  Buy milk  ");
        assert_eq!(task.text, "Buy milk");
        assert!(!task.completed);
    }

    #[test]
    fn serialized_layout_is_flat() {
        let task = Task::new("Buy milk");
        let json = serde_json::to_string(&task).unwrap();
        assert_eq!(json, r#"{"text":"Buy milk","completed":false}"#);
    }

    #[test]
    fn deserializes_legacy_snapshot_entry() {
        let task: Task = serde_json::from_str(r#"{"text":"Walk dog","completed":true}"#).unwrap();
        assert_eq!(task.text, "Walk dog");
        assert!(task.completed);
    }
}
