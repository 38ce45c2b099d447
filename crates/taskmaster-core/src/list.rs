#![forbid(unsafe_code)]

//! The ordered in-memory task list.

use crate::Task;

/// Insertion-ordered sequence of tasks with the three mutations the
/// application supports: append, toggle, remove.
///
/// The list is an explicitly owned state object (no globals): the application
/// model owns one and hands out references for rendering and persistence.
/// Every mutating operation here must be followed by a persistence write and
/// a full view rebuild; that ordering is enforced by the runtime, not by the
/// list itself.
///
/// # Invariants
///
/// - Order is insertion order; new tasks append at the end.
/// - Indices shift down by one past a removal; identity is positional.
/// - Out-of-range indices are silent no-ops, never panics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pending task with the trimmed text.
    ///
    /// Text that is empty after trimming is silently rejected; the list is
    /// left unchanged and `false` is returned.
    pub fn add(&mut self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        self.tasks.push(Task::new(text));
        true
    }

    /// Flip the completion flag of the task at `index`.
    ///
    /// Returns `false` without touching the list when `index` is out of
    /// range. Toggling twice returns the flag to its original value.
    pub fn toggle(&mut self, index: usize) -> bool {
        match self.tasks.get_mut(index) {
            Some(task) => {
                task.completed = !task.completed;
                true
            }
            None => false,
        }
    }

    /// Remove the task at `index`, shifting later tasks down by one.
    ///
    /// Returns `false` without touching the list when `index` is out of
    /// range.
    pub fn remove(&mut self, index: usize) -> bool {
        if index < self.tasks.len() {
            self.tasks.remove(index);
            true
        } else {
            false
        }
    }

    /// The task at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    /// Number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the list holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Iterate over the tasks in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    /// The full sequence, for serialization.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }
}

impl From<Vec<Task>> for TaskList {
    fn from(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
