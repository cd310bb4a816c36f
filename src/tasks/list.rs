//! The task list state container.
//!
//! All mutations report whether they had any effect, so callers and tests
//! can tell a silent no-op (empty text, unknown id, unchanged edit) from an
//! applied change without inspecting side channels.

use crate::tasks::id::generate_item_id;
use crate::tasks::models::Task;

/// Maximum stored text length, in characters.
pub const MAX_TEXT_LEN: usize = 200;

/// Outcome of a mutation operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    /// The list changed.
    Applied,
    /// The operation was a no-op; the list is untouched.
    Unchanged,
}

impl Mutation {
    /// Whether the list changed.
    #[must_use]
    pub const fn applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// The canonical task list.
///
/// Ordering is insertion-at-the-front (most recent first) and is preserved
/// across every mutation except deletion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    items: Vec<Task>,
}

impl TaskList {
    /// Create an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Create a list from existing items, preserving their order.
    #[must_use]
    pub fn from_items(items: Vec<Task>) -> Self {
        Self { items }
    }

    /// All items, most recent first.
    #[must_use]
    pub fn items(&self) -> &[Task] {
        &self.items
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up a task by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Task> {
        self.items.iter().find(|t| t.id == id)
    }

    /// Add a task at the front of the list.
    ///
    /// Whitespace-only text is a no-op. Stored text is trimmed and capped
    /// at [`MAX_TEXT_LEN`] characters.
    pub fn add(&mut self, text: &str, due_at: Option<i64>, now_ms: i64) -> Mutation {
        let Some(text) = clean_text(text) else {
            return Mutation::Unchanged;
        };
        self.items.insert(0, Task::new(generate_item_id(), text, due_at, now_ms));
        Mutation::Applied
    }

    /// Flip a task's completion flag.
    ///
    /// Sets the completion timestamp on the false-to-true transition and
    /// clears it on the way back.
    pub fn toggle(&mut self, id: &str, now_ms: i64) -> Mutation {
        let Some(task) = self.items.iter_mut().find(|t| t.id == id) else {
            return Mutation::Unchanged;
        };
        task.completed = !task.completed;
        task.completed_at = task.completed.then_some(now_ms);
        Mutation::Applied
    }

    /// Replace a task's text.
    ///
    /// A no-op if the trimmed text is empty or equal to the current text;
    /// otherwise sets the edit timestamp.
    pub fn edit(&mut self, id: &str, text: &str, now_ms: i64) -> Mutation {
        let Some(text) = clean_text(text) else {
            return Mutation::Unchanged;
        };
        let Some(task) = self.items.iter_mut().find(|t| t.id == id) else {
            return Mutation::Unchanged;
        };
        if task.text == text {
            return Mutation::Unchanged;
        }
        task.text = text;
        task.edited_at = Some(now_ms);
        Mutation::Applied
    }

    /// Remove a task by id.
    pub fn delete(&mut self, id: &str) -> Mutation {
        let before = self.items.len();
        self.items.retain(|t| t.id != id);
        if self.items.len() == before {
            Mutation::Unchanged
        } else {
            Mutation::Applied
        }
    }

    /// Remove every completed task, preserving the order of the rest.
    pub fn clear_completed(&mut self) -> Mutation {
        let before = self.items.len();
        self.items.retain(|t| !t.completed);
        if self.items.len() == before {
            Mutation::Unchanged
        } else {
            Mutation::Applied
        }
    }
}

/// Trim and cap input text; `None` when nothing remains.
fn clean_text(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.chars().take(MAX_TEXT_LEN).collect())
}
