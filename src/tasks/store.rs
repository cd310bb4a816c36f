//! Snapshot persistence for the task list.
//!
//! The whole list is the unit of persistence: it is serialized as one JSON
//! array under a fixed key after every applied mutation. Loading tolerates
//! legacy records without timestamps by backfilling them once, at read
//! time.

use crate::error::Result;
use crate::storage::KeyValueStore;
use crate::tasks::list::{Mutation, TaskList};
use crate::tasks::models::Task;
use serde::Deserialize;

/// The key the task list snapshot is stored under.
pub const STORAGE_KEY: &str = "todo-items-v1";

/// A stored task as it may appear on disk, including legacy shapes that
/// predate some timestamp fields.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredTask {
    id: String,
    text: String,
    #[serde(default)]
    completed: bool,
    #[serde(default)]
    created_at: Option<i64>,
    #[serde(default)]
    completed_at: Option<i64>,
    #[serde(default)]
    edited_at: Option<i64>,
    #[serde(default)]
    due_at: Option<i64>,
}

impl StoredTask {
    /// Backfill missing timestamps: creation defaults to load time, and a
    /// completed record without a completion timestamp gets load time too.
    /// An incomplete record never keeps a completion timestamp.
    fn restore(self, now_ms: i64) -> Task {
        let completed_at = if self.completed {
            Some(self.completed_at.unwrap_or(now_ms))
        } else {
            None
        };
        Task {
            id: self.id,
            text: self.text,
            completed: self.completed,
            created_at: self.created_at.unwrap_or(now_ms),
            completed_at,
            edited_at: self.edited_at,
            due_at: self.due_at,
        }
    }
}

/// Load the task list from the store.
///
/// Read or parse failures fall back to an empty list.
#[must_use]
pub fn load_list(store: &dyn KeyValueStore, now_ms: i64) -> TaskList {
    let Ok(Some(raw)) = store.get(STORAGE_KEY) else {
        return TaskList::new();
    };
    let Ok(stored) = serde_json::from_str::<Vec<StoredTask>>(&raw) else {
        return TaskList::new();
    };
    TaskList::from_items(stored.into_iter().map(|t| t.restore(now_ms)).collect())
}

/// Write the task list snapshot to the store.
///
/// # Errors
///
/// Returns an error if serialization or the store write fails.
pub fn save_list(store: &dyn KeyValueStore, list: &TaskList) -> Result<()> {
    let json = serde_json::to_string(list.items())?;
    store.set(STORAGE_KEY, &json)
}

/// The persistent task list: the in-memory state container plus its
/// backing store.
///
/// Every applied mutation rewrites the whole-list snapshot; write failures
/// are swallowed and do not roll back the in-memory state. No-op mutations
/// leave the snapshot untouched.
#[derive(Debug)]
pub struct TaskBook<S: KeyValueStore> {
    list: TaskList,
    store: S,
}

impl<S: KeyValueStore> TaskBook<S> {
    /// Open a book, loading (and backfilling) any stored snapshot.
    pub fn open(store: S, now_ms: i64) -> Self {
        let list = load_list(&store, now_ms);
        Self { list, store }
    }

    /// The current list.
    #[must_use]
    pub fn list(&self) -> &TaskList {
        &self.list
    }

    /// Add a task. See [`TaskList::add`].
    pub fn add(&mut self, text: &str, due_at: Option<i64>, now_ms: i64) -> Mutation {
        let outcome = self.list.add(text, due_at, now_ms);
        self.persist_if(outcome);
        outcome
    }

    /// Toggle a task's completion. See [`TaskList::toggle`].
    pub fn toggle(&mut self, id: &str, now_ms: i64) -> Mutation {
        let outcome = self.list.toggle(id, now_ms);
        self.persist_if(outcome);
        outcome
    }

    /// Edit a task's text. See [`TaskList::edit`].
    pub fn edit(&mut self, id: &str, text: &str, now_ms: i64) -> Mutation {
        let outcome = self.list.edit(id, text, now_ms);
        self.persist_if(outcome);
        outcome
    }

    /// Delete a task. See [`TaskList::delete`].
    pub fn delete(&mut self, id: &str) -> Mutation {
        let outcome = self.list.delete(id);
        self.persist_if(outcome);
        outcome
    }

    /// Remove all completed tasks. See [`TaskList::clear_completed`].
    pub fn clear_completed(&mut self) -> Mutation {
        let outcome = self.list.clear_completed();
        self.persist_if(outcome);
        outcome
    }

    /// Persist after an applied mutation. Best effort: a failed write does
    /// not roll back the in-memory list.
    fn persist_if(&self, outcome: Mutation) {
        if outcome.applied() {
            let _ = save_list(&self.store, &self.list);
        }
    }
}
