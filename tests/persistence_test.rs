//! Integration tests for task persistence through the SQLite store.

use tarefas::storage::{KeyValueStore, SqliteStore};
use tarefas::tasks::store::STORAGE_KEY;
use tarefas::tasks::TaskBook;
use tempfile::TempDir;

const NOW: i64 = 1_700_000_000_000;

fn store_in(dir: &TempDir) -> SqliteStore {
    SqliteStore::with_path(dir.path().join("tasks.sqlite3")).unwrap()
}

#[test]
fn test_tasks_survive_reopening_the_store() {
    let dir = TempDir::new().unwrap();

    let mut book = TaskBook::open(store_in(&dir), NOW);
    book.add("write report", None, NOW);
    book.add("dentist", Some(NOW + 86_400_000), NOW + 1000);
    let id = book.list().items()[1].id.clone();
    book.toggle(&id, NOW + 2000);
    let expected = book.list().clone();
    drop(book);

    let reopened = TaskBook::open(store_in(&dir), NOW + 60_000);
    assert_eq!(reopened.list(), &expected);
}

#[test]
fn test_legacy_snapshot_is_backfilled_on_load() {
    let dir = TempDir::new().unwrap();

    let store = store_in(&dir);
    let raw = r#"[
        {"id": "old-1", "text": "from before timestamps", "completed": true},
        {"id": "old-2", "text": "still open", "completed": false}
    ]"#;
    store.set(STORAGE_KEY, raw).unwrap();

    let book = TaskBook::open(store, NOW);
    let items = book.list().items();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].created_at, NOW);
    assert_eq!(items[0].completed_at, Some(NOW));
    assert_eq!(items[1].completed_at, None);
}

#[test]
fn test_delete_rewrites_the_snapshot() {
    let dir = TempDir::new().unwrap();

    let mut book = TaskBook::open(store_in(&dir), NOW);
    book.add("keep", None, NOW);
    book.add("drop", None, NOW);
    let id = book.list().items()[0].id.clone();
    book.delete(&id);
    drop(book);

    let reopened = TaskBook::open(store_in(&dir), NOW);
    assert_eq!(reopened.list().len(), 1);
    assert_eq!(reopened.list().items()[0].text, "keep");
}

#[test]
fn test_corrupt_snapshot_loads_as_empty_list() {
    let dir = TempDir::new().unwrap();

    let store = store_in(&dir);
    store.set(STORAGE_KEY, "{{ not json").unwrap();

    let book = TaskBook::open(store, NOW);
    assert!(book.list().is_empty());
}
