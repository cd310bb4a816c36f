//! Path utilities for determining data storage locations.
//!
//! Task data lives in `~/.tarefas/`, regardless of which directory the
//! server happens to be serving from. This mirrors how the browser variant
//! keeps its list in per-user local storage rather than next to the files.

use std::path::PathBuf;

/// The base directory name for tarefas data.
const DATA_DIR_NAME: &str = ".tarefas";

/// The database filename.
pub const DATABASE_FILENAME: &str = "tasks.sqlite3";

/// Get the base data directory.
///
/// Returns `~/.tarefas/` or `None` if the home directory cannot be
/// determined.
#[must_use]
pub fn data_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(DATA_DIR_NAME))
}

/// Get the key-value store database path.
///
/// Returns `~/.tarefas/tasks.sqlite3`, or `None` if the home directory
/// cannot be determined.
#[must_use]
pub fn db_path() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join(DATABASE_FILENAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_dir_returns_home_based_path() {
        if let Some(home) = dirs::home_dir() {
            let data = data_dir().unwrap();
            assert_eq!(data, home.join(".tarefas"));
        }
    }

    #[test]
    fn test_db_path_ends_with_filename() {
        if let Some(path) = db_path() {
            assert!(path.to_string_lossy().ends_with(DATABASE_FILENAME));
        }
    }
}
