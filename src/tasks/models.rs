//! Task record and filter types.

use serde::{Deserialize, Serialize};

/// A single to-do item.
///
/// Timestamps are epoch milliseconds. `completed_at` and `due_at` serialize
/// as explicit `null` when absent; `edited_at` is omitted until the first
/// edit, matching the persisted JSON layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier, generated at creation and never changed.
    pub id: String,
    /// Task text. Never empty or whitespace-only once stored.
    pub text: String,
    /// Whether the task is done.
    pub completed: bool,
    /// When the task was created.
    pub created_at: i64,
    /// When the task was completed. `Some` exactly while `completed` is true.
    #[serde(default)]
    pub completed_at: Option<i64>,
    /// When the text was last changed, if ever.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edited_at: Option<i64>,
    /// Due date, stored as the local midnight of the chosen day.
    #[serde(default)]
    pub due_at: Option<i64>,
}

impl Task {
    /// Create a fresh, incomplete task.
    #[must_use]
    pub const fn new(id: String, text: String, due_at: Option<i64>, now_ms: i64) -> Self {
        Self {
            id,
            text,
            completed: false,
            created_at: now_ms,
            completed_at: None,
            edited_at: None,
            due_at,
        }
    }
}

/// List filter mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    /// Show every task.
    #[default]
    All,
    /// Show only incomplete tasks.
    Active,
    /// Show only completed tasks.
    Completed,
}

impl Filter {
    /// Parse a filter mode from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid filter mode.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Result<Self, InvalidFilter> {
        match s.to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            _ => Err(InvalidFilter(s.to_string())),
        }
    }

    /// Get the string representation of the filter mode.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }

    /// Whether a task passes this filter.
    #[must_use]
    pub const fn accepts(&self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Active => !task.completed,
            Self::Completed => task.completed,
        }
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error when an invalid filter mode string is provided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidFilter(pub String);

impl std::fmt::Display for InvalidFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid filter: '{}' (must be one of: all, active, completed)", self.0)
    }
}

impl std::error::Error for InvalidFilter {}
