//! Error types for `tarefas`.

/// Errors that can occur in the to-do list and the static file server.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON parsing error occurred.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A YAML parsing error occurred.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A `SQLite` database error occurred.
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A date or month argument could not be parsed.
    #[error("Date error: {0}")]
    Date(#[from] chrono::ParseError),

    /// An invalid filter mode was provided.
    #[error("{0}")]
    Filter(#[from] crate::tasks::models::InvalidFilter),

    /// The HTTP listener could not be bound.
    #[error("failed to bind HTTP listener: {0}")]
    Bind(String),

    /// No home directory could be determined for data storage.
    #[error("could not determine a home directory for data storage")]
    NoDataDir,
}

/// A specialized Result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
