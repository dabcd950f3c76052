//! Error types for the wizard library.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for operations that can fail outright, such as opening the
/// backing database or resolving the default data directory.
///
/// Mutations never return this type: a failed save is downgraded to a
/// [`PersistError`] warning and the in-memory order stays authoritative.
#[derive(Error, Debug)]
pub enum WizardError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> WizardError {
        WizardError::Database {
            message: self.message,
            source,
        }
    }
}

impl WizardError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }
}

/// Non-fatal failure of the persistence adapter.
///
/// Reported to callers as a warning alongside the mutation outcome.
#[derive(Error, Debug)]
pub enum PersistError {
    /// The order could not be encoded
    #[error("Failed to serialize order: {0}")]
    Serialize(#[from] serde_json::Error),
    /// The backing slot could not be read
    #[error("Failed to read slot '{key}': {message}")]
    Read { key: String, message: String },
    /// The backing slot rejected the write
    #[error("Failed to write slot '{key}': {message}")]
    Write { key: String, message: String },
    /// The backing slot is full
    #[error("Storage quota exceeded for slot '{key}' ({size} bytes)")]
    QuotaExceeded { key: String, size: usize },
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| WizardError::database(message).with_source(e))
    }
}

/// Result type alias for wizard operations
pub type Result<T> = std::result::Result<T, WizardError>;
