//! Error types for the orchestrator library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all orchestrator operations.
#[derive(Error, Debug)]
pub enum OrchestratorError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Client not found for the given ID
    #[error("Client with ID {id} not found")]
    ClientNotFound { id: u64 },
    /// An operation was invoked in a phase that does not permit it
    #[error("Operation not permitted in phase '{phase}': {reason}")]
    Precondition { phase: String, reason: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl OrchestratorError {
    /// Creates a new database error with additional context.
    pub fn database_error(message: &str, source: rusqlite::Error) -> Self {
        Self::Database {
            message: message.to_string(),
            source,
        }
    }

    /// Creates a precondition error for an operation invoked in the wrong
    /// phase.
    pub fn precondition(phase: impl std::fmt::Display, reason: impl Into<String>) -> Self {
        Self::Precondition {
            phase: phase.to_string(),
            reason: reason.into(),
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| OrchestratorError::database_error(message, e))
    }
}

/// Result type alias for orchestrator operations
pub type Result<T> = std::result::Result<T, OrchestratorError>;
