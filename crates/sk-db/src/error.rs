//! Database error types for sk-db.

use sk_core::errors::StoreError;
use thiserror::Error;

/// Errors from database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A SQL query failed.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// Invalid state encountered (e.g., bad data in DB).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// The configured table prefix cannot be spliced into SQL.
    #[error("Invalid table prefix '{0}': only ASCII letters, digits and underscores are allowed")]
    InvalidTablePrefix(String),

    /// No database file exists at the configured path.
    #[error("No content store found at '{0}'")]
    StoreNotFound(String),

    /// The database lacks one or more prefixed content tables.
    #[error("Content store is missing tables: {0}")]
    MissingTables(String),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<DatabaseError> for StoreError {
    fn from(error: DatabaseError) -> Self {
        match error {
            DatabaseError::Other(inner) => Self::Other(inner),
            other => Self::Query(other.to_string()),
        }
    }
}
