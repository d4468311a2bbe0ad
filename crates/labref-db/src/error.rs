//! Database error types for labref-db.

use thiserror::Error;

/// Errors from store operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A single row upsert failed. The enclosing transaction is rolled back.
    #[error("Upsert into {table} failed for key '{key}': {source}")]
    Upsert {
        table: &'static str,
        key: String,
        #[source]
        source: libsql::Error,
    },

    /// Schema bootstrap failed.
    #[error("Schema setup failed: {0}")]
    Schema(String),

    /// A remote database URL was given without an auth token.
    #[error("Remote database {0} requires an auth token")]
    MissingAuthToken(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// Invalid state encountered (e.g., bad data in DB).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),
}
