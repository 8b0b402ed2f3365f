//! Error types for cartload-db

use thiserror::Error;

/// Database operation errors
#[derive(Error, Debug)]
pub enum DbError {
    /// Connection error (D001)
    #[error("[D001] Database connection failed: {0}")]
    ConnectionError(String),

    /// Query execution error (D002)
    #[error("[D002] SQL execution failed: {0}")]
    ExecutionError(String),

    /// Foreign-key or uniqueness violation (D003)
    #[error("[D003] Constraint violation: {0}")]
    ConstraintViolation(String),

    /// Table not found (D004)
    #[error("[D004] Table not found: {0}")]
    TableNotFound(String),
}

/// Result type alias for DbError
pub type DbResult<T> = Result<T, DbError>;

impl From<duckdb::Error> for DbError {
    fn from(err: duckdb::Error) -> Self {
        // Classify DuckDB errors by inspecting the error message.
        // duckdb::Error does not expose structured variants, so string
        // matching is the only reliable approach. We use narrow patterns
        // to avoid misclassifying unrelated errors.
        let msg = err.to_string();
        if msg.contains("Constraint Error") || msg.contains("violates") {
            DbError::ConstraintViolation(msg)
        } else if msg.contains("Catalog Error")
            && (msg.contains("does not exist") || msg.contains("not found"))
        {
            DbError::TableNotFound(msg)
        } else {
            DbError::ExecutionError(msg)
        }
    }
}
