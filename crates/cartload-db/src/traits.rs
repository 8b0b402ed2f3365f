//! Database trait definition

use crate::error::DbResult;
use async_trait::async_trait;
use cartload_core::FieldValue;

/// Database abstraction trait for Cartload
///
/// Implementations must be Send + Sync for async operation.
#[async_trait]
pub trait Database: Send + Sync {
    /// Execute SQL that modifies data, returns affected rows
    async fn execute(&self, sql: &str) -> DbResult<usize>;

    /// Execute multiple SQL statements
    async fn execute_batch(&self, sql: &str) -> DbResult<()>;

    /// Insert all rows through one prepared statement inside a single
    /// transaction; on the first error nothing is committed.
    /// Returns the number of rows inserted.
    async fn insert_rows(&self, sql: &str, rows: &[Vec<FieldValue>]) -> DbResult<usize>;

    /// Execute query returning row count
    async fn query_count(&self, sql: &str) -> DbResult<usize>;

    /// Query and return sample rows as formatted strings.
    /// Returns up to `limit` rows, each as a comma-separated string.
    async fn query_sample_rows(&self, sql: &str, limit: usize) -> DbResult<Vec<String>>;

    /// Check if a table exists
    async fn table_exists(&self, name: &str) -> DbResult<bool>;

    /// Database type identifier for logging
    fn db_type(&self) -> &'static str;
}
