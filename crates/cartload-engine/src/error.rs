//! Error types for cartload-engine

use cartload_core::CoreError;
use cartload_db::DbError;
use thiserror::Error;

/// Pipeline errors, each carrying the table or file it happened on
#[derive(Error, Debug)]
pub enum EngineError {
    /// P001: table creation failed
    #[error("[P001] Failed to create table '{table}': {source}")]
    Schema {
        table: String,
        #[source]
        source: DbError,
    },

    /// P002: clearing a table failed
    #[error("[P002] Failed to clear table '{table}': {source}")]
    Reset {
        table: String,
        #[source]
        source: DbError,
    },

    /// P003: reading or parsing a CSV file failed
    #[error("[P003] Failed to ingest {file}: {source}")]
    IngestCsv {
        file: String,
        #[source]
        source: CoreError,
    },

    /// P004: the store rejected a table's batch
    #[error("[P004] Failed to ingest {file} into '{table}': {source}")]
    IngestDb {
        table: String,
        file: String,
        #[source]
        source: DbError,
    },
}
