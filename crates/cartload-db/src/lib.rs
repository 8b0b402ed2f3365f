//! cartload-db - Database abstraction for Cartload
//!
//! Defines the [`Database`] trait used by the ingestion pipeline and its
//! DuckDB implementation.

pub mod duckdb;
pub mod error;
pub mod traits;

pub use crate::duckdb::DuckDbBackend;
pub use crate::error::{DbError, DbResult};
pub use crate::traits::Database;
