//! cartload-core - Core library for Cartload
//!
//! This crate provides the types shared across all Cartload components:
//! project configuration parsing, the static store schema, and the
//! per-table ingestion configuration registry with its row parser.

pub mod config;
pub mod error;
pub mod schema;
pub mod table;

pub use config::{Config, DatabaseConfig};
pub use error::{CoreError, CoreResult};
pub use schema::{table_definitions, TableDef, ORDER_STATUSES, RESET_ORDER, TABLE_ORDER};
pub use table::{table_configs, ColumnKind, ColumnSpec, FieldValue, TableConfig};
