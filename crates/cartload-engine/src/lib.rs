//! cartload-engine - Ingestion pipeline for Cartload
//!
//! Sequences schema creation, full table reset, and CSV ingestion in
//! dependency order over one database connection. Also hosts the
//! synthetic dataset generator that produces the CSV files the pipeline
//! consumes.

pub mod error;
pub mod generator;
pub mod pipeline;

pub use error::EngineError;
pub use generator::{generate, DatasetSummary, GeneratorConfig};
pub use pipeline::{create_tables, ingest_table, reset_tables, run, TableReport};
