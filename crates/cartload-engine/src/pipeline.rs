//! Ingestion pipeline: schema creation, table reset, and CSV ingestion
//!
//! All operations run sequentially over the one connection owned by the
//! caller. Any failure is terminal for the run; nothing retries.

use crate::error::EngineError;
use cartload_core::table::{table_configs, FieldValue, TableConfig};
use cartload_core::{table_definitions, CoreError, CoreResult, RESET_ORDER};
use cartload_db::Database;
use std::path::Path;

/// Rows loaded into one table
#[derive(Debug, Clone)]
pub struct TableReport {
    pub table: &'static str,
    pub rows: usize,
}

/// Create the five tables if they do not exist, in dependency order.
///
/// Existing tables are left untouched; a store-level conflict with an
/// incompatible schema surfaces as an error and aborts the run.
pub async fn create_tables(db: &dyn Database) -> Result<(), EngineError> {
    for def in table_definitions() {
        db.execute_batch(def.ddl)
            .await
            .map_err(|e| EngineError::Schema {
                table: def.name.to_string(),
                source: e,
            })?;
    }
    Ok(())
}

/// Delete all rows from all tables, children before parents.
///
/// Idempotent; table structure is preserved.
pub async fn reset_tables(db: &dyn Database) -> Result<(), EngineError> {
    for table in RESET_ORDER {
        db.execute(&format!("DELETE FROM {}", table))
            .await
            .map_err(|e| EngineError::Reset {
                table: table.to_string(),
                source: e,
            })?;
    }
    Ok(())
}

/// Load one table from its CSV file.
///
/// The CSV must exist (checked before any store access) and its header
/// must cover the configured columns. The parsed batch commits as a
/// whole or not at all. Returns the number of rows loaded.
pub async fn ingest_table(
    db: &dyn Database,
    config: &TableConfig,
    data_dir: &Path,
) -> Result<usize, EngineError> {
    let path = config.csv_path(data_dir);
    if !path.exists() {
        return Err(EngineError::IngestCsv {
            file: config.csv_file.to_string(),
            source: CoreError::MissingCsv {
                path: path.display().to_string(),
            },
        });
    }

    let rows = read_rows(config, &path).map_err(|e| EngineError::IngestCsv {
        file: config.csv_file.to_string(),
        source: e,
    })?;

    let inserted = db
        .insert_rows(&config.insert_sql(), &rows)
        .await
        .map_err(|e| EngineError::IngestDb {
            table: config.table.to_string(),
            file: config.csv_file.to_string(),
            source: e,
        })?;

    log::debug!("ingested {} rows into {}", inserted, config.table);
    Ok(inserted)
}

fn read_rows(config: &TableConfig, path: &Path) -> CoreResult<Vec<Vec<FieldValue>>> {
    // Flexible mode: a record shorter than the header must surface as a
    // per-row malformed-row error naming the column, not a reader error.
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;
    let headers = reader.headers()?.clone();
    let indices = config.column_indices(&headers)?;

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        rows.push(config.parse_record(&indices, &record)?);
    }
    Ok(rows)
}

/// Run the whole ingestion: create tables, reset all, then ingest the
/// five tables in dependency order.
///
/// Stops at the first failing table; tables after it are never
/// attempted. Returns per-table row counts on success.
pub async fn run(db: &dyn Database, data_dir: &Path) -> Result<Vec<TableReport>, EngineError> {
    create_tables(db).await?;
    reset_tables(db).await?;

    let mut reports = Vec::with_capacity(table_configs().len());
    for config in table_configs() {
        match ingest_table(db, config, data_dir).await {
            Ok(rows) => reports.push(TableReport {
                table: config.table,
                rows,
            }),
            Err(e) => {
                log::error!("Failed to ingest {}: {}", config.csv_file, e);
                return Err(e);
            }
        }
    }
    Ok(reports)
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod pipeline_test;
