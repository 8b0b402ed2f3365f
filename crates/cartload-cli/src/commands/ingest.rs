//! Ingest command implementation

use anyhow::{Context, Result};
use cartload_core::{table_configs, Config};
use cartload_db::{Database, DuckDbBackend};
use cartload_engine::pipeline;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::cli::{GlobalArgs, IngestArgs};

/// Execute the ingest command
pub async fn execute(args: &IngestArgs, global: &GlobalArgs) -> Result<()> {
    let project_dir = Path::new(&global.project_dir);
    let config =
        Config::load_from_dir(project_dir).context("Failed to load project configuration")?;

    let data_dir = args
        .data_dir
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(|| config.data_dir_absolute(project_dir));

    // Database connection (use --target override if provided)
    let db_path = global.target.as_deref().unwrap_or(&config.database.path);
    let db: Arc<dyn Database> =
        Arc::new(DuckDbBackend::new(db_path).context("Failed to connect to database")?);

    if global.verbose {
        eprintln!(
            "[verbose] Ingesting from {} into {} ({})",
            data_dir.display(),
            db_path,
            db.db_type()
        );
    }

    pipeline::create_tables(db.as_ref()).await?;
    pipeline::reset_tables(db.as_ref()).await?;

    println!("Loading {} tables...\n", table_configs().len());

    let mut total_rows = 0;
    for table_config in table_configs() {
        match pipeline::ingest_table(db.as_ref(), table_config, &data_dir).await {
            Ok(rows) => {
                total_rows += rows;
                println!("  ✓ {} ({} rows)", table_config.table, rows);
            }
            Err(e) => {
                println!("  ✗ {} - {}", table_config.table, e);
                return Err(e).context(format!("Failed to ingest {}", table_config.csv_file));
            }
        }
    }

    println!();
    println!(
        "Ingested {} tables ({} total rows)",
        table_configs().len(),
        total_rows
    );
    Ok(())
}
