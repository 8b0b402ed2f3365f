//! Error types for cartload-core

use thiserror::Error;

/// Core error type for Cartload
#[derive(Error, Debug)]
pub enum CoreError {
    /// E001: Configuration file not found
    #[error("[E001] Config file not found: {path}")]
    ConfigNotFound { path: String },

    /// E002: Required CSV file is absent
    #[error("[E002] Required CSV file not found: {path}")]
    MissingCsv { path: String },

    /// E003: CSV header does not declare a configured column
    #[error("[E003] CSV for table '{table}' is missing column '{column}' in its header")]
    MissingColumn { table: String, column: String },

    /// E004: CSV record is shorter than the header
    #[error("[E004] Row {line} for table '{table}' has no value for column '{column}'")]
    MalformedRow {
        table: String,
        column: String,
        line: u64,
    },

    /// E005: Column value cannot be converted to its declared type
    #[error("[E005] Invalid value '{value}' for {table}.{column}: expected {expected}")]
    Conversion {
        table: String,
        column: String,
        value: String,
        expected: &'static str,
    },

    /// E006: CSV read or write error
    #[error("[E006] CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// E007: IO error
    #[error("[E007] IO error: {0}")]
    Io(#[from] std::io::Error),

    /// E008: IO error with file path context
    #[error("[E008] Failed to read '{path}': {source}")]
    IoWithPath {
        path: String,
        source: std::io::Error,
    },

    /// E009: Config parse error
    #[error("[E009] Failed to parse config: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// E010: Invalid configuration value
    #[error("[E010] Invalid config: {message}")]
    ConfigInvalid { message: String },
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
