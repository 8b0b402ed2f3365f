//! Configuration types and parsing for cartload.yml

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main project configuration from cartload.yml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Project name
    pub name: String,

    /// Project version
    #[serde(default = "default_version")]
    pub version: String,

    /// Directory containing the CSV dataset, relative to the project root
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    /// Database connection configuration
    #[serde(default)]
    pub database: DatabaseConfig,
}

/// Database connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    /// Path to the database file, or ":memory:"
    #[serde(default = "default_db_path")]
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

fn default_version() -> String {
    "0.1.0".to_string()
}

fn default_data_dir() -> String {
    "data".to_string()
}

fn default_db_path() -> String {
    "./cartload.duckdb".to_string()
}

impl Config {
    /// Name of the config file looked up in the project directory
    pub const FILE_NAME: &'static str = "cartload.yml";

    /// Load configuration from an explicit file path
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }
        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from `cartload.yml` in the given project directory
    pub fn load_from_dir(dir: &Path) -> CoreResult<Self> {
        Self::load(&dir.join(Self::FILE_NAME))
    }

    /// Absolute path of the CSV data directory
    pub fn data_dir_absolute(&self, root: &Path) -> PathBuf {
        root.join(&self.data_dir)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
