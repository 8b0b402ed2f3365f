//! Per-table ingestion configuration and row parsing
//!
//! Each table declares, once, the ordered list of columns it ingests and
//! the kind each raw CSV field is converted to. The parameterized insert
//! statement is derived from the column list, so the registry is the
//! single source of truth correlating CSV headers to store columns.

use crate::error::{CoreError, CoreResult};
use csv::StringRecord;
use std::path::{Path, PathBuf};

/// Target type a raw CSV field is converted to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Integer,
    Real,
    /// Identity passthrough, the default for columns without a converter
    Text,
}

impl ColumnKind {
    fn expected(self) -> &'static str {
        match self {
            ColumnKind::Integer => "integer",
            ColumnKind::Real => "real",
            ColumnKind::Text => "text",
        }
    }

    /// Convert one raw field to its typed value
    pub fn convert(self, table: &str, column: &str, raw: &str) -> CoreResult<FieldValue> {
        let conversion_err = || CoreError::Conversion {
            table: table.to_string(),
            column: column.to_string(),
            value: raw.to_string(),
            expected: self.expected(),
        };
        match self {
            ColumnKind::Integer => raw
                .trim()
                .parse::<i64>()
                .map(FieldValue::Integer)
                .map_err(|_| conversion_err()),
            ColumnKind::Real => raw
                .trim()
                .parse::<f64>()
                .map(FieldValue::Real)
                .map_err(|_| conversion_err()),
            ColumnKind::Text => Ok(FieldValue::Text(raw.to_string())),
        }
    }
}

/// A typed column value ready for insertion
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Integer(i64),
    Real(f64),
    Text(String),
}

/// One column of a table's ingestion configuration
#[derive(Debug, Clone, Copy)]
pub struct ColumnSpec {
    pub name: &'static str,
    pub kind: ColumnKind,
}

const fn integer(name: &'static str) -> ColumnSpec {
    ColumnSpec {
        name,
        kind: ColumnKind::Integer,
    }
}

const fn real(name: &'static str) -> ColumnSpec {
    ColumnSpec {
        name,
        kind: ColumnKind::Real,
    }
}

const fn text(name: &'static str) -> ColumnSpec {
    ColumnSpec {
        name,
        kind: ColumnKind::Text,
    }
}

/// Ingestion configuration for one table
#[derive(Debug, Clone, Copy)]
pub struct TableConfig {
    /// Target table name
    pub table: &'static str,

    /// Source CSV file name, resolved against the data directory
    pub csv_file: &'static str,

    /// Ordered target columns with their converters
    pub columns: &'static [ColumnSpec],
}

impl TableConfig {
    /// Parameterized insert statement derived from the column list
    pub fn insert_sql(&self) -> String {
        let column_list: Vec<&str> = self.columns.iter().map(|c| c.name).collect();
        let placeholders: Vec<&str> = self.columns.iter().map(|_| "?").collect();
        format!(
            "INSERT INTO {} ({}) VALUES ({})",
            self.table,
            column_list.join(", "),
            placeholders.join(", ")
        )
    }

    /// Path of this table's CSV file under the data directory
    pub fn csv_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(self.csv_file)
    }

    /// Resolve each configured column to its position in the CSV header.
    ///
    /// Fails with a missing-column error if the header does not declare a
    /// configured column; extra CSV columns are ignored.
    pub fn column_indices(&self, headers: &StringRecord) -> CoreResult<Vec<usize>> {
        self.columns
            .iter()
            .map(|spec| {
                headers
                    .iter()
                    .position(|h| h == spec.name)
                    .ok_or_else(|| CoreError::MissingColumn {
                        table: self.table.to_string(),
                        column: spec.name.to_string(),
                    })
            })
            .collect()
    }

    /// Parse one CSV record into the ordered tuple of typed values.
    ///
    /// `indices` comes from [`TableConfig::column_indices`]. The first
    /// missing field or failed conversion aborts the whole record.
    pub fn parse_record(
        &self,
        indices: &[usize],
        record: &StringRecord,
    ) -> CoreResult<Vec<FieldValue>> {
        let mut values = Vec::with_capacity(self.columns.len());
        for (spec, &idx) in self.columns.iter().zip(indices) {
            let raw = record.get(idx).ok_or_else(|| CoreError::MalformedRow {
                table: self.table.to_string(),
                column: spec.name.to_string(),
                line: record.position().map_or(0, |p| p.line()),
            })?;
            values.push(spec.kind.convert(self.table, spec.name, raw)?);
        }
        Ok(values)
    }
}

const TABLE_CONFIGS: [TableConfig; 5] = [
    TableConfig {
        table: "users",
        csv_file: "users.csv",
        columns: &[
            integer("user_id"),
            text("username"),
            text("email"),
            text("created_at"),
        ],
    },
    TableConfig {
        table: "categories",
        csv_file: "categories.csv",
        columns: &[integer("category_id"), text("category_name")],
    },
    TableConfig {
        table: "products",
        csv_file: "products.csv",
        columns: &[
            integer("product_id"),
            text("product_name"),
            integer("category_id"),
            real("price"),
        ],
    },
    TableConfig {
        table: "orders",
        csv_file: "orders.csv",
        columns: &[
            integer("order_id"),
            integer("user_id"),
            text("order_date"),
            text("status"),
        ],
    },
    TableConfig {
        table: "order_items",
        csv_file: "order_items.csv",
        columns: &[
            integer("item_id"),
            integer("order_id"),
            integer("product_id"),
            integer("quantity"),
        ],
    },
];

/// All ingestion configurations, in dependency order
pub fn table_configs() -> &'static [TableConfig] {
    &TABLE_CONFIGS
}

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;
