//! DuckDB database backend implementation

use crate::error::{DbError, DbResult};
use crate::traits::Database;
use async_trait::async_trait;
use cartload_core::FieldValue;
use duckdb::types::Value;
use duckdb::{params_from_iter, Connection};
use std::path::Path;
use std::sync::Mutex;

/// DuckDB database backend
///
/// One backend value owns the one connection for the whole run; the
/// connection is released when the backend is dropped, on every exit path.
pub struct DuckDbBackend {
    conn: Mutex<Connection>,
}

impl DuckDbBackend {
    /// Create a new in-memory DuckDB connection
    pub fn in_memory() -> DbResult<Self> {
        let conn =
            Connection::open_in_memory().map_err(|e| DbError::ConnectionError(e.to_string()))?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Create a new DuckDB connection from a file path
    pub fn from_path(path: &Path) -> DbResult<Self> {
        let conn = Connection::open(path).map_err(|e| DbError::ConnectionError(e.to_string()))?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Create from path string (handles :memory: special case)
    pub fn new(path: &str) -> DbResult<Self> {
        if path == ":memory:" {
            Self::in_memory()
        } else {
            Self::from_path(Path::new(path))
        }
    }

    /// Execute SQL synchronously
    fn execute_sync(&self, sql: &str) -> DbResult<usize> {
        let conn = self.conn.lock().unwrap();
        conn.execute(sql, []).map_err(DbError::from)
    }

    /// Execute batch SQL synchronously
    fn execute_batch_sync(&self, sql: &str) -> DbResult<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute_batch(sql).map_err(DbError::from)
    }

    /// Insert rows synchronously inside one transaction
    fn insert_rows_sync(&self, sql: &str, rows: &[Vec<FieldValue>]) -> DbResult<usize> {
        let conn = self.conn.lock().unwrap();
        conn.execute_batch("BEGIN TRANSACTION;")
            .map_err(DbError::from)?;

        let inserted = (|| -> DbResult<usize> {
            let mut stmt = conn.prepare(sql)?;
            for row in rows {
                stmt.execute(params_from_iter(row.iter().map(db_value)))?;
            }
            Ok(rows.len())
        })();

        match inserted {
            Ok(count) => {
                conn.execute_batch("COMMIT;").map_err(DbError::from)?;
                Ok(count)
            }
            Err(e) => {
                let _ = conn.execute_batch("ROLLBACK;");
                Err(e)
            }
        }
    }

    /// Query count synchronously
    fn query_count_sync(&self, sql: &str) -> DbResult<usize> {
        let conn = self.conn.lock().unwrap();
        let count: i64 = conn
            .query_row(&format!("SELECT COUNT(*) FROM ({})", sql), [], |row| {
                row.get(0)
            })
            .map_err(DbError::from)?;
        Ok(count as usize)
    }

    /// Query sample rows synchronously
    fn query_sample_rows_sync(&self, sql: &str, limit: usize) -> DbResult<Vec<String>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn
            .prepare(&format!("SELECT * FROM ({}) LIMIT {}", sql, limit))
            .map_err(DbError::from)?;

        let mut out = Vec::new();
        let mut rows = stmt.query([]).map_err(DbError::from)?;
        while let Some(row) = rows.next().map_err(DbError::from)? {
            let columns = row.as_ref().column_count();
            let mut cells = Vec::with_capacity(columns);
            for idx in 0..columns {
                let value: Value = row.get(idx).map_err(DbError::from)?;
                cells.push(format_value(&value));
            }
            out.push(cells.join(","));
        }
        Ok(out)
    }

    /// Check if a table exists synchronously
    fn table_exists_sync(&self, name: &str) -> DbResult<bool> {
        let conn = self.conn.lock().unwrap();
        let sql = format!(
            "SELECT COUNT(*) FROM information_schema.tables WHERE table_schema = 'main' AND table_name = '{}'",
            name
        );
        let count: i64 = conn
            .query_row(&sql, [], |row| row.get(0))
            .map_err(DbError::from)?;
        Ok(count > 0)
    }
}

/// Convert a typed field to a DuckDB parameter value
fn db_value(value: &FieldValue) -> Value {
    match value {
        FieldValue::Integer(i) => Value::BigInt(*i),
        FieldValue::Real(f) => Value::Double(*f),
        FieldValue::Text(s) => Value::Text(s.clone()),
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "NULL".to_string(),
        Value::Boolean(b) => b.to_string(),
        Value::TinyInt(i) => i.to_string(),
        Value::SmallInt(i) => i.to_string(),
        Value::Int(i) => i.to_string(),
        Value::BigInt(i) => i.to_string(),
        Value::Float(f) => f.to_string(),
        Value::Double(f) => f.to_string(),
        Value::Text(s) => s.clone(),
        other => format!("{:?}", other),
    }
}

#[async_trait]
impl Database for DuckDbBackend {
    async fn execute(&self, sql: &str) -> DbResult<usize> {
        self.execute_sync(sql)
    }

    async fn execute_batch(&self, sql: &str) -> DbResult<()> {
        self.execute_batch_sync(sql)
    }

    async fn insert_rows(&self, sql: &str, rows: &[Vec<FieldValue>]) -> DbResult<usize> {
        self.insert_rows_sync(sql, rows)
    }

    async fn query_count(&self, sql: &str) -> DbResult<usize> {
        self.query_count_sync(sql)
    }

    async fn query_sample_rows(&self, sql: &str, limit: usize) -> DbResult<Vec<String>> {
        self.query_sample_rows_sync(sql, limit)
    }

    async fn table_exists(&self, name: &str) -> DbResult<bool> {
        self.table_exists_sync(name)
    }

    fn db_type(&self) -> &'static str {
        "duckdb"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory() {
        let db = DuckDbBackend::in_memory().unwrap();
        assert_eq!(db.db_type(), "duckdb");
    }

    #[tokio::test]
    async fn test_execute_batch_and_table_exists() {
        let db = DuckDbBackend::in_memory().unwrap();
        db.execute_batch("CREATE TABLE t1 (id INTEGER); CREATE TABLE t2 (id INTEGER);")
            .await
            .unwrap();

        assert!(db.table_exists("t1").await.unwrap());
        assert!(db.table_exists("t2").await.unwrap());
        assert!(!db.table_exists("nonexistent").await.unwrap());
    }

    #[tokio::test]
    async fn test_insert_rows_commits_batch() {
        let db = DuckDbBackend::in_memory().unwrap();
        db.execute_batch("CREATE TABLE items (id INTEGER PRIMARY KEY, label TEXT, weight DOUBLE)")
            .await
            .unwrap();

        let rows = vec![
            vec![
                FieldValue::Integer(1),
                FieldValue::Text("bolt".to_string()),
                FieldValue::Real(0.25),
            ],
            vec![
                FieldValue::Integer(2),
                FieldValue::Text("nut".to_string()),
                FieldValue::Real(0.1),
            ],
        ];
        let inserted = db
            .insert_rows("INSERT INTO items (id, label, weight) VALUES (?, ?, ?)", &rows)
            .await
            .unwrap();

        assert_eq!(inserted, 2);
        assert_eq!(db.query_count("SELECT * FROM items").await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_insert_rows_rolls_back_on_constraint_error() {
        let db = DuckDbBackend::in_memory().unwrap();
        db.execute_batch(
            "CREATE TABLE parents (id INTEGER PRIMARY KEY);
             CREATE TABLE children (id INTEGER PRIMARY KEY, parent_id INTEGER,
                 FOREIGN KEY (parent_id) REFERENCES parents(id));
             INSERT INTO parents VALUES (1);",
        )
        .await
        .unwrap();

        let rows = vec![
            vec![FieldValue::Integer(1), FieldValue::Integer(1)],
            vec![FieldValue::Integer(2), FieldValue::Integer(999)],
        ];
        let err = db
            .insert_rows("INSERT INTO children (id, parent_id) VALUES (?, ?)", &rows)
            .await
            .unwrap_err();

        assert!(matches!(err, DbError::ConstraintViolation(_)));
        // The whole batch rolled back, including the valid first row
        assert_eq!(db.query_count("SELECT * FROM children").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_query_sample_rows() {
        let db = DuckDbBackend::in_memory().unwrap();
        db.execute_batch(
            "CREATE TABLE pets (id INTEGER, name TEXT);
             INSERT INTO pets VALUES (1, 'rex'), (2, 'milo'), (3, 'pip');",
        )
        .await
        .unwrap();

        let rows = db
            .query_sample_rows("SELECT * FROM pets ORDER BY id", 2)
            .await
            .unwrap();
        assert_eq!(rows, vec!["1,rex".to_string(), "2,milo".to_string()]);
    }

    #[tokio::test]
    async fn test_from_path_persists() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("test.duckdb");

        {
            let db = DuckDbBackend::from_path(&path).unwrap();
            db.execute_batch("CREATE TABLE marker (id INTEGER); INSERT INTO marker VALUES (7);")
                .await
                .unwrap();
        }

        let reopened = DuckDbBackend::from_path(&path).unwrap();
        assert_eq!(
            reopened.query_count("SELECT * FROM marker").await.unwrap(),
            1
        );
    }
}
