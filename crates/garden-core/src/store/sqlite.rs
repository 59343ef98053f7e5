//! SQLite backend.
//!
//! The payload lives in a small key/value table, one row per stored
//! collection, the same shape as the browser storage the plan format was
//! designed around.

use std::path::{Path, PathBuf};

use rusqlite::{params, Connection, OptionalExtension};

use super::backend::PlanBackend;
use crate::{
    error::{DatabaseResultExt, GardenError, Result},
    models::{format_timestamp, now_millis},
};

/// Storage key of the plan payload.
pub const PLANS_KEY: &str = "garden-plans";

const SELECT_PAYLOAD_SQL: &str = "SELECT value FROM storage WHERE key = ?1";
const UPSERT_PAYLOAD_SQL: &str = "INSERT INTO storage (key, value, updated_at) VALUES (?1, ?2, ?3) \
     ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";

/// Database-backed payload storage.
pub struct SqliteBackend {
    connection: Connection,
    location: Option<PathBuf>,
}

impl SqliteBackend {
    /// Opens (or creates) the database at `path` and initializes the schema.
    ///
    /// # Errors
    ///
    /// Returns `GardenError::FileSystem` if the parent directory cannot be
    /// created, `GardenError::Database` if opening or schema setup fails.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| GardenError::file_system(parent, e))?;
        }

        let connection = Connection::open(path).db_context("Failed to open database connection")?;
        let backend = Self {
            connection,
            location: Some(path.to_path_buf()),
        };
        backend.initialize_schema()?;
        Ok(backend)
    }

    /// Opens a private in-memory database.
    ///
    /// # Errors
    ///
    /// Returns `GardenError::Database` if schema setup fails.
    pub fn open_in_memory() -> Result<Self> {
        let connection =
            Connection::open_in_memory().db_context("Failed to open in-memory database")?;
        let backend = Self {
            connection,
            location: None,
        };
        backend.initialize_schema()?;
        Ok(backend)
    }

    /// Initializes the database schema using the embedded SQL file.
    fn initialize_schema(&self) -> Result<()> {
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        self.apply_migrations()
    }

    /// Apply migrations for databases created before `updated_at` existed.
    fn apply_migrations(&self) -> Result<()> {
        let has_updated_at: bool = self
            .connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('storage') WHERE name = 'updated_at'",
                [],
                |row| row.get(0),
            )
            .map(|count: i64| count > 0)
            .db_context("Failed to inspect storage table")?;

        if !has_updated_at {
            self.connection
                .execute(
                    "ALTER TABLE storage ADD COLUMN updated_at TEXT NOT NULL DEFAULT ''",
                    [],
                )
                .db_context("Failed to add updated_at column to storage table")?;
        }

        Ok(())
    }
}

impl PlanBackend for SqliteBackend {
    fn read_all(&self) -> Result<Option<Vec<u8>>> {
        self.connection
            .query_row(SELECT_PAYLOAD_SQL, params![PLANS_KEY], |row| {
                row.get::<_, Vec<u8>>(0)
            })
            .optional()
            .db_context("Failed to read stored plans")
    }

    fn write_all(&self, bytes: &[u8]) -> Result<()> {
        let now = format_timestamp(&now_millis());
        self.connection
            .execute(UPSERT_PAYLOAD_SQL, params![PLANS_KEY, bytes, now])
            .db_context("Failed to write stored plans")?;
        Ok(())
    }

    fn describe(&self) -> String {
        match &self.location {
            Some(path) => path.display().to_string(),
            None => ":memory:".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_empty_database_reads_as_absent() {
        let backend = SqliteBackend::open_in_memory().unwrap();
        assert!(backend.read_all().unwrap().is_none());
    }

    #[test]
    fn test_upsert_replaces_payload() {
        let backend = SqliteBackend::open_in_memory().unwrap();
        backend.write_all(b"[]").unwrap();
        backend.write_all(b"[{}]").unwrap();

        assert_eq!(backend.read_all().unwrap().as_deref(), Some(&b"[{}]"[..]));
        let rows: i64 = backend
            .connection
            .query_row("SELECT COUNT(*) FROM storage", [], |row| row.get(0))
            .unwrap();
        assert_eq!(rows, 1);
    }

    #[test]
    fn test_migrates_table_without_updated_at() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("old.db");
        {
            let conn = Connection::open(&path).unwrap();
            conn.execute_batch(
                "CREATE TABLE storage (key TEXT PRIMARY KEY NOT NULL, value BLOB NOT NULL);",
            )
            .unwrap();
        }

        let backend = SqliteBackend::open(&path).unwrap();
        backend.write_all(b"[]").unwrap();
        assert_eq!(backend.read_all().unwrap().as_deref(), Some(&b"[]"[..]));
    }

    #[test]
    fn test_migrations_are_idempotent() {
        let backend = SqliteBackend::open_in_memory().unwrap();
        backend.apply_migrations().unwrap();
        backend.apply_migrations().unwrap();

        let columns: i64 = backend
            .connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('storage') WHERE name = 'updated_at'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(columns, 1);
    }

    #[test]
    fn test_payload_survives_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("garden.db");

        SqliteBackend::open(&path).unwrap().write_all(b"[1,2]").unwrap();
        let reopened = SqliteBackend::open(&path).unwrap();
        assert_eq!(reopened.read_all().unwrap().as_deref(), Some(&b"[1,2]"[..]));
        assert_eq!(reopened.describe(), path.display().to_string());
    }
}
