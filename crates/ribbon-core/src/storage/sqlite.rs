//! SQLite storage backend.
//!
//! The store is a single `kv` table in a SQLite file. Every write is
//! committed before the call returns; batches run inside one transaction.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use rusqlite::{params, Connection, OptionalExtension};

use crate::error::{Result, RibbonError};

use super::traits::{KeyValueStore, StorageOp};

const SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS kv (
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL
    );
"#;

const UPSERT: &str = "INSERT INTO kv (key, value) VALUES (?1, ?2)
     ON CONFLICT(key) DO UPDATE SET value = excluded.value";

/// SQLite-backed `KeyValueStore`.
pub struct SqliteStore {
    path: Option<PathBuf>,
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Create a new store file at `path`.
    ///
    /// # Errors
    ///
    /// Returns `RibbonError::Storage` if the file already exists or cannot be created.
    pub fn create(path: &Path) -> Result<Self> {
        if path.exists() {
            return Err(RibbonError::Storage(format!(
                "Store file already exists: {}",
                path.display()
            )));
        }
        Self::open(path)
    }

    /// Open the store at `path`, creating the file and schema if missing.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    RibbonError::Storage(format!(
                        "Failed to create store directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }
        let conn = Connection::open(path)?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            path: Some(path.to_path_buf()),
            conn: Mutex::new(conn),
        })
    }

    /// Open a private in-memory database.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            path: None,
            conn: Mutex::new(conn),
        })
    }

    /// Path of the backing file, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Lock the database connection, returning an error if the mutex is poisoned.
    fn lock_conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| RibbonError::Storage("SQLite connection poisoned".to_string()))
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let conn = self.lock_conn()?;
        let value = conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get::<_, String>(0)
            })
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let conn = self.lock_conn()?;
        conn.execute(UPSERT, params![key, value])?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let conn = self.lock_conn()?;
        conn.execute("DELETE FROM kv WHERE key = ?1", params![key])?;
        Ok(())
    }

    fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>> {
        let conn = self.lock_conn()?;
        let mut stmt = conn.prepare(
            "SELECT key FROM kv WHERE substr(key, 1, length(?1)) = ?1 ORDER BY key",
        )?;
        let keys = stmt
            .query_map(params![prefix], |row| row.get::<_, String>(0))?
            .collect::<std::result::Result<Vec<String>, _>>()?;
        Ok(keys)
    }

    fn apply(&self, ops: &[StorageOp]) -> Result<()> {
        let mut conn = self.lock_conn()?;
        let tx = conn.transaction()?;
        for op in ops {
            match op {
                StorageOp::Set { key, value } => {
                    tx.execute(UPSERT, params![key, value])?;
                }
                StorageOp::Remove { key } => {
                    tx.execute("DELETE FROM kv WHERE key = ?1", params![key])?;
                }
            }
        }
        tx.commit()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("progress.db");

        {
            let store = SqliteStore::create(&path).unwrap();
            store.set("setup", "{\"setupCompleted\":true}").unwrap();
            store.set("setup", "{\"setupCompleted\":false}").unwrap();
        }

        let store = SqliteStore::open(&path).unwrap();
        assert_eq!(
            store.get("setup").unwrap().as_deref(),
            Some("{\"setupCompleted\":false}")
        );
        assert_eq!(store.path(), Some(path.as_path()));
    }

    #[test]
    fn test_create_refuses_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("progress.db");
        SqliteStore::create(&path).unwrap();

        assert!(SqliteStore::create(&path).is_err());
    }

    #[test]
    fn test_keys_with_prefix() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.set("progress:zubat", "[]").unwrap();
        store.set("progress:abra", "[]").unwrap();
        store.set("my_pokemon_list", "[]").unwrap();

        let keys = store.keys_with_prefix("progress:").unwrap();
        assert_eq!(keys, vec!["progress:abra", "progress:zubat"]);
    }

    #[test]
    fn test_apply_is_transactional() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.set("progress:a", "[\"x\"]").unwrap();

        store
            .apply(&[
                StorageOp::remove("progress:a"),
                StorageOp::set("progress:b", "[]"),
                StorageOp::set("my_pokemon_list", "[]"),
            ])
            .unwrap();

        assert_eq!(store.get("progress:a").unwrap(), None);
        assert_eq!(store.get("progress:b").unwrap().as_deref(), Some("[]"));
        assert_eq!(store.get("my_pokemon_list").unwrap().as_deref(), Some("[]"));
    }
}
