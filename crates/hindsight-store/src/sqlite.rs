//! SQLite-backed record store.
//!
//! Stores are opened read-only: Hindsight must never alter the editor's own
//! data, even accidentally. A single connection is shared behind a mutex and
//! every query runs under `spawn_blocking` so store I/O never blocks the
//! async runtime.

use crate::error::StoreError;
use crate::record::RecordStore;
use async_trait::async_trait;
use rusqlite::{Connection, OpenFlags, OptionalExtension, params, params_from_iter};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// A read-only record store over one `state.vscdb` file.
#[derive(Clone)]
pub struct SqliteStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    /// Open an existing store read-only. Fails if the file does not exist.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path: PathBuf = path.into();
        let conn = tokio::task::spawn_blocking(move || {
            Connection::open_with_flags(
                &path,
                OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
            )
            .map_err(|source| StoreError::Open {
                path: path.display().to_string(),
                source,
            })
        })
        .await??;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    async fn with_conn<F, R>(&self, f: F) -> Result<R, StoreError>
    where
        F: FnOnce(&Connection) -> Result<R, rusqlite::Error> + Send + 'static,
        R: Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        let result = tokio::task::spawn_blocking(move || {
            let guard = conn.lock().expect("store connection mutex poisoned");
            f(&guard)
        })
        .await?;
        result.map_err(StoreError::from)
    }
}

#[async_trait]
impl RecordStore for SqliteStore {
    async fn get(&self, table: &str, key: &str) -> Result<Option<String>, StoreError> {
        let sql = format!("SELECT value FROM {table} WHERE [key] = ?1");
        let key = key.to_string();
        self.with_conn(move |conn| {
            conn.query_row(&sql, params![key], |row| row.get::<_, String>(0))
                .optional()
        })
        .await
    }

    async fn get_many(&self, table: &str, keys: &[String]) -> Result<Vec<String>, StoreError> {
        if keys.is_empty() {
            return Ok(Vec::new());
        }
        let placeholders = vec!["?"; keys.len()].join(",");
        let sql = format!("SELECT value FROM {table} WHERE [key] IN ({placeholders})");
        let keys = keys.to_vec();
        self.with_conn(move |conn| {
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt.query_map(params_from_iter(keys.iter()), |row| {
                row.get::<_, String>(0)
            })?;
            rows.collect()
        })
        .await
    }
}
