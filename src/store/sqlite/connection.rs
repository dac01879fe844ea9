//! Opening catalog databases and running batched writes.

use super::SqliteStore;
use crate::store::{StoreError, StoreResult, create_schema};
use rusqlite::{Connection, Transaction};
use std::fs;
use std::path::Path;

/// Enables cascading deletes of product-stem links and creates missing tables.
fn prepare(conn: Connection) -> StoreResult<SqliteStore> {
    conn.pragma_update(None, "foreign_keys", true)?;
    create_schema(&conn)?;
    Ok(SqliteStore { conn })
}

impl SqliteStore {
    /// Opens a throwaway catalog that lives only as long as the store.
    pub fn open_in_memory() -> StoreResult<Self> {
        prepare(Connection::open_in_memory()?)
    }

    /// Opens the catalog at `path`, creating the file and its directory on first use.
    pub fn open(path: &Path) -> StoreResult<Self> {
        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|source| StoreError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
        }
        prepare(Connection::open(path)?)
    }

    /// Runs `batch` inside one transaction.
    ///
    /// Commits when `batch` succeeds. On error nothing from the batch is kept:
    /// the transaction is dropped uncommitted and SQLite rolls it back.
    pub(super) fn write<T>(
        &mut self,
        batch: impl FnOnce(&Transaction<'_>) -> StoreResult<T>,
    ) -> StoreResult<T> {
        let tx = self.conn.transaction()?;
        let out = batch(&tx)?;
        tx.commit()?;
        Ok(out)
    }
}
