//! SQLite-backed product store implementation.

mod connection;
mod repo_impl;

#[cfg(test)]
mod tests;

use rusqlite::Connection;

// ===========================================
// SqliteStore Struct
// ===========================================

/// SQLite-backed product catalog.
///
/// Manages the database connection and provides access to products, stems
/// and their associations.
pub struct SqliteStore {
    pub(crate) conn: Connection,
}
