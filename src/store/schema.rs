//! SQLite schema creation for the product catalog.

use rusqlite::Connection;

/// Current schema version recorded in `schema_version`.
pub const SCHEMA_VERSION: i64 = 1;

/// Creates the database schema for the product catalog.
///
/// It is idempotent - calling it multiple times is safe.
///
/// # Tables Created
/// - `products` - Catalog entries with their package size
/// - `stems` - Unique normalized word stems
/// - `product_stems` - Many-to-many junction for products and stems
/// - `schema_version` - Schema version tracking
pub fn create_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;

    // ===========================================
    // Products Table
    // ===========================================
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS products (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE,
            description TEXT NOT NULL DEFAULT '',
            amount REAL NOT NULL DEFAULT 1 CHECK (amount > 0),
            unit TEXT NOT NULL DEFAULT 'dimensionless'
        );",
    )?;

    // ===========================================
    // Stems Table
    // ===========================================
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS stems (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            value TEXT NOT NULL UNIQUE
        );",
    )?;

    // ===========================================
    // Product-Stems Junction
    // ===========================================
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS product_stems (
            product_id INTEGER NOT NULL REFERENCES products(id) ON DELETE CASCADE,
            stem_id INTEGER NOT NULL REFERENCES stems(id) ON DELETE CASCADE,
            PRIMARY KEY (product_id, stem_id)
        );",
    )?;

    // ===========================================
    // Indexes
    // ===========================================
    conn.execute_batch(
        "CREATE INDEX IF NOT EXISTS idx_product_stems_stem ON product_stems(stem_id);",
    )?;

    // ===========================================
    // Schema Version Table
    // ===========================================
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL
        );",
    )?;

    conn.execute(
        "INSERT OR IGNORE INTO schema_version (version, applied_at) VALUES (?1, datetime('now'))",
        [SCHEMA_VERSION],
    )?;

    Ok(())
}
