//! SQLite-backed product store and its repository trait

mod repository;
mod schema;
mod sqlite;

pub use repository::{ProductStore, StoreError, StoreResult, StoreStats};
pub use schema::{SCHEMA_VERSION, create_schema};
pub use sqlite::SqliteStore;
