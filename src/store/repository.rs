//! ProductStore trait and result types.

use crate::domain::{Product, ProductId};
use std::path::PathBuf;
use thiserror::Error;

// ===========================================
// StoreError Type
// ===========================================

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Input rejected before reaching the database.
    #[error("invalid input: {0}")]
    Validation(String),

    /// A product without an ID could not be found by name.
    #[error("product cannot be resolved: '{name}' has no ID and no stored row with that name")]
    ProductNotResolved { name: String },

    /// A uniqueness constraint was violated.
    #[error("product already exists: '{name}'")]
    Conflict { name: String },

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// An I/O error occurred.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

// ===========================================
// StoreStats Type
// ===========================================

/// Row counts of the catalog tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreStats {
    pub products: usize,
    pub stems: usize,
    pub associations: usize,
}

// ===========================================
// ProductStore Trait
// ===========================================

/// Repository trait for the product catalog and its persisted stem index.
///
/// Every method is self-contained: no transaction is held open between calls.
pub trait ProductStore {
    /// Returns every product, ordered by ID.
    fn get_products(&self) -> StoreResult<Vec<Product>>;

    /// Retrieves a single product by ID.
    fn get_product(&self, id: ProductId) -> StoreResult<Option<Product>>;

    /// Returns all products associated with the given stem value, ordered by ID.
    fn get_products_for_stem(&self, stem: &str) -> StoreResult<Vec<Product>>;

    /// Inserts products, ignoring names that already exist.
    ///
    /// Returns the number of rows actually inserted.
    fn add_products(&mut self, products: &[Product]) -> StoreResult<usize>;

    /// Inserts a single product and returns it with its assigned ID.
    ///
    /// Fails with [`StoreError::Conflict`] if the name is taken.
    fn insert_product(&mut self, product: &Product) -> StoreResult<Product>;

    /// Inserts stem values, ignoring values that already exist (idempotent).
    fn add_stems(&mut self, values: &[&str]) -> StoreResult<()>;

    /// Associates a product with stems (idempotent).
    ///
    /// Products without an ID are resolved by name; fails with
    /// [`StoreError::ProductNotResolved`] if that lookup finds nothing.
    fn add_conn_p_s(&mut self, product: &Product, stems: &[&str]) -> StoreResult<()>;

    /// Writes each product's package amount and unit.
    fn save_quantities_of_products(&mut self, products: &[Product]) -> StoreResult<()>;

    /// Removes a product by ID (idempotent).
    ///
    /// Returns `true` if a row was deleted.
    fn remove_product(&mut self, id: ProductId) -> StoreResult<bool>;

    /// Returns the stem values associated with a product, sorted.
    fn stems_for_product(&self, id: ProductId) -> StoreResult<Vec<String>>;

    /// Returns row counts of the catalog tables.
    fn stats(&self) -> StoreResult<StoreStats>;
}
