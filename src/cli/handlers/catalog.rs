//! Import, add and remove command handlers.

use anyhow::{Context, Result, bail};
use std::path::Path;
use tracing::info;

use super::{open_store, relearn};
use crate::cli::{AddArgs, ImportArgs, RemoveArgs};
use crate::domain::Product;
use crate::infra::read_catalog;
use crate::store::{ProductStore, StoreError};

/// Result of importing a catalog (for testability).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportResult {
    /// Entries read from the catalog.
    pub read: usize,
    /// Entries that were not already stored.
    pub added: usize,
}

/// Adds products to the store, ignoring names that already exist.
pub fn import_products(store: &mut impl ProductStore, products: &[Product]) -> Result<ImportResult> {
    let added = store
        .add_products(products)
        .with_context(|| "failed to store catalog products")?;
    Ok(ImportResult {
        read: products.len(),
        added,
    })
}

pub fn handle_import(args: &ImportArgs, db_path: &Path, auto_learn: bool) -> Result<()> {
    let products = read_catalog(&args.file)
        .with_context(|| format!("failed to import {}", args.file.display()))?;

    let mut store = open_store(db_path)?;
    let result = import_products(&mut store, &products)?;
    info!(read = result.read, added = result.added, "imported catalog");
    println!(
        "Imported {} product(s), {} already present",
        result.added,
        result.read - result.added
    );

    if auto_learn && !args.no_learn {
        let report = relearn(store)?;
        println!("Learned {} stem(s)", report.stems);
    }

    Ok(())
}

pub fn handle_add(args: &AddArgs, db_path: &Path, auto_learn: bool) -> Result<()> {
    let product = Product::new(args.name.as_str(), args.description.as_str())
        .with_context(|| format!("invalid product name: '{}'", args.name))?;

    let mut store = open_store(db_path)?;
    let stored = match store.insert_product(&product) {
        Ok(stored) => stored,
        Err(StoreError::Conflict { name }) => bail!("a product named '{}' already exists", name),
        Err(e) => return Err(e).with_context(|| "failed to add product"),
    };
    println!("Added {}", stored);

    if auto_learn && !args.no_learn {
        relearn(store)?;
    }

    Ok(())
}

pub fn handle_remove(args: &RemoveArgs, db_path: &Path, auto_learn: bool) -> Result<()> {
    let mut store = open_store(db_path)?;
    let removed = store
        .remove_product(args.id)
        .with_context(|| format!("failed to remove product #{}", args.id))?;

    if !removed {
        bail!("product not found: #{}", args.id);
    }
    println!("Removed product #{}", args.id);

    if auto_learn && !args.no_learn {
        relearn(store)?;
    }

    Ok(())
}
