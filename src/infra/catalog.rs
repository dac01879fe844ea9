//! Catalog loading from JSON documents or `name,description` CSV files.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::Product;

/// Errors while reading a catalog file.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid catalog JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("invalid catalog CSV: {0}")]
    InvalidCsv(#[from] csv::Error),

    #[error("catalog entry {position} has an empty name")]
    EmptyName { position: usize },
}

#[derive(Debug, Deserialize)]
struct CatalogEntry {
    name: String,
    #[serde(default)]
    description: String,
}

/// Either a bare array of entries or `{ "products": [...] }`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    List(Vec<CatalogEntry>),
    Wrapped { products: Vec<CatalogEntry> },
}

impl CatalogDocument {
    fn into_entries(self) -> Vec<CatalogEntry> {
        match self {
            Self::List(entries) => entries,
            Self::Wrapped { products } => products,
        }
    }
}

fn entries_to_products(
    entries: impl IntoIterator<Item = CatalogEntry>,
) -> Result<Vec<Product>, CatalogError> {
    entries
        .into_iter()
        .enumerate()
        .map(|(position, entry)| {
            Product::new(entry.name, entry.description)
                .map_err(|_| CatalogError::EmptyName { position })
        })
        .collect()
}

/// Parses catalog JSON into unsaved products, in file order.
///
/// # Errors
///
/// Returns `CatalogError::InvalidJson` for malformed documents and
/// `CatalogError::EmptyName` (with the zero-based entry position) for
/// entries whose name is blank.
pub fn parse_catalog(json: &str) -> Result<Vec<Product>, CatalogError> {
    let document: CatalogDocument = serde_json::from_str(json)?;
    entries_to_products(document.into_entries())
}

/// Parses `name,description` CSV rows into unsaved products, in file order.
///
/// The description column is optional and a leading `name,description`
/// header row is skipped. Fields may be quoted to hold commas.
pub fn parse_catalog_csv(text: &str) -> Result<Vec<Product>, CatalogError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let mut entries = Vec::new();
    for record in reader.records() {
        let record = record?;
        let name = record.get(0).unwrap_or_default();
        let description = record.get(1).unwrap_or_default();
        if entries.is_empty()
            && name.eq_ignore_ascii_case("name")
            && description.eq_ignore_ascii_case("description")
        {
            continue;
        }
        entries.push(CatalogEntry {
            name: name.to_string(),
            description: description.to_string(),
        });
    }
    entries_to_products(entries)
}

/// Reads a catalog file, parsing `.csv` files as CSV and anything else as JSON.
pub fn read_catalog(path: &Path) -> Result<Vec<Product>, CatalogError> {
    let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let is_csv = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    if is_csv {
        parse_catalog_csv(&contents)
    } else {
        parse_catalog(&contents)
    }
}
