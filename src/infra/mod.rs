//! File I/O: catalog import (JSON and CSV)

mod catalog;

pub use catalog::{CatalogError, parse_catalog, parse_catalog_csv, read_catalog};
