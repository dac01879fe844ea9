//! Command handlers for the CLI.

mod catalog;
mod completions;
mod explain;
mod learn;
mod list;
mod matching;


use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

use crate::cli::output::Output;
use crate::matching::{Processor, SaveReport};
use crate::store::SqliteStore;

// Re-export public items
pub use catalog::{ImportResult, handle_add, handle_import, handle_remove, import_products};
pub use completions::handle_completions;
pub use explain::{explain_text, handle_explain};
pub use learn::handle_learn;
pub use list::{handle_list, handle_show};
pub use matching::{collect_lines, handle_match};

// ===========================================
// Shared Utilities
// ===========================================

/// Opens the catalog database, creating it on first use.
pub(crate) fn open_store(db_path: &Path) -> Result<SqliteStore> {
    SqliteStore::open(db_path)
        .with_context(|| format!("failed to open catalog at {}", db_path.display()))
}

/// Rebuilds the stem index from the catalog and stores it.
pub(crate) fn relearn(store: SqliteStore) -> Result<SaveReport> {
    Processor::with_defaults(store)
        .learn_from_db()
        .with_context(|| "failed to learn catalog index")
}

/// Prints `data` wrapped in `{ "data": ... }` as pretty JSON.
pub(crate) fn print_json<T: Serialize>(data: T) -> Result<()> {
    let output = Output::new(data);
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Truncates a string to a maximum display width, adding ellipsis if needed.
pub(crate) fn truncate_str(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_width.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}
