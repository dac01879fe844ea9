//! Learn command handler.

use anyhow::Result;
use std::path::Path;

use super::{open_store, relearn};

pub fn handle_learn(db_path: &Path) -> Result<()> {
    let store = open_store(db_path)?;
    println!("Learning catalog index...");
    let report = relearn(store)?;
    println!(
        "Indexed {} product(s): {} stem(s), {} link(s)",
        report.products, report.stems, report.associations
    );
    Ok(())
}
