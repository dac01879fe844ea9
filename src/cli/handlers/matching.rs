//! Match command handler.

use anyhow::{Context, Result};
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::warn;

use super::{open_store, print_json, truncate_str};
use crate::cli::MatchArgs;
use crate::cli::output::{MatchListing, OutputFormat};
use crate::matching::Processor;

/// Gathers shopping-list lines from arguments, `--file`, or `input`.
///
/// Lines are trimmed and blank ones dropped.
pub fn collect_lines(args: &MatchArgs, input: impl BufRead) -> Result<Vec<String>> {
    let raw: Vec<String> = if !args.lines.is_empty() {
        args.lines.clone()
    } else if let Some(path) = &args.file {
        let file = std::fs::File::open(path)
            .with_context(|| format!("failed to open shopping list: {}", path.display()))?;
        BufReader::new(file)
            .lines()
            .collect::<io::Result<_>>()
            .with_context(|| format!("failed to read shopping list: {}", path.display()))?
    } else {
        input
            .lines()
            .collect::<io::Result<_>>()
            .with_context(|| "failed to read shopping list from stdin")?
    };

    Ok(raw
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

pub fn handle_match(args: &MatchArgs, db_path: &Path) -> Result<()> {
    let lines = collect_lines(args, io::stdin().lock())?;
    let store = open_store(db_path)?;
    let processor = Processor::with_defaults(store);

    let matches = processor
        .find_products_for_shopping_list(&lines)
        .with_context(|| "failed to match shopping list")?;

    let skipped = lines.len() - matches.len();
    if skipped > 0 {
        warn!(skipped, "some lines matched no product");
    }

    match args.format {
        OutputFormat::Human => {
            if matches.is_empty() {
                println!("No products matched.");
                return Ok(());
            }

            println!("{:>5}  {:<30}  {}", "Count", "Line", "Product");
            println!(
                "{:>5}  {:<30}  {}",
                "-----", "------------------------------", "-------"
            );
            for found in &matches {
                println!(
                    "{:>5}  {:<30}  {}",
                    found.count,
                    truncate_str(&found.line, 30),
                    found.product
                );
            }
            if skipped > 0 {
                println!();
                println!("{} line(s) without a match", skipped);
            }
        }
        OutputFormat::Json => {
            let listings: Vec<MatchListing> = matches.iter().map(MatchListing::from).collect();
            print_json(listings)?;
        }
    }

    Ok(())
}
