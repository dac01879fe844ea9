//! List and Show command handlers.

use anyhow::{Context, Result, bail};
use std::path::Path;

use super::{open_store, print_json, truncate_str};
use crate::cli::output::{OutputFormat, ProductDetail, ProductListing, format_size};
use crate::cli::{ListArgs, ShowArgs};
use crate::store::ProductStore;

pub fn handle_list(args: &ListArgs, db_path: &Path) -> Result<()> {
    let store = open_store(db_path)?;
    let products = store
        .get_products()
        .with_context(|| "failed to list products")?;

    match args.format {
        OutputFormat::Human => {
            if products.is_empty() {
                println!("No products found.");
                return Ok(());
            }

            println!("{:>6}  {:<40}  {:>16}", "ID", "Name", "Package");
            println!(
                "{:>6}  {:<40}  {:>16}",
                "------", "----------------------------------------", "----------------"
            );
            for product in &products {
                let id = product.id().map(|id| id.to_string()).unwrap_or_default();
                println!(
                    "{:>6}  {:<40}  {:>16}",
                    id,
                    truncate_str(product.name(), 40),
                    truncate_str(&format_size(product), 16)
                );
            }
            println!();
            println!("{} product(s)", products.len());
        }
        OutputFormat::Json => {
            let listings: Vec<ProductListing> = products.iter().map(ProductListing::from).collect();
            print_json(listings)?;
        }
    }

    Ok(())
}

pub fn handle_show(args: &ShowArgs, db_path: &Path) -> Result<()> {
    let store = open_store(db_path)?;
    let Some(product) = store
        .get_product(args.id)
        .with_context(|| format!("failed to load product #{}", args.id))?
    else {
        bail!("product not found: #{}", args.id);
    };
    let stems = store
        .stems_for_product(args.id)
        .with_context(|| format!("failed to load stems of product #{}", args.id))?;

    match args.format {
        OutputFormat::Human => {
            println!("# {}", product.name());
            println!();
            if !product.description().is_empty() {
                println!("{}", product.description());
                println!();
            }
            println!("ID: {}  Package: {}", args.id, format_size(&product));
            if stems.is_empty() {
                println!("Stems: (not learned)");
            } else {
                println!("Stems: {}", stems.join(", "));
            }
        }
        OutputFormat::Json => {
            print_json(ProductDetail {
                product: ProductListing::from(&product),
                stems,
            })?;
        }
    }

    Ok(())
}
