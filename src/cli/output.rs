//! Output format types for CLI commands.

use clap::ValueEnum;
use serde::Serialize;

use crate::domain::{Product, Quantity};
use crate::matching::{CountTier, ShoppingListMatch};

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// A single product in listing output.
#[derive(Debug, Serialize)]
pub struct ProductListing {
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
    pub amount: f64,
    pub unit: String,
}

impl From<&Product> for ProductListing {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id().map(|id| id.get()),
            name: product.name().to_string(),
            description: product.description().to_string(),
            amount: product.amount(),
            unit: product.unit().to_string(),
        }
    }
}

/// A product with its stored stems.
#[derive(Debug, Serialize)]
pub struct ProductDetail {
    #[serde(flatten)]
    pub product: ProductListing,
    pub stems: Vec<String>,
}

/// A resolved shopping-list line.
#[derive(Debug, Serialize)]
pub struct MatchListing {
    pub line: String,
    pub product: ProductListing,
    pub count: u32,
    pub tier: CountTier,
}

impl From<&ShoppingListMatch> for MatchListing {
    fn from(found: &ShoppingListMatch) -> Self {
        Self {
            line: found.line.clone(),
            product: ProductListing::from(&found.product),
            count: found.count,
            tier: found.tier,
        }
    }
}

/// What the matcher sees in a piece of text.
#[derive(Debug, Serialize)]
pub struct Explanation {
    pub text: String,
    pub stems: Vec<String>,
    pub quantities: Vec<Quantity>,
}

/// Formats a package size for human output, e.g. `2 pair` or `1`.
pub(crate) fn format_size(product: &Product) -> String {
    product.quantity().to_string()
}
