//! Quantity extraction for products and shopping-list lines.

use super::quantity::{QuantityParser, UnitScanner};
use crate::domain::{Product, Quantity, is_non_scalable};

/// Values at or below this are treated as parser noise.
pub const NOISE_THRESHOLD: f64 = 0.01;

/// Picks package sizes for products and quantities for query lines.
pub struct QuantityExtractor {
    parser: Box<dyn QuantityParser + Send + Sync>,
}

impl QuantityExtractor {
    /// Creates an extractor backed by the built-in [`UnitScanner`].
    pub fn new() -> Self {
        Self::with_parser(UnitScanner::new())
    }

    /// Creates an extractor backed by a custom parser.
    pub fn with_parser(parser: impl QuantityParser + Send + Sync + 'static) -> Self {
        Self {
            parser: Box::new(parser),
        }
    }

    /// Finds the package size of a product.
    ///
    /// Scans the name first, then the description, and returns the first
    /// candidate with a scalable unit and a value above [`NOISE_THRESHOLD`].
    /// Falls back to one dimensionless item.
    pub fn find_quantity_for_product(&self, product: &Product) -> Quantity {
        [product.name(), product.description()]
            .into_iter()
            .flat_map(|text| self.parser.parse(text))
            .find(|q| !is_non_scalable(q.unit()) && q.value() > NOISE_THRESHOLD)
            .unwrap_or_default()
    }

    /// Returns every quantity in `text`, unfiltered, in parser order.
    ///
    /// Never empty: yields a single one-dimensionless entry when nothing is found.
    pub fn find_quantities(&self, text: &str) -> Vec<Quantity> {
        let found = self.parser.parse(text);
        if found.is_empty() {
            vec![Quantity::default()]
        } else {
            found
        }
    }
}

impl Default for QuantityExtractor {
    fn default() -> Self {
        Self::new()
    }
}
