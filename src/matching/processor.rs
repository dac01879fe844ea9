//! Shopping-list resolution on top of a product store.

use serde::Serialize;
use tracing::{debug, info};

use super::extractor::QuantityExtractor;
use super::index::InvertedIndex;
use super::normalizer::{Normalizer, StemSet};
use super::ranking;
use super::reconcile::{CountTier, resolve_count};
use crate::domain::{Product, Quantity};
use crate::store::{ProductStore, StoreResult};

// ===========================================
// Result Types
// ===========================================

/// A shopping-list line resolved to a catalog product.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShoppingListMatch {
    /// The input line.
    pub line: String,
    /// The best-matching product.
    pub product: Product,
    /// How many packages of the product to buy.
    pub count: u32,
    /// The rule that produced `count`.
    pub tier: CountTier,
}

/// Rows written by [`Processor::save_index_to_db`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SaveReport {
    /// Products whose package size was written.
    pub products: usize,
    /// Distinct stems upserted.
    pub stems: usize,
    /// Product-stem pairs upserted.
    pub associations: usize,
}

// ===========================================
// Processor
// ===========================================

/// Indexes a catalog and resolves shopping lists against it.
///
/// The normalizer and extractor are fixed at construction; the in-memory
/// index is replaced wholesale by every rebuild.
pub struct Processor<S> {
    store: S,
    normalizer: Normalizer,
    extractor: QuantityExtractor,
    index: InvertedIndex,
}

impl<S: ProductStore> Processor<S> {
    /// Creates a processor with an empty index.
    pub fn new(store: S, normalizer: Normalizer, extractor: QuantityExtractor) -> Self {
        Self {
            store,
            normalizer,
            extractor,
            index: InvertedIndex::new(),
        }
    }

    /// Creates a processor with the default normalizer and extractor.
    pub fn with_defaults(store: S) -> Self {
        Self::new(store, Normalizer::new(), QuantityExtractor::new())
    }

    /// Returns the backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns the current in-memory index.
    pub fn index(&self) -> &InvertedIndex {
        &self.index
    }

    // ===========================================
    // Indexing
    // ===========================================

    /// Replaces the in-memory index with one built from `products`.
    ///
    /// The new index is built completely before it replaces the old one.
    pub fn create_index(&mut self, products: &[Product]) {
        let rebuilt = InvertedIndex::build(products, &self.normalizer, &self.extractor);
        self.index = rebuilt;
    }

    /// Rebuilds the in-memory index from the whole catalog.
    pub fn create_index_from_db(&mut self) -> StoreResult<()> {
        let products = self.store.get_products()?;
        self.create_index(&products);
        Ok(())
    }

    /// Writes the current index to the store.
    ///
    /// Saves package sizes, upserts every stem, then upserts each product's
    /// associations. Safe to repeat: existing rows are left alone.
    pub fn save_index_to_db(&mut self) -> StoreResult<SaveReport> {
        let products: Vec<Product> = self
            .index
            .entries()
            .iter()
            .map(|entry| entry.product().clone())
            .collect();
        self.store.save_quantities_of_products(&products)?;

        let stems: Vec<&str> = self.index.all_stems().into_iter().collect();
        self.store.add_stems(&stems)?;

        let mut associations = 0;
        for entry in self.index.entries() {
            let entry_stems: Vec<&str> = entry.stems().iter().map(String::as_str).collect();
            self.store.add_conn_p_s(entry.product(), &entry_stems)?;
            associations += entry_stems.len();
        }

        Ok(SaveReport {
            products: products.len(),
            stems: stems.len(),
            associations,
        })
    }

    /// Rebuilds the index from the store and persists it.
    pub fn learn_from_db(&mut self) -> StoreResult<SaveReport> {
        self.create_index_from_db()?;
        let report = self.save_index_to_db()?;
        info!(
            products = report.products,
            stems = report.stems,
            associations = report.associations,
            "learned catalog index"
        );
        Ok(report)
    }

    // ===========================================
    // Querying
    // ===========================================

    /// Returns the stems of a free-text line.
    pub fn split_to_stems(&self, text: &str) -> StemSet {
        self.normalizer.split_to_stems(text)
    }

    /// Returns the quantities mentioned in a free-text line (never empty).
    pub fn find_quantities(&self, text: &str) -> Vec<Quantity> {
        self.extractor.find_quantities(text)
    }

    /// Returns the stored product sharing the most stems, if any.
    pub fn find_best_product(&self, stems: &StemSet) -> StoreResult<Option<Product>> {
        ranking::find_best_product(&self.store, stems.iter().map(String::as_str))
    }

    /// Resolves one line; `None` if nothing in the catalog matches.
    pub fn resolve_line(&self, line: &str) -> StoreResult<Option<ShoppingListMatch>> {
        let stems = self.split_to_stems(line);
        let Some(product) = self.find_best_product(&stems)? else {
            debug!(line, "no product matched");
            return Ok(None);
        };

        let quantities = self.find_quantities(line);
        let resolution = resolve_count(&product, &quantities);
        debug!(
            line,
            product = %product,
            count = resolution.count,
            tier = ?resolution.tier,
            "resolved line"
        );

        Ok(Some(ShoppingListMatch {
            line: line.to_string(),
            product,
            count: resolution.count,
            tier: resolution.tier,
        }))
    }

    /// Resolves every line in order, omitting lines that match nothing.
    pub fn find_products_for_shopping_list<T: AsRef<str>>(
        &self,
        lines: &[T],
    ) -> StoreResult<Vec<ShoppingListMatch>> {
        let mut matches = Vec::with_capacity(lines.len());
        for line in lines {
            if let Some(found) = self.resolve_line(line.as_ref())? {
                matches.push(found);
            }
        }
        Ok(matches)
    }
}
