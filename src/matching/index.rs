//! In-memory inverted index from stems to products.

use std::collections::{BTreeSet, HashMap};
use tracing::debug;

use super::extractor::QuantityExtractor;
use super::normalizer::{Normalizer, StemSet};
use super::ranking::StemLookup;
use crate::domain::Product;
use crate::store::StoreResult;

/// A product together with the stems of its name and description.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexEntry {
    product: Product,
    stems: StemSet,
}

impl IndexEntry {
    /// Returns the indexed product, carrying its derived package size.
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Returns the product's stems.
    pub fn stems(&self) -> &StemSet {
        &self.stems
    }
}

/// Ordered index entries plus a stem → entry postings map.
#[derive(Debug, Default)]
pub struct InvertedIndex {
    entries: Vec<IndexEntry>,
    postings: HashMap<String, Vec<usize>>,
}

impl InvertedIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an index over `products`, one entry each, in input order.
    ///
    /// Each entry holds a copy of the product whose amount and unit come from
    /// the extractor; the input products are left untouched.
    pub fn build<'a>(
        products: impl IntoIterator<Item = &'a Product>,
        normalizer: &Normalizer,
        extractor: &QuantityExtractor,
    ) -> Self {
        let mut index = Self::new();

        for product in products {
            let quantity = extractor.find_quantity_for_product(product);
            let sized = product.clone().with_quantity(quantity);
            let stems = normalizer.product_to_bag_of_stems(&sized);
            debug!(
                product = %sized,
                amount = sized.amount(),
                unit = sized.unit(),
                stems = stems.len(),
                "indexed product"
            );

            let position = index.entries.len();
            for stem in &stems {
                index.postings.entry(stem.clone()).or_default().push(position);
            }
            index.entries.push(IndexEntry {
                product: sized,
                stems,
            });
        }

        index
    }

    /// Returns all entries in build order.
    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    /// Returns the number of indexed products.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is indexed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the union of all entries' stems.
    pub fn all_stems(&self) -> BTreeSet<&str> {
        self.postings.keys().map(String::as_str).collect()
    }

    /// Returns the indexed products sharing `stem`, in build order.
    pub fn products_with_stem(&self, stem: &str) -> impl Iterator<Item = &Product> {
        self.postings
            .get(stem)
            .into_iter()
            .flatten()
            .map(|&position| &self.entries[position].product)
    }
}

impl StemLookup for InvertedIndex {
    fn products_for_stem(&self, stem: &str) -> StoreResult<Vec<Product>> {
        Ok(self.products_with_stem(stem).cloned().collect())
    }
}
