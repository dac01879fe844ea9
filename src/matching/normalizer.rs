//! Text normalization into bags of stems.
//!
//! Pipeline: Unicode word segmentation → lowercasing → stopword and
//! punctuation removal → English (Porter family) stemming → dedupe.

use rust_stemmers::{Algorithm, Stemmer};
use std::collections::{BTreeSet, HashSet};
use unicode_segmentation::UnicodeSegmentation;

use super::stopwords;
use crate::domain::Product;

/// A deduplicated, ordered set of stems.
pub type StemSet = BTreeSet<String>;

/// Converts free text into a canonical set of stems.
///
/// Holds the stopword list and the stemmer; immutable after construction, so
/// one instance can be shared by everything that indexes or queries.
pub struct Normalizer {
    stopwords: HashSet<&'static str>,
    stemmer: Stemmer,
}

impl Normalizer {
    /// Creates a normalizer with the English stopword list.
    pub fn new() -> Self {
        Self::with_stopwords(stopwords::ENGLISH.iter().copied())
    }

    /// Creates a normalizer with a custom stopword list.
    pub fn with_stopwords(words: impl IntoIterator<Item = &'static str>) -> Self {
        Self {
            stopwords: words.into_iter().collect(),
            stemmer: Stemmer::create(Algorithm::English),
        }
    }

    /// Splits text into word-level tokens, lowercased, whitespace dropped.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_word_bounds()
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(str::to_lowercase)
            .collect()
    }

    /// Returns true if the token survives stopword and punctuation filtering.
    ///
    /// Number tokens are kept, so a "2" in a shopping line votes like any word.
    fn keeps(&self, token: &str) -> bool {
        if token.is_empty() || self.stopwords.contains(token) {
            return false;
        }
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(only), None) => only.is_alphanumeric(),
            _ => true,
        }
    }

    /// Returns the stem of a single lowercase token.
    pub fn stem(&self, token: &str) -> String {
        self.stemmer.stem(token).into_owned()
    }

    /// Converts text into its set of stems. Never fails; empty text yields an empty set.
    pub fn split_to_stems(&self, text: &str) -> StemSet {
        self.tokenize(text)
            .iter()
            .filter(|token| self.keeps(token))
            .map(|token| self.stem(token))
            .filter(|stem| !stem.is_empty())
            .collect()
    }

    /// Returns the union of the stems of a product's name and description.
    pub fn product_to_bag_of_stems(&self, product: &Product) -> StemSet {
        let mut stems = self.split_to_stems(product.name());
        stems.extend(self.split_to_stems(product.description()));
        stems
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}
