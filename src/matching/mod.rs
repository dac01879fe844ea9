//! Text matching: normalization, quantity extraction, indexing, ranking
//! and shopping-list resolution.

mod extractor;
mod index;
mod normalizer;
mod processor;
mod quantity;
mod ranking;
mod reconcile;
mod stopwords;

pub use extractor::{NOISE_THRESHOLD, QuantityExtractor};
pub use index::{IndexEntry, InvertedIndex};
pub use normalizer::{Normalizer, StemSet};
pub use processor::{Processor, SaveReport, ShoppingListMatch};
pub use quantity::{QuantityParser, UnitScanner};
pub use ranking::{Ranked, StemLookup, find_best_product, rank_products};
pub use reconcile::{CountResolution, CountTier, calculate_count, resolve_count};
pub use stopwords::ENGLISH as ENGLISH_STOPWORDS;
