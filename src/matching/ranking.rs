//! Term-overlap voting over per-stem product lookups.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::domain::{Product, ProductId};
use crate::store::{ProductStore, StoreResult};

/// Anything that can list the products associated with a stem.
pub trait StemLookup {
    fn products_for_stem(&self, stem: &str) -> StoreResult<Vec<Product>>;
}

impl<S: ProductStore> StemLookup for S {
    fn products_for_stem(&self, stem: &str) -> StoreResult<Vec<Product>> {
        self.get_products_for_stem(stem)
    }
}

/// Identity used to count votes: the store ID, or the name for unsaved products.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum VoteKey {
    Id(ProductId),
    Name(String),
}

impl VoteKey {
    fn of(product: &Product) -> Self {
        match product.id() {
            Some(id) => Self::Id(id),
            None => Self::Name(product.name().to_string()),
        }
    }
}

/// A candidate product with the number of query stems it shares.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranked {
    pub product: Product,
    pub votes: u32,
}

/// Ordering used to pick a winner: more votes first, then lowest ID,
/// then products without an ID ordered by name.
fn precedence(a: &Ranked, b: &Ranked) -> Ordering {
    b.votes
        .cmp(&a.votes)
        .then_with(|| match (a.product.id(), b.product.id()) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => a.product.name().cmp(b.product.name()),
        })
}

/// Counts, per product, how many of the given stems it is associated with.
///
/// Returned candidates are sorted best first.
pub fn rank_products<'a, L, I>(lookup: &L, stems: I) -> StoreResult<Vec<Ranked>>
where
    L: StemLookup + ?Sized,
    I: IntoIterator<Item = &'a str>,
{
    let mut table: HashMap<VoteKey, Ranked> = HashMap::new();

    for stem in stems {
        for product in lookup.products_for_stem(stem)? {
            table
                .entry(VoteKey::of(&product))
                .and_modify(|ranked| ranked.votes += 1)
                .or_insert(Ranked { product, votes: 1 });
        }
    }

    let mut ranked: Vec<Ranked> = table.into_values().collect();
    ranked.sort_by(precedence);
    Ok(ranked)
}

/// Returns the product sharing the most stems with the query, if any.
///
/// An empty stem set, or stems unknown to the lookup, yield `None`.
pub fn find_best_product<'a, L, I>(lookup: &L, stems: I) -> StoreResult<Option<Product>>
where
    L: StemLookup + ?Sized,
    I: IntoIterator<Item = &'a str>,
{
    Ok(rank_products(lookup, stems)?
        .into_iter()
        .next()
        .map(|ranked| ranked.product))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Lookup backed by a fixed stem → products table.
    struct TableLookup(Vec<(&'static str, Vec<Product>)>);

    impl StemLookup for TableLookup {
        fn products_for_stem(&self, stem: &str) -> StoreResult<Vec<Product>> {
            Ok(self
                .0
                .iter()
                .filter(|(s, _)| *s == stem)
                .flat_map(|(_, products)| products.clone())
                .collect())
        }
    }

    fn stored(id: i64, name: &str) -> Product {
        Product::new(name, "").unwrap().with_id(ProductId::new(id))
    }

    #[test]
    fn most_shared_stems_wins() {
        let apples = stored(1, "Green apples");
        let juice = stored(2, "Apple juice");
        let lookup = TableLookup(vec![
            ("appl", vec![apples.clone(), juice.clone()]),
            ("juic", vec![juice.clone()]),
        ]);

        let best = find_best_product(&lookup, ["appl", "juic"]).unwrap();
        assert_eq!(best, Some(juice));
    }

    #[test]
    fn ties_go_to_lowest_id() {
        let lookup = TableLookup(vec![(
            "appl",
            vec![stored(9, "Apple pie"), stored(3, "Apples"), stored(5, "Apple juice")],
        )]);

        let best = find_best_product(&lookup, ["appl"]).unwrap();
        assert_eq!(best.and_then(|p| p.id()), Some(ProductId::new(3)));
    }

    #[test]
    fn unsaved_products_rank_after_stored_and_by_name() {
        let lookup = TableLookup(vec![(
            "appl",
            vec![
                Product::new("Zesty apples", "").unwrap(),
                Product::new("Apple cider", "").unwrap(),
            ],
        )]);

        let ranked = rank_products(&lookup, ["appl"]).unwrap();
        let names: Vec<&str> = ranked.iter().map(|r| r.product.name()).collect();
        assert_eq!(names, vec!["Apple cider", "Zesty apples"]);
    }

    #[test]
    fn votes_count_each_shared_stem_once() {
        let apples = stored(1, "Apples");
        let lookup = TableLookup(vec![
            ("appl", vec![apples.clone()]),
            ("pair", vec![apples.clone()]),
        ]);

        let ranked = rank_products(&lookup, ["appl", "pair", "xyzzi"]).unwrap();
        assert_eq!(ranked, vec![Ranked { product: apples, votes: 2 }]);
    }

    #[test]
    fn empty_stems_find_nothing() {
        let lookup = TableLookup(vec![("appl", vec![stored(1, "Apples")])]);
        assert_eq!(find_best_product(&lookup, std::iter::empty::<&str>()).unwrap(), None);
    }

    #[test]
    fn unknown_stems_find_nothing() {
        let lookup = TableLookup(vec![("appl", vec![stored(1, "Apples")])]);
        assert_eq!(find_best_product(&lookup, ["xyzzi", "gibberish"]).unwrap(), None);
    }
}
