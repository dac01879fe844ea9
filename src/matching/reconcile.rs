//! Reconciling a requested quantity with a product's package size.

use serde::Serialize;

use crate::domain::{Product, Quantity, scalar_multiplier};

/// Slack applied before rounding up, so `1/12 * 12` stays 1.
const CEIL_EPSILON: f64 = 1e-9;

/// Which reconciliation rule produced a count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CountTier {
    /// A requested quantity used the product's own unit.
    ExactUnit,
    /// A requested quantity used a scalar word (pair, dozen, ...).
    ScalarWord,
    /// Neither applied; the first number was taken as a package count.
    RawCount,
}

/// A package count and the rule that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CountResolution {
    pub count: u32,
    pub tier: CountTier,
}

fn ceil_count(value: f64) -> u32 {
    if !value.is_finite() {
        return 1;
    }
    let rounded = (value - CEIL_EPSILON).ceil();
    rounded.clamp(1.0, u32::MAX as f64) as u32
}

/// Works out how many packages of `product` cover the requested quantities.
///
/// Rules, first match wins:
/// 1. some quantity is in the product's unit: `ceil(value / amount)`
/// 2. some quantity is a scalar word: `ceil(multiplier / effective_amount * primary)`,
///    where the effective amount is the package amount scaled by the product
///    unit's own multiplier (if it has one) and `primary` is the first quantity
/// 3. otherwise `ceil(primary)`
///
/// Scalar-word values count the word, not the items: `(2, "dozen")` is two
/// dozen, and the multiplier is applied here only.
///
/// Always returns at least 1. An empty slice counts as one dimensionless item.
pub fn resolve_count(product: &Product, quantities: &[Quantity]) -> CountResolution {
    let fallback = Quantity::default();
    let primary = quantities.first().unwrap_or(&fallback);
    let amount = if product.amount() > 0.0 {
        product.amount()
    } else {
        1.0
    };

    if let Some(matching) = quantities.iter().find(|q| q.unit() == product.unit()) {
        return CountResolution {
            count: ceil_count(matching.value() / amount),
            tier: CountTier::ExactUnit,
        };
    }

    if let Some(multiplier) = quantities.iter().find_map(|q| scalar_multiplier(q.unit())) {
        let effective = amount * scalar_multiplier(product.unit()).unwrap_or(1.0);
        return CountResolution {
            count: ceil_count(multiplier / effective * primary.value()),
            tier: CountTier::ScalarWord,
        };
    }

    CountResolution {
        count: ceil_count(primary.value()),
        tier: CountTier::RawCount,
    }
}

/// Returns only the package count of [`resolve_count`].
pub fn calculate_count(product: &Product, quantities: &[Quantity]) -> u32 {
    resolve_count(product, quantities).count
}
