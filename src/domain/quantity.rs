//! Quantities, the dimensionless sentinel, and the static unit tables.

use serde::Serialize;
use std::fmt;

/// Unit label used when no unit was detected.
pub const DIMENSIONLESS: &str = "dimensionless";

/// Scalar words and the number of items each one stands for.
///
/// A quantity in one of these units counts the word: `(2, "dozen")` is 24 items.
pub const SCALAR_WORDS: &[(&str, f64)] = &[
    (DIMENSIONLESS, 1.0),
    ("pair", 2.0),
    ("dozen", 12.0),
    ("gross", 144.0),
    ("long hundred", 120.0),
    ("great gross", 1728.0),
];

/// Units that never describe a package size (time, money, ratios, temperature).
pub const NON_SCALABLE_UNITS: &[&str] = &[
    "second",
    "minute",
    "hour",
    "day",
    "week",
    "month",
    "year",
    "dollar",
    "cent",
    "euro",
    "pound sterling",
    "percentage",
    "degree",
    "degree celsius",
    "degree fahrenheit",
];

/// Returns the item multiplier of a scalar word, if `unit` is one.
pub fn scalar_multiplier(unit: &str) -> Option<f64> {
    SCALAR_WORDS
        .iter()
        .find(|(word, _)| *word == unit)
        .map(|(_, multiplier)| *multiplier)
}

/// Returns true if `unit` can not be used as a package multiplier.
pub fn is_non_scalable(unit: &str) -> bool {
    NON_SCALABLE_UNITS.contains(&unit)
}

/// A numeric value paired with a unit label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quantity {
    value: f64,
    unit: String,
}

impl Quantity {
    /// Creates a quantity with the given unit label.
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
        }
    }

    /// Creates a quantity without a unit.
    pub fn dimensionless(value: f64) -> Self {
        Self::new(value, DIMENSIONLESS)
    }

    /// Returns the numeric value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Returns the unit label.
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Returns true if no unit was detected.
    pub fn is_dimensionless(&self) -> bool {
        self.unit == DIMENSIONLESS
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::dimensionless(1.0)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dimensionless() {
            write!(f, "{}", self.value)
        } else {
            write!(f, "{} {}", self.value, self.unit)
        }
    }
}
