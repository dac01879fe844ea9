//! Catalog product type and its store-assigned identifier.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::quantity::{DIMENSIONLESS, Quantity};

// ===========================================
// ProductId
// ===========================================

/// Store-assigned identifier of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(i64);

/// Error returned when parsing an invalid product ID.
#[derive(Debug, Clone)]
pub struct ParseProductIdError(String);

impl fmt::Display for ParseProductIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ParseProductIdError {}

impl ProductId {
    /// Wraps a raw row id.
    pub fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Returns the raw row id.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProductId {
    type Err = ParseProductIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_start_matches('#');
        trimmed
            .parse::<i64>()
            .ok()
            .filter(|raw| *raw > 0)
            .map(Self)
            .ok_or_else(|| {
                ParseProductIdError(format!(
                    "invalid product ID '{}': expected a positive integer",
                    s
                ))
            })
    }
}

// ===========================================
// Product
// ===========================================

/// Error returned when constructing an invalid product.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseProductError(String);

impl fmt::Display for ParseProductError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ParseProductError {}

/// A product in the catalog.
///
/// The package size (`amount` + `unit`) is derived from the product's own text
/// during indexing and defaults to one dimensionless item until then.
///
/// # Examples
///
/// ```
/// use shopcart::domain::Product;
///
/// let product = Product::new("Apples", "a pair of apples").unwrap();
/// assert_eq!(product.name(), "Apples");
/// assert_eq!(product.amount(), 1.0);
/// assert_eq!(product.unit(), "dimensionless");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    id: Option<ProductId>,
    name: String,
    description: String,
    amount: f64,
    unit: String,
}

impl Product {
    /// Creates a product that has not been stored yet.
    ///
    /// # Errors
    ///
    /// Returns `ParseProductError` if the name is empty or whitespace-only.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, ParseProductError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(ParseProductError("product name cannot be empty".to_string()));
        }

        Ok(Self {
            id: None,
            name,
            description: description.into().trim().to_string(),
            amount: 1.0,
            unit: DIMENSIONLESS.to_string(),
        })
    }

    /// Rebuilds a product from stored columns without re-validating them.
    pub(crate) fn from_row(
        id: ProductId,
        name: String,
        description: String,
        amount: f64,
        unit: String,
    ) -> Self {
        Self {
            id: Some(id),
            name,
            description,
            amount,
            unit,
        }
    }

    /// Returns a copy carrying the given store identifier.
    pub fn with_id(mut self, id: ProductId) -> Self {
        self.id = Some(id);
        self
    }

    /// Returns a copy whose package size is the given quantity.
    ///
    /// Non-positive or non-finite values fall back to one dimensionless item,
    /// keeping `amount > 0` for every product.
    pub fn with_quantity(mut self, quantity: Quantity) -> Self {
        if quantity.value().is_finite() && quantity.value() > 0.0 {
            self.amount = quantity.value();
            self.unit = quantity.unit().to_string();
        } else {
            self.amount = 1.0;
            self.unit = DIMENSIONLESS.to_string();
        }
        self
    }

    /// Returns the store identifier, if the product has been stored.
    pub fn id(&self) -> Option<ProductId> {
        self.id
    }

    /// Returns the product name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the product description (may be empty).
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the size of one package.
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Returns the unit of one package.
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Returns the package size as a quantity.
    pub fn quantity(&self) -> Quantity {
        Quantity::new(self.amount, self.unit.clone())
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "#{} {}", id, self.name),
            None => write!(f, "{}", self.name),
        }
    }
}
