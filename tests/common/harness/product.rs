//! Builder for test products with sensible defaults.

use shopcart::domain::Product;

/// Builder for creating catalog products in tests.
#[derive(Debug, Clone)]
pub struct TestProduct {
    name: String,
    description: String,
}

impl TestProduct {
    /// Creates a new test product with the given name and no description.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
        }
    }

    /// Sets the description.
    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }

    /// Returns the product name.
    #[allow(dead_code)]
    pub fn get_name(&self) -> &str {
        &self.name
    }

    /// Converts to a domain `Product`.
    pub fn to_product(&self) -> Product {
        Product::new(self.name.as_str(), self.description.as_str()).expect("Invalid product")
    }
}
