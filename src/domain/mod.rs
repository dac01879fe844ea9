//! Core types: Product, ProductId, Quantity and the unit tables

mod product;
mod quantity;

pub use product::{ParseProductError, ParseProductIdError, Product, ProductId};
pub use quantity::{
    DIMENSIONLESS, NON_SCALABLE_UNITS, Quantity, SCALAR_WORDS, is_non_scalable, scalar_multiplier,
};
