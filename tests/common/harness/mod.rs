//! Test harness for CLI integration tests.
//!
//! Provides isolated test environments, programmatic catalog seeding,
//! and CLI assertion helpers using `assert_cmd`.

mod command;
mod env;
mod product;

// Re-export main types for external use
#[allow(unused_imports)]
pub use command::ShopcartCommand;
#[allow(unused_imports)]
pub use env::TestEnv;
#[allow(unused_imports)]
pub use product::TestProduct;
