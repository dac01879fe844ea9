//! Isolated test environment with temp directory.

use super::{ShopcartCommand, TestProduct};
use anyhow::Result;
use shopcart::domain::Product;
use shopcart::matching::Processor;
use shopcart::store::{ProductStore, SqliteStore};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary catalog database.
///
/// Creates a temp directory that is automatically cleaned up on drop.
/// Provides methods for seeding products and learning the index.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    /// Root of the environment
    root: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    /// Returns the root directory of the environment.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the path of the catalog database.
    pub fn db_path(&self) -> PathBuf {
        self.root.join("catalog.db")
    }

    /// Opens the catalog database directly.
    pub fn store(&self) -> Result<SqliteStore> {
        Ok(SqliteStore::open(&self.db_path())?)
    }

    /// Stores the given products without learning.
    pub fn add_products(&self, products: &[TestProduct]) -> Result<Vec<Product>> {
        let mut store = self.store()?;
        let products: Vec<Product> = products.iter().map(TestProduct::to_product).collect();
        store.add_products(&products)?;
        Ok(store.get_products()?)
    }

    /// Rebuilds and stores the stem index.
    pub fn learn(&self) -> Result<()> {
        Processor::with_defaults(self.store()?).learn_from_db()?;
        Ok(())
    }

    /// Creates a ShopcartCommand configured for this test environment.
    pub fn cmd(&self) -> ShopcartCommand {
        ShopcartCommand::new().home(&self.root).db(&self.db_path())
    }

    /// Writes a file to the test environment and returns its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_creates_temp_directory() {
        let env = TestEnv::new();
        assert!(env.root().is_dir(), "root should be a directory");
    }

    #[test]
    fn test_env_cleanup_on_drop() {
        let path = {
            let env = TestEnv::new();
            env.root().to_path_buf()
        };
        assert!(
            !path.exists(),
            "temp directory should be cleaned up on drop"
        );
    }

    #[test]
    fn test_env_provides_command() {
        let env = TestEnv::new();
        let cmd = env.cmd();
        let args = cmd.get_args();
        assert_eq!(args[0], "--db");
        assert_eq!(args[1], env.db_path().to_string_lossy());
    }

    #[test]
    fn test_env_add_products_assigns_ids() {
        let env = TestEnv::new();
        let stored = env
            .add_products(&[TestProduct::new("Apples"), TestProduct::new("Milk")])
            .expect("Should store products");

        assert_eq!(stored.len(), 2);
        assert!(stored.iter().all(|p| p.id().is_some()));
    }

    #[test]
    fn test_env_learn_links_stems() {
        let env = TestEnv::new();
        env.add_products(&[TestProduct::new("Apples").description("a pair of apples")])
            .expect("Should store products");
        env.learn().expect("Should learn");

        let store = env.store().expect("Should open store");
        assert_eq!(store.get_products_for_stem("appl").unwrap().len(), 1);
    }
}
