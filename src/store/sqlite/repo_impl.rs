//! ProductStore trait implementation for SqliteStore.

use super::SqliteStore;
use crate::domain::{Product, ProductId};
use crate::store::{ProductStore, StoreError, StoreResult, StoreStats};
use rusqlite::{Connection, ErrorCode, OptionalExtension, Row};

/// Column list shared by every product query (aliased as `p`).
const PRODUCT_COLUMNS: &str = "p.id, p.name, p.description, p.amount, p.unit";

fn product_from_row(row: &Row<'_>) -> rusqlite::Result<Product> {
    Ok(Product::from_row(
        ProductId::new(row.get(0)?),
        row.get(1)?,
        row.get(2)?,
        row.get(3)?,
        row.get(4)?,
    ))
}

fn validate_stems(stems: &[&str]) -> StoreResult<()> {
    if let Some(position) = stems.iter().position(|s| s.trim().is_empty()) {
        return Err(StoreError::Validation(format!(
            "stem value at position {} is empty",
            position
        )));
    }
    Ok(())
}

fn validate_amount(product: &Product) -> StoreResult<()> {
    if !(product.amount().is_finite() && product.amount() > 0.0) {
        return Err(StoreError::Validation(format!(
            "product '{}' has non-positive amount {}",
            product.name(),
            product.amount()
        )));
    }
    Ok(())
}

/// Resolves the row id of a product, falling back to a lookup by name.
fn resolve_product_id(conn: &Connection, product: &Product) -> StoreResult<i64> {
    let found = match product.id() {
        Some(id) => conn
            .query_row(
                "SELECT id FROM products WHERE id = ?",
                [id.get()],
                |row| row.get::<_, i64>(0),
            )
            .optional()?,
        None => conn
            .query_row(
                "SELECT id FROM products WHERE name = ?",
                [product.name()],
                |row| row.get::<_, i64>(0),
            )
            .optional()?,
    };

    found.ok_or_else(|| StoreError::ProductNotResolved {
        name: product.name().to_string(),
    })
}

fn is_constraint_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _) if e.code == ErrorCode::ConstraintViolation
    )
}

impl ProductStore for SqliteStore {
    fn get_products(&self) -> StoreResult<Vec<Product>> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products p ORDER BY p.id");
        let products = self
            .conn
            .prepare(&sql)?
            .query_map([], product_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(products)
    }

    fn get_product(&self, id: ProductId) -> StoreResult<Option<Product>> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products p WHERE p.id = ?");
        let product = self
            .conn
            .query_row(&sql, [id.get()], product_from_row)
            .optional()?;
        Ok(product)
    }

    fn get_products_for_stem(&self, stem: &str) -> StoreResult<Vec<Product>> {
        let sql = format!(
            "SELECT {PRODUCT_COLUMNS} FROM products p
             JOIN product_stems ps ON ps.product_id = p.id
             JOIN stems s ON s.id = ps.stem_id
             WHERE s.value = ?
             ORDER BY p.id"
        );
        let products = self
            .conn
            .prepare(&sql)?
            .query_map([stem], product_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(products)
    }

    fn add_products(&mut self, products: &[Product]) -> StoreResult<usize> {
        for product in products {
            validate_amount(product)?;
        }

        self.write(|tx| {
            let mut insert = tx.prepare(
                "INSERT OR IGNORE INTO products (name, description, amount, unit)
                 VALUES (?1, ?2, ?3, ?4)",
            )?;
            let mut inserted = 0;
            for product in products {
                inserted += insert.execute(rusqlite::params![
                    product.name(),
                    product.description(),
                    product.amount(),
                    product.unit(),
                ])?;
            }
            Ok(inserted)
        })
    }

    fn insert_product(&mut self, product: &Product) -> StoreResult<Product> {
        validate_amount(product)?;

        let result = self.conn.execute(
            "INSERT INTO products (name, description, amount, unit) VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![
                product.name(),
                product.description(),
                product.amount(),
                product.unit(),
            ],
        );

        match result {
            Ok(_) => {
                let id = ProductId::new(self.conn.last_insert_rowid());
                Ok(product.clone().with_id(id))
            }
            Err(e) if is_constraint_violation(&e) => Err(StoreError::Conflict {
                name: product.name().to_string(),
            }),
            Err(e) => Err(StoreError::Database(e)),
        }
    }

    fn add_stems(&mut self, values: &[&str]) -> StoreResult<()> {
        validate_stems(values)?;

        self.write(|tx| {
            let mut insert = tx.prepare("INSERT OR IGNORE INTO stems (value) VALUES (?)")?;
            for value in values {
                insert.execute([value])?;
            }
            Ok(())
        })
    }

    fn add_conn_p_s(&mut self, product: &Product, stems: &[&str]) -> StoreResult<()> {
        if stems.is_empty() {
            return Ok(());
        }
        validate_stems(stems)?;
        let product_id = resolve_product_id(&self.conn, product)?;

        self.write(|tx| {
            let mut insert_stem = tx.prepare("INSERT OR IGNORE INTO stems (value) VALUES (?)")?;
            let mut link = tx.prepare(
                "INSERT OR IGNORE INTO product_stems (product_id, stem_id)
                 SELECT ?1, id FROM stems WHERE value = ?2",
            )?;
            for stem in stems {
                insert_stem.execute([stem])?;
                link.execute(rusqlite::params![product_id, stem])?;
            }
            Ok(())
        })
    }

    fn save_quantities_of_products(&mut self, products: &[Product]) -> StoreResult<()> {
        for product in products {
            validate_amount(product)?;
        }

        self.write(|tx| {
            for product in products {
                match product.id() {
                    Some(id) => tx.execute(
                        "UPDATE products SET amount = ?1, unit = ?2 WHERE id = ?3",
                        rusqlite::params![product.amount(), product.unit(), id.get()],
                    )?,
                    None => tx.execute(
                        "UPDATE products SET amount = ?1, unit = ?2 WHERE name = ?3",
                        rusqlite::params![product.amount(), product.unit(), product.name()],
                    )?,
                };
            }
            Ok(())
        })
    }

    fn remove_product(&mut self, id: ProductId) -> StoreResult<bool> {
        self.write(|tx| {
            let rows = tx.execute("DELETE FROM products WHERE id = ?", [id.get()])?;
            // Junction rows are gone via cascade; drop stems nothing points at anymore
            tx.execute(
                "DELETE FROM stems WHERE id NOT IN (SELECT stem_id FROM product_stems)",
                [],
            )?;
            Ok(rows > 0)
        })
    }

    fn stems_for_product(&self, id: ProductId) -> StoreResult<Vec<String>> {
        let stems = self
            .conn
            .prepare(
                "SELECT s.value FROM stems s
                 JOIN product_stems ps ON ps.stem_id = s.id
                 WHERE ps.product_id = ?
                 ORDER BY s.value",
            )?
            .query_map([id.get()], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(stems)
    }

    fn stats(&self) -> StoreResult<StoreStats> {
        let count = |table: &str| -> StoreResult<usize> {
            let n: i64 = self
                .conn
                .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
                    row.get(0)
                })?;
            Ok(n as usize)
        };

        Ok(StoreStats {
            products: count("products")?,
            stems: count("stems")?,
            associations: count("product_stems")?,
        })
    }
}
