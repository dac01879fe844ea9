use super::*;
use crate::domain::{Product, ProductId, Quantity};
use crate::store::{ProductStore, StoreError, StoreResult};
use pretty_assertions::assert_eq;
use tempfile::tempdir;

fn product(name: &str, description: &str) -> Product {
    Product::new(name, description).unwrap()
}

fn seeded_store() -> SqliteStore {
    let mut store = SqliteStore::open_in_memory().unwrap();
    store
        .add_products(&[
            product("Apples", "a pair of apples"),
            product("Milk", "2 litre bottle"),
            product("Eggs", "a dozen free range eggs"),
        ])
        .unwrap();
    store
}

fn id_of(store: &SqliteStore, name: &str) -> ProductId {
    store
        .get_products()
        .unwrap()
        .into_iter()
        .find(|p| p.name() == name)
        .and_then(|p| p.id())
        .unwrap()
}

// ===========================================
// Connection
// ===========================================

#[test]
fn open_in_memory_enables_foreign_keys() {
    let store = SqliteStore::open_in_memory().unwrap();

    let fk_enabled: i32 = store
        .conn
        .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
        .unwrap();

    assert_eq!(fk_enabled, 1, "foreign keys should be enabled");
}

#[test]
fn open_creates_parent_directory() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("nested").join("catalog.db");

    let _store = SqliteStore::open(&db_path).unwrap();

    assert!(db_path.exists(), "database file should be created");
}

#[test]
fn open_existing_preserves_data() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("catalog.db");

    {
        let mut store = SqliteStore::open(&db_path).unwrap();
        store.add_products(&[product("Bread", "")]).unwrap();
    }

    let store = SqliteStore::open(&db_path).unwrap();
    assert_eq!(store.get_products().unwrap().len(), 1);
}

// ===========================================
// Batched writes
// ===========================================

#[test]
fn failed_write_keeps_nothing() {
    let mut store = SqliteStore::open_in_memory().unwrap();

    let result: StoreResult<()> = store.write(|tx| {
        tx.execute("INSERT INTO products (name) VALUES ('Ghost')", [])?;
        Err(StoreError::Validation("stop".to_string()))
    });

    assert!(matches!(result, Err(StoreError::Validation(_))));
    assert!(store.get_products().unwrap().is_empty());
}

#[test]
fn failed_statement_undoes_earlier_rows() {
    let mut store = SqliteStore::open_in_memory().unwrap();

    let result = store.write(|tx| {
        tx.execute("INSERT INTO products (name) VALUES ('Bread')", [])?;
        tx.execute("INSERT INTO products (name) VALUES ('Bread')", [])?;
        Ok(())
    });

    assert!(matches!(result, Err(StoreError::Database(_))));
    assert!(store.get_products().unwrap().is_empty());
}

#[test]
fn successful_write_commits_and_returns_value() {
    let mut store = SqliteStore::open_in_memory().unwrap();

    let rows = store
        .write(|tx| Ok(tx.execute("INSERT INTO products (name) VALUES ('Kept')", [])?))
        .unwrap();

    assert_eq!(rows, 1);
    assert_eq!(store.get_products().unwrap().len(), 1);
}

// ===========================================
// Products
// ===========================================

#[test]
fn add_products_assigns_ids_in_order() {
    let store = seeded_store();
    let products = store.get_products().unwrap();

    let names: Vec<&str> = products.iter().map(|p| p.name()).collect();
    assert_eq!(names, vec!["Apples", "Milk", "Eggs"]);
    assert!(products.iter().all(|p| p.id().is_some()));
}

#[test]
fn add_products_is_idempotent_on_name() {
    let mut store = seeded_store();
    let inserted = store
        .add_products(&[product("Apples", "other"), product("Butter", "")])
        .unwrap();

    assert_eq!(inserted, 1);
    assert_eq!(store.get_products().unwrap().len(), 4);
}

#[test]
fn insert_product_returns_product_with_id() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    let stored = store.insert_product(&product("Rice", "1 kg bag")).unwrap();

    let id = stored.id().expect("id should be assigned");
    assert_eq!(store.get_product(id).unwrap(), Some(stored));
}

#[test]
fn insert_product_conflicts_on_duplicate_name() {
    let mut store = seeded_store();
    let err = store.insert_product(&product("Milk", "")).unwrap_err();
    assert!(matches!(err, StoreError::Conflict { ref name } if name == "Milk"));
}

#[test]
fn get_product_missing_returns_none() {
    let store = seeded_store();
    assert_eq!(store.get_product(ProductId::new(999)).unwrap(), None);
}

#[test]
fn save_quantities_updates_amount_and_unit() {
    let mut store = seeded_store();
    let eggs = store.get_product(id_of(&store, "Eggs")).unwrap().unwrap();
    let sized = eggs.with_quantity(Quantity::new(1.0, "dozen"));

    store.save_quantities_of_products(&[sized.clone()]).unwrap();

    assert_eq!(store.get_product(sized.id().unwrap()).unwrap(), Some(sized));
}

#[test]
fn save_quantities_resolves_by_name_without_id() {
    let mut store = seeded_store();
    let milk = product("Milk", "").with_quantity(Quantity::new(2.0, "litre"));

    store.save_quantities_of_products(&[milk]).unwrap();

    let stored = store.get_product(id_of(&store, "Milk")).unwrap().unwrap();
    assert_eq!(stored.amount(), 2.0);
    assert_eq!(stored.unit(), "litre");
}

// ===========================================
// Stems and associations
// ===========================================

#[test]
fn add_stems_is_idempotent() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    store.add_stems(&["appl", "pair"]).unwrap();
    store.add_stems(&["appl", "pair", "milk"]).unwrap();

    assert_eq!(store.stats().unwrap().stems, 3);
}

#[test]
fn add_stems_rejects_empty_value() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    let err = store.add_stems(&["appl", " "]).unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));
}

#[test]
fn add_conn_links_products_to_stems() {
    let mut store = seeded_store();
    let apples = store.get_product(id_of(&store, "Apples")).unwrap().unwrap();

    store.add_stems(&["appl", "pair"]).unwrap();
    store.add_conn_p_s(&apples, &["appl", "pair"]).unwrap();

    let found = store.get_products_for_stem("appl").unwrap();
    assert_eq!(found, vec![apples.clone()]);
    assert_eq!(
        store.stems_for_product(apples.id().unwrap()).unwrap(),
        vec!["appl".to_string(), "pair".to_string()]
    );
}

#[test]
fn add_conn_is_idempotent() {
    let mut store = seeded_store();
    let apples = store.get_product(id_of(&store, "Apples")).unwrap().unwrap();

    store.add_conn_p_s(&apples, &["appl"]).unwrap();
    store.add_conn_p_s(&apples, &["appl"]).unwrap();

    assert_eq!(store.stats().unwrap().associations, 1);
}

#[test]
fn add_conn_resolves_product_by_name() {
    let mut store = seeded_store();
    store
        .add_conn_p_s(&product("Milk", "ignored"), &["milk"])
        .unwrap();

    let found = store.get_products_for_stem("milk").unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name(), "Milk");
}

#[test]
fn add_conn_fails_for_unresolvable_product() {
    let mut store = seeded_store();
    let err = store
        .add_conn_p_s(&product("Unknown", ""), &["unknown"])
        .unwrap_err();
    assert!(matches!(err, StoreError::ProductNotResolved { ref name } if name == "Unknown"));
}

#[test]
fn add_conn_with_no_stems_is_noop() {
    let mut store = seeded_store();
    store.add_conn_p_s(&product("Unknown", ""), &[]).unwrap();
    assert_eq!(store.stats().unwrap().associations, 0);
}

#[test]
fn get_products_for_unknown_stem_is_empty() {
    let store = seeded_store();
    assert!(store.get_products_for_stem("xyzzi").unwrap().is_empty());
}

// ===========================================
// Removal
// ===========================================

#[test]
fn remove_product_cascades_and_prunes_orphan_stems() {
    let mut store = seeded_store();
    let apples = store.get_product(id_of(&store, "Apples")).unwrap().unwrap();
    let eggs = store.get_product(id_of(&store, "Eggs")).unwrap().unwrap();
    store.add_conn_p_s(&apples, &["appl", "pair"]).unwrap();
    store.add_conn_p_s(&eggs, &["egg", "pair"]).unwrap();

    assert!(store.remove_product(apples.id().unwrap()).unwrap());

    let stats = store.stats().unwrap();
    assert_eq!(stats.products, 2);
    assert_eq!(stats.associations, 2);
    assert_eq!(stats.stems, 2, "'appl' should be pruned, 'pair' kept");
    assert!(store.get_products_for_stem("appl").unwrap().is_empty());
    assert_eq!(store.get_products_for_stem("pair").unwrap(), vec![eggs]);
}

#[test]
fn remove_missing_product_returns_false() {
    let mut store = seeded_store();
    assert!(!store.remove_product(ProductId::new(42)).unwrap());
}
