//! Tests for SQLite database connection and schema setup.

use crate::db::{Database, Product, ProductRepository, SqliteDatabase};

#[tokio::test(flavor = "multi_thread")]
async fn init_schema_creates_product_table() {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");

    db.init_schema().await.expect("Schema setup should succeed");

    let tables: Vec<String> =
        sqlx::query_scalar("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
            .fetch_all(db.pool())
            .await
            .expect("Query should succeed");

    assert!(
        tables.iter().any(|t| t == "product"),
        "Missing table: product. Found tables: {:?}",
        tables
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn init_schema_is_idempotent() {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");

    db.init_schema().await.expect("First run should succeed");
    db.products()
        .create(&Product::new("Widget", 5, 9.99))
        .await
        .expect("Create should succeed");

    db.init_schema().await.expect("Second run should succeed");

    let products = db.products().list().await.expect("List should succeed");
    assert_eq!(products.len(), 1, "Existing rows must survive a re-run");
}

#[tokio::test(flavor = "multi_thread")]
async fn queries_fail_without_schema() {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");

    let result = db.products().list().await;
    assert!(result.is_err(), "Listing without a table should fail");
}

#[tokio::test(flavor = "multi_thread")]
async fn open_creates_file_and_persists_rows() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("products.db");

    {
        let db = SqliteDatabase::open(&path).await.expect("Open should succeed");
        db.init_schema().await.expect("Schema setup should succeed");
        db.products()
            .create(&Product::new("Gadget", 3, 19.5))
            .await
            .expect("Create should succeed");
        db.pool().close().await;
    }

    assert!(path.exists(), "Database file should be created");

    let db = SqliteDatabase::open(&path).await.expect("Reopen should succeed");
    let products = db.products().list().await.expect("List should succeed");
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].name, "Gadget");
}

#[tokio::test(flavor = "multi_thread")]
async fn open_fails_for_missing_directory() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("missing").join("products.db");

    let result = SqliteDatabase::open(&path).await;
    assert!(result.is_err());
}
