//! SQLite ProductRepository implementation.

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use crate::db::{DbError, DbResult, Product, ProductRepository};

/// SQLx-backed product repository.
pub struct SqliteProductRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

/// Column type mismatches (e.g. a foreign `product` table) are errors, not panics.
fn product_from_row(row: &SqliteRow) -> DbResult<Product> {
    Ok(Product {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        quantity: row.try_get("quantity")?,
        price: row.try_get("price")?,
    })
}

impl<'a> ProductRepository for SqliteProductRepository<'a> {
    async fn list(&self) -> DbResult<Vec<Product>> {
        let rows = sqlx::query("SELECT id, name, quantity, price FROM product ORDER BY id ASC")
            .fetch_all(self.pool)
            .await?;

        rows.iter().map(product_from_row).collect()
    }

    async fn get(&self, id: i64) -> DbResult<Product> {
        let row = sqlx::query("SELECT id, name, quantity, price FROM product WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        match row {
            Some(row) => product_from_row(&row),
            None => Err(DbError::product_not_found(id)),
        }
    }

    async fn create(&self, product: &Product) -> DbResult<Product> {
        let result = sqlx::query("INSERT INTO product (name, quantity, price) VALUES (?, ?, ?)")
            .bind(&product.name)
            .bind(product.quantity)
            .bind(product.price)
            .execute(self.pool)
            .await?;

        Ok(Product {
            id: result.last_insert_rowid(),
            name: product.name.clone(),
            quantity: product.quantity,
            price: product.price,
        })
    }

    async fn update(&self, id: i64, product: &Product) -> DbResult<u64> {
        let result = sqlx::query("UPDATE product SET name = ?, quantity = ?, price = ? WHERE id = ?")
            .bind(&product.name)
            .bind(product.quantity)
            .bind(product.price)
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> DbResult<u64> {
        let result = sqlx::query("DELETE FROM product WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
