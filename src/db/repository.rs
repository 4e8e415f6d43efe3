//! Repository traits for data access abstraction.
//!
//! These traits define the contract for data access, allowing different
//! storage backends to be swapped without changing the HTTP layer.

use std::future::Future;

use crate::db::{DbResult, models::Product};

/// Repository for Product operations.
///
/// Every call is a fresh round trip to storage; nothing is cached.
pub trait ProductRepository {
    /// Get all products ordered by id ascending.
    fn list(&self) -> impl Future<Output = DbResult<Vec<Product>>> + Send;

    /// Get a product by id.
    ///
    /// Returns `DbError::NotFound` when no row matches.
    fn get(&self, id: i64) -> impl Future<Output = DbResult<Product>> + Send;

    /// Insert a product and return it with its storage-assigned id.
    ///
    /// The `id` field of the input is ignored.
    fn create(&self, product: &Product) -> impl Future<Output = DbResult<Product>> + Send;

    /// Overwrite every field except the id of the row at `id`.
    ///
    /// Returns the number of rows affected. A missing id is not an error.
    fn update(&self, id: i64, product: &Product) -> impl Future<Output = DbResult<u64>> + Send;

    /// Delete the row at `id`.
    ///
    /// Returns the number of rows affected. A missing id is not an error.
    fn delete(&self, id: i64) -> impl Future<Output = DbResult<u64>> + Send;
}

/// Combined database interface.
///
/// Repositories are exposed through associated types so handlers stay
/// statically dispatched.
pub trait Database: Send + Sync {
    type Products<'a>: ProductRepository + Send + Sync
    where
        Self: 'a;

    /// Create the tables the repositories rely on, if missing.
    fn init_schema(&self) -> impl Future<Output = DbResult<()>> + Send;

    /// Get the product repository.
    fn products(&self) -> Self::Products<'_>;
}
