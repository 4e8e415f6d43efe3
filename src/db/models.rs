//! Domain models for the product database.
//!
//! These models are storage-agnostic and represent the core entities
//! used throughout the application.

use serde::{Deserialize, Serialize};

/// A product held in inventory.
///
/// `id` is assigned by storage on insert and never changes afterwards.
/// Callers constructing a product for insertion can leave it at `0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub quantity: i64,
    pub price: f64,
}

impl Product {
    /// Build a product that has not been persisted yet.
    pub fn new(name: impl Into<String>, quantity: i64, price: f64) -> Self {
        Self {
            id: 0,
            name: name.into(),
            quantity,
            price,
        }
    }
}
