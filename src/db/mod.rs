//! Database abstraction layer.
//!
//! This module provides trait-based abstractions for data access,
//! allowing different storage backends to be swapped without changing
//! the HTTP layer.
//!
//! # Architecture
//!
//! - `error`: Storage-agnostic error types
//! - `models`: Domain entities (Product)
//! - `repository`: Trait definitions for data access
//! - `paths`: Database file location
//! - `sqlite`: SQLx-backed implementation

mod error;
mod models;
pub mod paths;
mod repository;
pub mod sqlite;

#[cfg(test)]
mod error_test;

pub use error::{DbError, DbResult};
pub use models::*;
pub use paths::resolve_db_path;
pub use repository::*;
pub use sqlite::SqliteDatabase;
