//! Product CRUD service.
//!
//! `db` holds the storage layer (models, repository traits, SQLite backend);
//! `api` holds the HTTP layer built on axum.

pub mod api;
pub mod db;
