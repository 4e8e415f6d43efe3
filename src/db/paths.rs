//! Database path resolution.

use std::env;
use std::path::PathBuf;

/// Environment variable consulted when no explicit path is given.
pub const DB_PATH_ENV: &str = "PRODUCT_API_DB";

/// File name used when neither a flag nor the environment names a database.
pub const DEFAULT_DB_FILE: &str = "products.db";

/// Resolve the database file path.
///
/// Precedence: explicit path > `PRODUCT_API_DB` > `products.db` in the
/// working directory.
pub fn resolve_db_path(explicit: Option<PathBuf>) -> PathBuf {
    explicit
        .or_else(|| env::var(DB_PATH_ENV).ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_FILE))
}
