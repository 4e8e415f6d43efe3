//! Tests for database error types.

use crate::db::{DbError, DbResult};

#[test]
fn not_found_error_displays_correctly() {
    let err = DbError::NotFound {
        entity_type: "Product".to_string(),
        id: "42".to_string(),
    };
    assert_eq!(err.to_string(), "Entity not found: Product with id '42'");
}

#[test]
fn product_not_found_uses_product_entity_type() {
    match DbError::product_not_found(7) {
        DbError::NotFound { entity_type, id } => {
            assert_eq!(entity_type, "Product");
            assert_eq!(id, "7");
        }
        other => panic!("Expected NotFound, got {:?}", other),
    }
}

#[test]
fn database_error_displays_correctly() {
    let err = DbError::Database {
        message: "no such table: product".to_string(),
    };
    assert_eq!(err.to_string(), "Database error: no such table: product");
}

#[test]
fn connection_error_displays_correctly() {
    let err = DbError::Connection {
        message: "unable to open database file".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Connection error: unable to open database file"
    );
}

#[test]
fn sqlx_errors_convert_to_database_errors() {
    let err: DbError = sqlx::Error::RowNotFound.into();
    assert!(matches!(err, DbError::Database { .. }));
}

#[test]
fn db_result_carries_errors() {
    fn fails() -> DbResult<()> {
        Err(DbError::product_not_found(1))
    }
    assert!(fails().is_err());
}
