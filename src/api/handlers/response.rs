//! Response helpers shared by all handlers.
//!
//! Successful responses are `Json` values paired with a status code; failures
//! are always `{"error": "<message>"}` bodies.

use axum::{Json, http::StatusCode};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::db::DbError;

/// Error response DTO
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    #[schema(example = "Product not found")]
    pub error: String,
}

/// Result type returned by handlers.
pub type ApiResult<T> = Result<T, (StatusCode, Json<ErrorResponse>)>;

pub const INVALID_PRODUCT_ID: &str = "Invalid product ID";
pub const INVALID_PAYLOAD: &str = "Invalid request payload";
pub const PRODUCT_NOT_FOUND: &str = "Product not found";

/// Wrap a message as a JSON error body with the given status.
pub fn error_response(
    status: StatusCode,
    message: impl Into<String>,
) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

/// Map a storage failure to its HTTP form.
///
/// `NotFound` becomes 404; everything else is a 500 carrying the error text.
pub fn db_error_response(e: DbError) -> (StatusCode, Json<ErrorResponse>) {
    match e {
        DbError::NotFound { .. } => error_response(StatusCode::NOT_FOUND, PRODUCT_NOT_FOUND),
        _ => {
            error!(error = %e, "Storage operation failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}
