//! Product management handlers.

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use utoipa::ToSchema;

use crate::api::AppState;
use crate::db::{Database, Product, ProductRepository};

use super::response::{
    ApiResult, ErrorResponse, INVALID_PAYLOAD, INVALID_PRODUCT_ID, db_error_response,
    error_response,
};

// =============================================================================
// DTOs (Data Transfer Objects)
// =============================================================================

/// Product response DTO
#[derive(Debug, Serialize, ToSchema)]
pub struct ProductResponse {
    /// Storage-assigned identifier
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Widget")]
    pub name: String,
    #[schema(example = 5)]
    pub quantity: i64,
    #[schema(example = 9.99)]
    pub price: f64,
}

impl From<Product> for ProductResponse {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            name: p.name,
            quantity: p.quantity,
            price: p.price,
        }
    }
}

/// Create/update product request DTO
///
/// Unknown fields are rejected. An `id` may be present but is never used:
/// creation lets storage assign it and updates take it from the path.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct ProductPayload {
    #[serde(default)]
    pub id: Option<i64>,
    #[schema(example = "Widget")]
    pub name: String,
    #[schema(example = 5)]
    pub quantity: i64,
    #[schema(example = 9.99)]
    pub price: f64,
}

impl ProductPayload {
    fn into_product(self, id: i64) -> Product {
        Product {
            id,
            name: self.name,
            quantity: self.quantity,
            price: self.price,
        }
    }
}

/// Body returned by a successful delete
#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteResponse {
    #[schema(example = "success")]
    pub result: String,
}

fn product_id(id: Result<Path<i64>, PathRejection>) -> ApiResult<i64> {
    id.map(|Path(id)| id)
        .map_err(|_| error_response(StatusCode::BAD_REQUEST, INVALID_PRODUCT_ID))
}

/// Decode a request body as a product regardless of its content type.
fn payload(body: &Bytes) -> ApiResult<ProductPayload> {
    serde_json::from_slice(body)
        .map_err(|_| error_response(StatusCode::BAD_REQUEST, INVALID_PAYLOAD))
}

// =============================================================================
// Handlers
// =============================================================================

/// List all products
///
/// Returns every product ordered by id
#[utoipa::path(
    get,
    path = "/products",
    tag = "products",
    responses(
        (status = 200, description = "All products", body = Vec<ProductResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_products<D: Database>(
    State(state): State<AppState<D>>,
) -> ApiResult<Json<Vec<ProductResponse>>> {
    let products = state
        .db()
        .products()
        .list()
        .await
        .map_err(db_error_response)?;

    Ok(Json(
        products.into_iter().map(ProductResponse::from).collect(),
    ))
}

/// Get a product by id
#[utoipa::path(
    get,
    path = "/product/{id}",
    tag = "products",
    params(("id" = i64, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product found", body = ProductResponse),
        (status = 400, description = "Invalid product ID", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_product<D: Database>(
    State(state): State<AppState<D>>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<ProductResponse>> {
    let id = product_id(id)?;

    let product = state
        .db()
        .products()
        .get(id)
        .await
        .map_err(db_error_response)?;

    Ok(Json(ProductResponse::from(product)))
}

/// Create a new product
///
/// The response carries the storage-assigned id
#[utoipa::path(
    post,
    path = "/product",
    tag = "products",
    request_body = ProductPayload,
    responses(
        (status = 201, description = "Product created", body = ProductResponse),
        (status = 400, description = "Invalid request payload", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_product<D: Database>(
    State(state): State<AppState<D>>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<ProductResponse>)> {
    let product = payload(&body)?.into_product(0);

    let created = state
        .db()
        .products()
        .create(&product)
        .await
        .map_err(db_error_response)?;

    debug!(id = created.id, "Created product");
    Ok((StatusCode::CREATED, Json(ProductResponse::from(created))))
}

/// Update a product
///
/// Overwrites every field except the id, which always comes from the path.
/// Updating an id that does not exist still answers 200.
#[utoipa::path(
    put,
    path = "/product/{id}",
    tag = "products",
    params(("id" = i64, Path, description = "Product ID")),
    request_body = ProductPayload,
    responses(
        (status = 200, description = "Product updated", body = ProductResponse),
        (status = 400, description = "Invalid product ID or request payload", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn update_product<D: Database>(
    State(state): State<AppState<D>>,
    id: Result<Path<i64>, PathRejection>,
    body: Bytes,
) -> ApiResult<Json<ProductResponse>> {
    let id = product_id(id)?;
    let product = payload(&body)?.into_product(id);

    let affected = state
        .db()
        .products()
        .update(id, &product)
        .await
        .map_err(db_error_response)?;

    if affected == 0 {
        debug!(id, "Update matched no product");
    }

    Ok(Json(ProductResponse::from(product)))
}

/// Delete a product
///
/// Deleting an id that does not exist still answers 200.
#[utoipa::path(
    delete,
    path = "/product/{id}",
    tag = "products",
    params(("id" = i64, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product deleted", body = DeleteResponse),
        (status = 400, description = "Invalid product ID", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_product<D: Database>(
    State(state): State<AppState<D>>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<DeleteResponse>> {
    let id = product_id(id)?;

    let affected = state
        .db()
        .products()
        .delete(id)
        .await
        .map_err(db_error_response)?;

    if affected == 0 {
        debug!(id, "Delete matched no product");
    }

    Ok(Json(DeleteResponse {
        result: "success".to_string(),
    }))
}
