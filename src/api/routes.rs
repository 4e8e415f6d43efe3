//! API route configuration.

use axum::Router;
use axum::routing::{delete, get, post, put};
use tower_http::normalize_path::NormalizePath;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use super::handlers::{self, DeleteResponse, ErrorResponse, ProductPayload, ProductResponse};
use super::state::AppState;
use crate::db::Database;

/// Build routes with generic database type.
///
/// This macro reduces boilerplate when registering handlers that are generic
/// over the Database trait. It applies the turbofish operator automatically.
macro_rules! routes {
    ($D:ty => {
        $($method:ident $path:literal => $($handler:ident)::+),* $(,)?
    }) => {{
        let router = Router::new();
        $(
            let router = router.route($path, $method($($handler)::+::<$D>));
        )*
        router
    }};
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Product API",
        version = "0.1.0",
        description = "CRUD API for products",
        license(name = "GPL-2.0")
    ),
    paths(
        handlers::list_products,
        handlers::get_product,
        handlers::create_product,
        handlers::update_product,
        handlers::delete_product,
    ),
    components(schemas(ProductResponse, ProductPayload, DeleteResponse, ErrorResponse)),
    tags((name = "products", description = "Product management endpoints"))
)]
pub struct ApiDoc;

/// The full HTTP service: router plus trailing-slash normalization.
pub type App = NormalizePath<Router>;

/// Create the API router.
///
/// Unmatched paths and methods fall through to axum's default 404/405.
pub fn create_router<D: Database + 'static>(state: AppState<D>, enable_docs: bool) -> Router {
    let product_routes = routes!(D => {
        get "/products" => handlers::list_products,
        post "/product" => handlers::create_product,
        put "/product/{id}" => handlers::update_product,
        get "/product/{id}" => handlers::get_product,
        delete "/product/{id}" => handlers::delete_product,
    });

    let router = if enable_docs {
        product_routes.merge(Scalar::with_url("/docs", ApiDoc::openapi()))
    } else {
        product_routes
    };

    router.with_state(state)
}

/// Create the servable application.
///
/// Path normalization has to wrap the router rather than be layered inside
/// it, otherwise routing happens before the trailing slash is trimmed.
pub fn create_app<D: Database + 'static>(state: AppState<D>, enable_docs: bool) -> App {
    let router = create_router(state, enable_docs).layer(TraceLayer::new_for_http());
    NormalizePath::trim_trailing_slash(router)
}
