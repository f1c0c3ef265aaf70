//! Route registration and OpenAPI document for the products resource

use super::dto::{ProductDto, ProductInputDto, ValidationErrorsDto};
use super::handlers;
use crate::domain::repository::ProductRepository;
use axum::{routing::get, Extension, Json, Router};
use std::sync::Arc;
use utoipa::OpenApi;

/// OpenAPI description of the products API, served as JSON alongside it.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "product-api",
        description = "Paginated CRUD service for a product catalog"
    ),
    paths(
        handlers::list_products,
        handlers::get_product,
        handlers::create_product,
        handlers::update_product,
        handlers::delete_product,
    ),
    components(schemas(ProductDto, ProductInputDto, ValidationErrorsDto)),
    tags((name = "products", description = "Product catalog operations"))
)]
pub struct ApiDoc;

/// Register all REST routes and attach the repository as an extension.
pub fn register_routes(router: Router, repository: Arc<dyn ProductRepository>) -> Router {
    router
        .route(
            "/api/products",
            get(handlers::list_products).post(handlers::create_product),
        )
        .route(
            "/api/products/{id}",
            get(handlers::get_product)
                .put(handlers::update_product)
                .delete(handlers::delete_product),
        )
        .route(
            "/api-docs/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        )
        .layer(Extension(repository))
}
