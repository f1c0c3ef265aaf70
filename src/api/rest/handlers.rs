//! HTTP request handlers - validation, repository calls, status selection

use super::dto::{ProductDto, ProductInputDto, ValidationErrorsDto};
use super::error::{map_domain_error, map_repository_error, ApiError};
use crate::contract::{Product, ProductsError};
use crate::domain::repository::ProductRepository;
use crate::domain::validation;
use axum::{
    extract::{Path, Query},
    http::{header, HeaderName, StatusCode},
    Extension, Json,
};
use serde::Deserialize;
use std::sync::Arc;

/// Query parameters for the paginated product listing.
#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListProductsQuery {
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_page_size")]
    pub page_size: i64,
}

fn default_page() -> i64 {
    1
}

fn default_page_size() -> i64 {
    10
}

/// 201 response carrying the persisted product and a location reference.
type CreatedResponse = (StatusCode, [(HeaderName, String); 1], Json<ProductDto>);

fn created(product: Product) -> CreatedResponse {
    let location = [(header::LOCATION, format!("/api/products/{}", product.id))];
    (StatusCode::CREATED, location, Json(product.into()))
}

/// List one page of products.
///
/// An empty page is a successful response, not an error.
#[utoipa::path(
    get,
    path = "/api/products",
    tag = "products",
    params(ListProductsQuery),
    responses(
        (status = 200, description = "One page of products", body = [ProductDto]),
        (status = 400, description = "Non-positive page or pageSize"),
    ),
)]
pub async fn list_products(
    Extension(repository): Extension<Arc<dyn ProductRepository>>,
    Query(query): Query<ListProductsQuery>,
) -> Result<Json<Vec<ProductDto>>, ApiError> {
    if query.page <= 0 || query.page_size <= 0 {
        return Err(ApiError::InvalidPaging);
    }

    let products = repository
        .get_page(query.page as u64, query.page_size as u64)
        .await
        .map_err(map_repository_error)?;

    Ok(Json(products.into_iter().map(ProductDto::from).collect()))
}

/// Get a single product by id.
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = "products",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "The requested product", body = ProductDto),
        (status = 404, description = "No product with this id"),
    ),
)]
pub async fn get_product(
    Extension(repository): Extension<Arc<dyn ProductRepository>>,
    Path(id): Path<i32>,
) -> Result<Json<ProductDto>, ApiError> {
    let product = repository
        .get_by_id(id)
        .await
        .map_err(map_repository_error)?
        .ok_or(ProductsError::NotFound { id })
        .map_err(map_domain_error)?;

    Ok(Json(product.into()))
}

/// Create a product.
#[utoipa::path(
    post,
    path = "/api/products",
    tag = "products",
    request_body = ProductInputDto,
    responses(
        (status = 201, description = "Created product, Location header set", body = ProductDto),
        (status = 400, description = "Missing required fields", body = ValidationErrorsDto),
    ),
)]
pub async fn create_product(
    Extension(repository): Extension<Arc<dyn ProductRepository>>,
    Json(input): Json<ProductInputDto>,
) -> Result<CreatedResponse, ApiError> {
    let fields = validation::validate(&input.into()).map_err(map_domain_error)?;

    let product = repository
        .add(&Product::new(fields))
        .await
        .map_err(map_repository_error)?;

    Ok(created(product))
}

/// Update a product wholesale.
///
/// Validation runs before the existence check, so invalid input answers
/// 400 even for ids that do not exist. The 201-with-location answer for
/// updates is kept for client compatibility.
#[utoipa::path(
    put,
    path = "/api/products/{id}",
    tag = "products",
    params(("id" = i32, Path, description = "Product id")),
    request_body = ProductInputDto,
    responses(
        (status = 201, description = "Updated product, Location header set", body = ProductDto),
        (status = 400, description = "Missing required fields", body = ValidationErrorsDto),
        (status = 404, description = "No product with this id"),
    ),
)]
pub async fn update_product(
    Extension(repository): Extension<Arc<dyn ProductRepository>>,
    Path(id): Path<i32>,
    Json(input): Json<ProductInputDto>,
) -> Result<CreatedResponse, ApiError> {
    let fields = validation::validate(&input.into()).map_err(map_domain_error)?;

    let mut product = repository
        .get_by_id(id)
        .await
        .map_err(map_repository_error)?
        .ok_or(ProductsError::NotFound { id })
        .map_err(map_domain_error)?;

    product.apply(fields);

    let product = repository
        .update(&product)
        .await
        .map_err(map_repository_error)?;

    Ok(created(product))
}

/// Delete a product.
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = "products",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 404, description = "No product with this id"),
    ),
)]
pub async fn delete_product(
    Extension(repository): Extension<Arc<dyn ProductRepository>>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    let product = repository
        .get_by_id(id)
        .await
        .map_err(map_repository_error)?
        .ok_or(ProductsError::NotFound { id })
        .map_err(map_domain_error)?;

    repository
        .delete(&product)
        .await
        .map_err(map_repository_error)?;

    Ok(StatusCode::NO_CONTENT)
}
