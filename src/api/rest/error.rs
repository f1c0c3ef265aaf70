//! HTTP error mapping for the products API
//!
//! Response bodies are part of the API contract: rejected paging answers
//! 400 with a plain-text message, rejected input answers 400 with a
//! field-error list, lookups that miss answer 404 with an empty body.

use super::dto::ValidationErrorsDto;
use crate::contract::ProductsError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

/// Exact 400 body for rejected paging parameters.
pub const INVALID_PAGING_MESSAGE: &str =
    "Invalid page or pageSize. Both must be positive integers.";

/// API-level error, ready to render as an HTTP response.
#[derive(Debug)]
pub enum ApiError {
    /// 400 with a plain-text body
    InvalidPaging,
    /// 400 with a field-error list body
    Validation { errors: Vec<String> },
    /// 404 with an empty body
    NotFound,
    /// 500 with an empty body
    Internal,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::InvalidPaging => {
                (StatusCode::BAD_REQUEST, INVALID_PAGING_MESSAGE).into_response()
            }
            ApiError::Validation { errors } => {
                (StatusCode::BAD_REQUEST, Json(ValidationErrorsDto { errors })).into_response()
            }
            ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        }
    }
}

/// Map domain errors to API errors.
pub fn map_domain_error(error: ProductsError) -> ApiError {
    match error {
        ProductsError::NotFound { .. } => ApiError::NotFound,
        ProductsError::Validation { errors } => ApiError::Validation { errors },
        ProductsError::Persistence(error) => {
            tracing::error!("persistence failure: {error:?}");
            ApiError::Internal
        }
    }
}

/// Map repository failures to a generic server error.
pub fn map_repository_error(error: anyhow::Error) -> ApiError {
    map_domain_error(ProductsError::Persistence(error))
}
