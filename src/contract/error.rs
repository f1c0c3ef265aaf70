//! Error taxonomy for the product catalog service
//!
//! These errors are transport-agnostic; the REST layer maps them onto
//! HTTP responses in api/rest/error.rs.

use thiserror::Error;

/// Product service errors.
#[derive(Debug, Error)]
pub enum ProductsError {
    /// No product exists with the requested id.
    #[error("product not found: {id}")]
    NotFound {
        /// Requested product id
        id: i32,
    },

    /// One or more required input fields are missing or blank.
    #[error("validation failed: {errors:?}")]
    Validation {
        /// One message per rejected field
        errors: Vec<String>,
    },

    /// The storage backend rejected an operation. Propagated unmodified,
    /// never retried.
    #[error("persistence failure")]
    Persistence(#[source] anyhow::Error),
}
