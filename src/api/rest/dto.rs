//! REST DTOs with serde derives for the HTTP API

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Product response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    /// Storage-assigned identifier
    pub id: i32,

    /// Display name
    #[schema(example = "Wireless Keyboard")]
    pub name: String,

    /// Free-form description
    pub description: String,

    /// Unit price as a JSON number
    #[schema(value_type = f64, example = 49.5)]
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,

    /// Units on hand
    pub quantity: i32,

    /// Insertion timestamp
    pub created_date: chrono::DateTime<chrono::Utc>,

    /// Last update timestamp
    pub modified_date: chrono::DateTime<chrono::Utc>,
}

/// Create/update product request
///
/// Every field is required; absent or blank fields are reported one
/// message apiece by validation.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductInputDto {
    #[schema(example = "Wireless Keyboard")]
    pub name: Option<String>,

    pub description: Option<String>,

    #[schema(value_type = Option<f64>, example = 49.5)]
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub price: Option<Decimal>,

    pub quantity: Option<i32>,
}

/// Validation failure body: one message per rejected field.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ValidationErrorsDto {
    #[schema(example = json!(["Name is Required"]))]
    pub errors: Vec<String>,
}
