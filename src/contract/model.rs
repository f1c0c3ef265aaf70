//! Contract models for the product catalog

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// A persisted product.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Storage-assigned identifier, immutable after creation.
    pub id: i32,

    /// Display name, at most 100 characters.
    pub name: String,

    /// Free-form description, unbounded length.
    pub description: String,

    /// Unit price, 18 significant digits with 2 fractional.
    pub price: Decimal,

    /// Units on hand.
    pub quantity: i32,

    /// Set once when the row is inserted.
    pub created_date: DateTime<Utc>,

    /// Refreshed on every update.
    pub modified_date: DateTime<Utc>,
}

/// Unvalidated create/update input as received from a client.
///
/// Every field is optional here so that validation can report each
/// missing field individually.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDraft {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub quantity: Option<i32>,
}

/// The four business fields after validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFields {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub quantity: i32,
}

impl Product {
    /// Build a product ready for insertion. The id and both timestamps
    /// are placeholders; storage assigns them when the row is written.
    pub fn new(fields: ProductFields) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            name: fields.name,
            description: fields.description,
            price: fields.price,
            quantity: fields.quantity,
            created_date: now,
            modified_date: now,
        }
    }

    /// Overwrite the business fields wholesale. Timestamps are left
    /// alone; storage refreshes `modified_date` on update.
    pub fn apply(&mut self, fields: ProductFields) {
        self.name = fields.name;
        self.description = fields.description;
        self.price = fields.price;
        self.quantity = fields.quantity;
    }
}
