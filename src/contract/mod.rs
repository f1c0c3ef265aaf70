//! Contract layer - transport-agnostic models and errors
//!
//! NO serde derives on models - the REST DTOs own the wire shape.

pub mod error;
pub mod model;

pub use error::ProductsError;
pub use model::{Product, ProductDraft, ProductFields};
