//! Product Catalog Service
//!
//! A paginated HTTP CRUD API over a relational products table: offset
//! paged listing, get-by-id, create, update, and delete. The crate is
//! layered into contract (pure models and errors), domain (repository
//! contracts and validation), infra (SeaORM storage), and api (axum
//! REST surface).

// Public exports
pub mod contract;
pub use contract::{Product, ProductDraft, ProductFields, ProductsError};

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
