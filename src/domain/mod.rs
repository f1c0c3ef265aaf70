//! Domain layer - repository contracts and input validation

pub mod repository;
pub mod validation;

pub use repository::{ProductRepository, Repository};
