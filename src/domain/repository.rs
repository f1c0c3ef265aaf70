//! Repository contracts for the product catalog
//!
//! A generic CRUD trait plus its product-bound specialization; the
//! SeaORM-backed implementation lives in infra/storage/repositories.rs.

use crate::contract::Product;
use anyhow::Result;
use async_trait::async_trait;

/// CRUD operations shared by every entity repository.
///
/// Paging is offset-based over a stable id order. `get_page` trusts its
/// caller to pass positive numbers and answers an empty page when the
/// offset runs past the end of the table.
#[async_trait]
pub trait Repository<T>: Send + Sync {
    /// Find one entity by id.
    async fn get_by_id(&self, id: i32) -> Result<Option<T>>;

    /// Find the entities whose id is in `ids`; missing ids are
    /// silently omitted.
    async fn get_by_ids(&self, ids: &[i32]) -> Result<Vec<T>>;

    /// Enumerate every entity.
    async fn get_all(&self) -> Result<Vec<T>>;

    /// Fetch one page, skipping `(page - 1) * page_size` entities.
    async fn get_page(&self, page: u64, page_size: u64) -> Result<Vec<T>>;

    /// Insert a new entity; returns it as persisted, with the
    /// storage-assigned id and timestamps.
    async fn add(&self, entity: &T) -> Result<T>;

    /// Overwrite an existing entity; returns it as persisted.
    async fn update(&self, entity: &T) -> Result<T>;

    /// Hard-delete an entity.
    async fn delete(&self, entity: &T) -> Result<()>;
}

/// Product-bound repository.
///
/// Adds no behavior today; product-specific queries grow here without
/// widening the generic contract.
pub trait ProductRepository: Repository<Product> {}
