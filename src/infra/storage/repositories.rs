//! SeaORM repository implementations

use crate::domain::repository::{ProductRepository, Repository};
use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel, PrimaryKeyTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::marker::PhantomData;
use std::sync::Arc;

use super::entity;

/// Bridge between a SeaORM entity and the contract model it persists.
///
/// One impl per entity (see mapper.rs); everything the generic
/// repository needs beyond `EntityTrait` lives here.
pub trait StorageEntity: EntityTrait {
    /// Contract-side model this entity persists.
    type Domain: Send + Sync + 'static;

    /// Active model used for writes.
    type Active: ActiveModelTrait<Entity = Self> + ActiveModelBehavior + Send + 'static;

    /// Primary key column, also the stable ordering for pagination.
    fn id_column() -> Self::Column;

    fn into_domain(model: Self::Model) -> Self::Domain;

    fn as_active(domain: &Self::Domain) -> Self::Active;
}

/// Generic CRUD repository over a single SeaORM entity.
///
/// Every operation is one statement against the connection; the
/// database commits it atomically and any rejection propagates to the
/// caller untranslated.
pub struct SeaOrmRepository<E> {
    db: Arc<DatabaseConnection>,
    entity: PhantomData<E>,
}

impl<E> SeaOrmRepository<E> {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            db,
            entity: PhantomData,
        }
    }
}

#[async_trait]
impl<E> Repository<E::Domain> for SeaOrmRepository<E>
where
    E: StorageEntity + Send + Sync + 'static,
    E::Model: IntoActiveModel<E::Active> + Send + Sync,
    i32: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
{
    async fn get_by_id(&self, id: i32) -> Result<Option<E::Domain>> {
        let found = E::find_by_id(id).one(&*self.db).await?;

        Ok(found.map(E::into_domain))
    }

    async fn get_by_ids(&self, ids: &[i32]) -> Result<Vec<E::Domain>> {
        let rows = E::find()
            .filter(E::id_column().is_in(ids.iter().copied()))
            .order_by_asc(E::id_column())
            .all(&*self.db)
            .await?;

        Ok(rows.into_iter().map(E::into_domain).collect())
    }

    async fn get_all(&self) -> Result<Vec<E::Domain>> {
        let rows = E::find()
            .order_by_asc(E::id_column())
            .all(&*self.db)
            .await?;

        Ok(rows.into_iter().map(E::into_domain).collect())
    }

    async fn get_page(&self, page: u64, page_size: u64) -> Result<Vec<E::Domain>> {
        let rows = E::find()
            .order_by_asc(E::id_column())
            .offset(page.saturating_sub(1).saturating_mul(page_size))
            .limit(page_size)
            .all(&*self.db)
            .await?;

        Ok(rows.into_iter().map(E::into_domain).collect())
    }

    async fn add(&self, domain: &E::Domain) -> Result<E::Domain> {
        let mut active = E::as_active(domain);
        // Storage assigns the id; never trust the caller's value here.
        active.not_set(E::id_column());

        let model = active.insert(&*self.db).await?;

        Ok(E::into_domain(model))
    }

    async fn update(&self, domain: &E::Domain) -> Result<E::Domain> {
        let model = E::as_active(domain).update(&*self.db).await?;

        Ok(E::into_domain(model))
    }

    async fn delete(&self, domain: &E::Domain) -> Result<()> {
        E::as_active(domain).delete(&*self.db).await?;

        Ok(())
    }
}

impl ProductRepository for SeaOrmRepository<entity::Entity> {}

// Keeps the wiring in main.rs readable.
pub type SeaOrmProductRepository = SeaOrmRepository<entity::Entity>;
