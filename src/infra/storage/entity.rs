//! SeaORM entity for the products table

use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::Set;
use sea_orm::{ConnectionTrait, DbErr};

/// Products table entity
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    /// Auto-incremented identifier
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Display name, at most 100 characters
    pub name: String,

    /// Free-form description
    #[sea_orm(column_type = "Text")]
    pub description: String,

    /// Unit price, decimal(18, 2)
    #[sea_orm(column_type = "Decimal(Some((18, 2)))")]
    pub price: Decimal,

    /// Units on hand
    pub quantity: i32,

    /// Insertion timestamp
    pub created_date: DateTimeUtc,

    /// Last update timestamp
    pub modified_date: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    /// Timestamps belong to storage: `created_date` is stamped once at
    /// insert, `modified_date` on every write.
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let now = chrono::Utc::now();
        if insert {
            self.created_date = Set(now);
        }
        self.modified_date = Set(now);
        Ok(self)
    }
}
