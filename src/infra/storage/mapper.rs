//! Entity to model mappers
//!
//! Conversions between the SeaORM products entity and the contract
//! model, plus the `StorageEntity` impl the generic repository runs on.

use crate::contract::Product;
use sea_orm::ActiveValue::Set;

use super::entity;
use super::repositories::StorageEntity;

impl StorageEntity for entity::Entity {
    type Domain = Product;
    type Active = entity::ActiveModel;

    fn id_column() -> entity::Column {
        entity::Column::Id
    }

    fn into_domain(model: entity::Model) -> Product {
        Product {
            id: model.id,
            name: model.name,
            description: model.description,
            price: model.price,
            quantity: model.quantity,
            created_date: model.created_date,
            modified_date: model.modified_date,
        }
    }

    fn as_active(domain: &Product) -> entity::ActiveModel {
        entity::ActiveModel {
            id: Set(domain.id),
            name: Set(domain.name.clone()),
            description: Set(domain.description.clone()),
            price: Set(domain.price),
            quantity: Set(domain.quantity),
            created_date: Set(domain.created_date),
            modified_date: Set(domain.modified_date),
        }
    }
}
