//! Mapper implementations for converting between DTOs and contract models
//!
//! Bidirectional, field-by-field. The id and both timestamps never
//! cross into the input shape in either direction.

use super::dto::{ProductDto, ProductInputDto};
use crate::contract::{Product, ProductDraft};

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            quantity: product.quantity,
            created_date: product.created_date,
            modified_date: product.modified_date,
        }
    }
}

impl From<ProductInputDto> for ProductDraft {
    fn from(input: ProductInputDto) -> Self {
        Self {
            name: input.name,
            description: input.description,
            price: input.price,
            quantity: input.quantity,
        }
    }
}

impl From<Product> for ProductInputDto {
    fn from(product: Product) -> Self {
        Self {
            name: Some(product.name),
            description: Some(product.description),
            price: Some(product.price),
            quantity: Some(product.quantity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal::Decimal;

    fn product() -> Product {
        let now = Utc::now();
        Product {
            id: 7,
            name: "Wireless Keyboard".to_string(),
            description: "Low profile, USB-C".to_string(),
            price: Decimal::new(4950, 2),
            quantity: 12,
            created_date: now,
            modified_date: now,
        }
    }

    #[test]
    fn dto_carries_identity_and_timestamps() {
        let source = product();
        let dto = ProductDto::from(source.clone());

        assert_eq!(dto.id, 7);
        assert_eq!(dto.name, source.name);
        assert_eq!(dto.price, source.price);
        assert_eq!(dto.created_date, source.created_date);
        assert_eq!(dto.modified_date, source.modified_date);
    }

    #[test]
    fn reverse_map_keeps_only_the_business_fields() {
        // ProductInputDto has no id or timestamp fields; only the four
        // business fields survive the reverse conversion.
        let input = ProductInputDto::from(product());

        assert_eq!(input.name.as_deref(), Some("Wireless Keyboard"));
        assert_eq!(input.description.as_deref(), Some("Low profile, USB-C"));
        assert_eq!(input.price, Some(Decimal::new(4950, 2)));
        assert_eq!(input.quantity, Some(12));
    }

    #[test]
    fn input_maps_into_a_draft_field_for_field() {
        let draft: ProductDraft = ProductInputDto::from(product()).into();

        assert_eq!(draft.name.as_deref(), Some("Wireless Keyboard"));
        assert_eq!(draft.description.as_deref(), Some("Low profile, USB-C"));
        assert_eq!(draft.price, Some(Decimal::new(4950, 2)));
        assert_eq!(draft.quantity, Some(12));
    }
}
