//! Required-field validation for product input

use crate::contract::{ProductDraft, ProductFields, ProductsError};

/// Check every required field of a draft, collecting one message per
/// missing field, then hand back the typed business fields.
///
/// Text fields count as missing when absent or blank. Runs before any
/// mutation is attempted; a failed validation never touches storage.
pub fn validate(draft: &ProductDraft) -> Result<ProductFields, ProductsError> {
    let mut errors = Vec::new();

    let name = required_text(&draft.name, "Name", &mut errors);
    let description = required_text(&draft.description, "Description", &mut errors);

    let price = match draft.price {
        Some(price) => Some(price),
        None => {
            errors.push("Price is Required".to_string());
            None
        }
    };

    let quantity = match draft.quantity {
        Some(quantity) => Some(quantity),
        None => {
            errors.push("Quantity is Required".to_string());
            None
        }
    };

    match (name, description, price, quantity) {
        (Some(name), Some(description), Some(price), Some(quantity)) => Ok(ProductFields {
            name,
            description,
            price,
            quantity,
        }),
        _ => Err(ProductsError::Validation { errors }),
    }
}

fn required_text(value: &Option<String>, field: &str, errors: &mut Vec<String>) -> Option<String> {
    match value {
        Some(text) if !text.trim().is_empty() => Some(text.clone()),
        _ => {
            errors.push(format!("{field} is Required"));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn full_draft() -> ProductDraft {
        ProductDraft {
            name: Some("Wireless Keyboard".to_string()),
            description: Some("Low profile, USB-C".to_string()),
            price: Some(Decimal::new(4950, 2)),
            quantity: Some(12),
        }
    }

    #[test]
    fn accepts_complete_input() {
        let fields = validate(&full_draft()).unwrap();
        assert_eq!(fields.name, "Wireless Keyboard");
        assert_eq!(fields.price, Decimal::new(4950, 2));
        assert_eq!(fields.quantity, 12);
    }

    #[test]
    fn empty_draft_flags_every_field_in_order() {
        let result = validate(&ProductDraft::default());
        match result {
            Err(ProductsError::Validation { errors }) => {
                assert_eq!(
                    errors,
                    vec![
                        "Name is Required",
                        "Description is Required",
                        "Price is Required",
                        "Quantity is Required",
                    ]
                );
            }
            other => panic!("expected a validation error, got {other:?}"),
        }
    }

    #[test]
    fn blank_name_counts_as_missing() {
        let mut draft = full_draft();
        draft.name = Some("   ".to_string());

        let result = validate(&draft);
        match result {
            Err(ProductsError::Validation { errors }) => {
                assert_eq!(errors, vec!["Name is Required"]);
            }
            other => panic!("expected a validation error, got {other:?}"),
        }
    }

    #[test]
    fn single_missing_field_yields_single_message() {
        let mut draft = full_draft();
        draft.quantity = None;

        let result = validate(&draft);
        match result {
            Err(ProductsError::Validation { errors }) => {
                assert_eq!(errors, vec!["Quantity is Required"]);
            }
            other => panic!("expected a validation error, got {other:?}"),
        }
    }
}
