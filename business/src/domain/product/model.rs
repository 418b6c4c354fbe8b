use super::errors::ProductError;
use super::value_objects::ProductId;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub quantity: i32,
    pub price: f64,
}

impl Product {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(id: ProductId, name: String, quantity: i32, price: f64) -> Self {
        Self {
            id,
            name,
            quantity,
            price,
        }
    }
}

/// Validated field set for a product that has no identity yet.
///
/// Used both to create a row and to fully replace the mutable fields of an
/// existing one.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub quantity: i32,
    pub price: f64,
}

/// Longest name the `products.name` column holds, counted in characters.
pub const MAX_NAME_CHARS: usize = 255;

/// Exclusive bound on `|price|`; `NUMERIC(17, 7)` keeps ten integer digits.
pub const PRICE_LIMIT: f64 = 1.0e10;

pub struct NewProductProps {
    pub name: String,
    pub quantity: i32,
    pub price: f64,
}

impl ProductDraft {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        if props.name.trim().is_empty() {
            return Err(ProductError::NameEmpty);
        }

        if props.name.chars().count() > MAX_NAME_CHARS {
            return Err(ProductError::NameTooLong);
        }

        if !props.price.is_finite() || props.price.abs() >= PRICE_LIMIT {
            return Err(ProductError::PriceInvalid);
        }

        Ok(Self {
            name: props.name,
            quantity: props.quantity,
            price: props.price,
        })
    }

    /// Attaches the identity assigned by the store.
    pub fn into_product(self, id: ProductId) -> Product {
        Product::from_repository(id, self.name, self.quantity, self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn props(name: &str, quantity: i32, price: f64) -> NewProductProps {
        NewProductProps {
            name: name.to_string(),
            quantity,
            price,
        }
    }

    #[test]
    fn should_build_draft_when_fields_are_valid() {
        let draft = ProductDraft::new(props("chair", 1, 100.0)).unwrap();

        assert_eq!(draft.name, "chair");
        assert_eq!(draft.quantity, 1);
        assert_eq!(draft.price, 100.0);
    }

    #[test]
    fn should_reject_draft_when_name_is_blank() {
        let result = ProductDraft::new(props("   ", 1, 1.0));
        assert!(matches!(result, Err(ProductError::NameEmpty)));
    }

    #[test]
    fn should_reject_draft_when_price_is_not_finite() {
        assert!(matches!(
            ProductDraft::new(props("chair", 1, f64::NAN)),
            Err(ProductError::PriceInvalid)
        ));
        assert!(matches!(
            ProductDraft::new(props("chair", 1, f64::INFINITY)),
            Err(ProductError::PriceInvalid)
        ));
    }

    #[test]
    fn should_accept_name_at_column_width_counted_in_chars() {
        let name = "é".repeat(MAX_NAME_CHARS);
        let draft = ProductDraft::new(props(&name, 1, 1.0)).unwrap();
        assert_eq!(draft.name.chars().count(), MAX_NAME_CHARS);
    }

    #[test]
    fn should_reject_draft_when_name_exceeds_column_width() {
        let name = "a".repeat(MAX_NAME_CHARS + 1);
        let result = ProductDraft::new(props(&name, 1, 1.0));
        assert!(matches!(result, Err(ProductError::NameTooLong)));
    }

    #[test]
    fn should_reject_draft_when_price_overflows_column() {
        for price in [PRICE_LIMIT, -PRICE_LIMIT, 1.0e12] {
            assert!(matches!(
                ProductDraft::new(props("chair", 1, price)),
                Err(ProductError::PriceInvalid)
            ));
        }

        let draft = ProductDraft::new(props("chair", 1, 9_999_999_999.0)).unwrap();
        assert_eq!(draft.price, 9_999_999_999.0);
    }

    #[test]
    fn should_keep_assigned_id_when_turned_into_product() {
        let id = ProductId::new(7).unwrap();
        let product = ProductDraft::new(props("connector", 10, 10.0))
            .unwrap()
            .into_product(id);

        assert_eq!(product.id, id);
        assert_eq!(product.name, "connector");
    }

    proptest! {
        #[test]
        fn any_whitespace_only_name_is_rejected(name in "[ \t\n]{0,16}", quantity in any::<i32>()) {
            prop_assert!(matches!(
                ProductDraft::new(props(&name, quantity, 1.0)),
                Err(ProductError::NameEmpty)
            ));
        }

        #[test]
        fn any_named_draft_keeps_its_fields(
            name in "[a-z][a-z ]{0,30}",
            quantity in any::<i32>(),
            price in -1.0e9f64..1.0e9f64,
        ) {
            let draft = ProductDraft::new(props(&name, quantity, price)).unwrap();
            prop_assert_eq!(draft.name, name);
            prop_assert_eq!(draft.quantity, quantity);
            prop_assert_eq!(draft.price, price);
        }
    }
}
