use bigdecimal::BigDecimal;
use num_traits::{FromPrimitive, ToPrimitive};
use sqlx::FromRow;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::value_objects::ProductId;

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: i64,
    pub name: String,
    pub quantity: i32,
    pub price: BigDecimal,
}

impl ProductEntity {
    pub fn into_domain(self) -> Result<Product, RepositoryError> {
        let id = ProductId::new(self.id).map_err(|_| {
            tracing::error!(id = self.id, "products row carries a non-positive id");
            RepositoryError::DatabaseError
        })?;
        let price = self.price.to_f64().ok_or_else(|| {
            tracing::error!(id = self.id, price = %self.price, "price does not fit in f64");
            RepositoryError::DatabaseError
        })?;

        Ok(Product::from_repository(id, self.name, self.quantity, price))
    }
}

/// Converts a domain price into the NUMERIC bind value.
pub fn price_to_decimal(price: f64) -> Result<BigDecimal, RepositoryError> {
    BigDecimal::from_f64(price).ok_or(RepositoryError::DatabaseError)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn should_convert_row_into_domain_product() {
        let entity = ProductEntity {
            id: 3,
            name: "connector".to_string(),
            quantity: 10,
            price: BigDecimal::from_str("10.0000000").unwrap(),
        };

        let product = entity.into_domain().unwrap();

        assert_eq!(product.id.value(), 3);
        assert_eq!(product.name, "connector");
        assert_eq!(product.quantity, 10);
        assert_eq!(product.price, 10.0);
    }

    #[test]
    fn should_reject_row_with_non_positive_id() {
        let entity = ProductEntity {
            id: 0,
            name: "ghost".to_string(),
            quantity: 1,
            price: BigDecimal::from(1),
        };

        assert!(matches!(
            entity.into_domain(),
            Err(RepositoryError::DatabaseError)
        ));
    }

    #[test]
    fn should_convert_price_to_decimal() {
        let decimal = price_to_decimal(100.0).unwrap();
        assert_eq!(decimal, BigDecimal::from(100));
    }

    #[test]
    fn should_refuse_nan_price() {
        assert!(price_to_decimal(f64::NAN).is_err());
    }
}
