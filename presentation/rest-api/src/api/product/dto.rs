use poem_openapi::Object;

use business::domain::product::model::Product;

#[derive(Debug, Clone, Object)]
pub struct CreateProductRequest {
    /// Product name (cannot be empty)
    pub name: String,
    /// Units in stock
    pub quantity: i32,
    /// Unit price
    pub price: f64,
}

/// Full replacement of a product's mutable fields.
#[derive(Debug, Clone, Object)]
pub struct UpdateProductRequest {
    /// Product name (cannot be empty)
    pub name: String,
    /// Units in stock
    pub quantity: i32,
    /// Unit price
    pub price: f64,
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Product identifier assigned by the store
    pub id: i64,
    /// Product name
    pub name: String,
    /// Units in stock
    pub quantity: i32,
    /// Unit price
    pub price: f64,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.value(),
            name: product.name,
            quantity: product.quantity,
            price: product.price,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct DeleteProductResult {
    pub result: String,
}

impl DeleteProductResult {
    pub fn success() -> Self {
        Self {
            result: "success".to_string(),
        }
    }
}
