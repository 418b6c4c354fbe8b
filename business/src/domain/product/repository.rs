use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{Product, ProductDraft};
use super::value_objects::ProductId;

/// Single-row access to the products table.
///
/// Every operation is one statement; a missing row is reported as
/// `RepositoryError::NotFound`.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError>;
    async fn create(&self, draft: &ProductDraft) -> Result<Product, RepositoryError>;
    async fn update(&self, id: ProductId, draft: &ProductDraft) -> Result<Product, RepositoryError>;
    async fn delete(&self, id: ProductId) -> Result<(), RepositoryError>;
}
