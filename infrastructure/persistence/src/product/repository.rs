use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{Product, ProductDraft};
use business::domain::product::repository::ProductRepository;
use business::domain::product::value_objects::ProductId;

use super::entity::{ProductEntity, price_to_decimal};
use crate::db::DEFAULT_QUERY_TIMEOUT;

pub struct ProductRepositoryPostgres {
    pool: PgPool,
    query_timeout: Duration,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self::with_query_timeout(pool, DEFAULT_QUERY_TIMEOUT)
    }

    pub fn with_query_timeout(pool: PgPool, query_timeout: Duration) -> Self {
        Self {
            pool,
            query_timeout,
        }
    }

    /// Runs one statement under the per-call deadline. Driver errors are
    /// logged here and never leave the persistence layer.
    async fn bounded<T, F>(&self, operation: &'static str, query: F) -> Result<T, RepositoryError>
    where
        F: Future<Output = Result<T, sqlx::Error>>,
    {
        match tokio::time::timeout(self.query_timeout, query).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => {
                tracing::error!(operation, error = %e, "products query failed");
                Err(RepositoryError::DatabaseError)
            }
            Err(_) => {
                tracing::warn!(
                    operation,
                    timeout_ms = self.query_timeout.as_millis() as u64,
                    "products query exceeded its deadline"
                );
                Err(RepositoryError::Timeout)
            }
        }
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError> {
        let entity = self
            .bounded(
                "get_by_id",
                sqlx::query_as::<_, ProductEntity>(
                    "SELECT id, name, quantity, price FROM products WHERE id = $1",
                )
                .bind(id.value())
                .fetch_optional(&self.pool),
            )
            .await?
            .ok_or(RepositoryError::NotFound)?;

        entity.into_domain()
    }

    async fn create(&self, draft: &ProductDraft) -> Result<Product, RepositoryError> {
        let price = price_to_decimal(draft.price)?;

        let entity = self
            .bounded(
                "create",
                sqlx::query_as::<_, ProductEntity>(
                    r#"INSERT INTO products (name, quantity, price)
                    VALUES ($1, $2, $3)
                    RETURNING id, name, quantity, price"#,
                )
                .bind(&draft.name)
                .bind(draft.quantity)
                .bind(price)
                .fetch_one(&self.pool),
            )
            .await?;

        entity.into_domain()
    }

    async fn update(&self, id: ProductId, draft: &ProductDraft) -> Result<Product, RepositoryError> {
        let price = price_to_decimal(draft.price)?;

        let entity = self
            .bounded(
                "update",
                sqlx::query_as::<_, ProductEntity>(
                    r#"UPDATE products
                    SET name = $1, quantity = $2, price = $3
                    WHERE id = $4
                    RETURNING id, name, quantity, price"#,
                )
                .bind(&draft.name)
                .bind(draft.quantity)
                .bind(price)
                .bind(id.value())
                .fetch_optional(&self.pool),
            )
            .await?
            .ok_or(RepositoryError::NotFound)?;

        entity.into_domain()
    }

    async fn delete(&self, id: ProductId) -> Result<(), RepositoryError> {
        let result = self
            .bounded(
                "delete",
                sqlx::query("DELETE FROM products WHERE id = $1")
                    .bind(id.value())
                    .execute(&self.pool),
            )
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
