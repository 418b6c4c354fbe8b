use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;
use std::{str::FromStr, time::Duration};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("database.invalid_url")]
    InvalidUrl,
    #[error("database.connection_error")]
    ConnectionError,
    #[error("database.schema_error")]
    SchemaError,
}

/// Default upper bound for a single statement issued by a repository.
pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(5);

/// Table layout for the product store. `IF NOT EXISTS` keeps it idempotent.
const PRODUCTS_TABLE: &str = r#"CREATE TABLE IF NOT EXISTS products (
    id BIGSERIAL PRIMARY KEY,
    name VARCHAR(255) NOT NULL,
    quantity INTEGER NOT NULL,
    price NUMERIC(17, 7) NOT NULL
)"#;

/// Discrete connection parameters, used when no full URL is configured.
pub struct DatabaseCredentials {
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub database: String,
}

/// Configuration for the database connection
pub struct DatabaseConfig {
    pub connect_options: PgConnectOptions,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    pub query_timeout: Duration,
}

impl DatabaseConfig {
    /// Creates a configuration with default pool values from a connection URL
    pub fn from_url(connection_string: &str) -> Result<Self, DatabaseError> {
        let connect_options =
            PgConnectOptions::from_str(connection_string).map_err(|_| DatabaseError::InvalidUrl)?;
        Ok(Self::with_defaults(connect_options))
    }

    /// Creates a configuration with default pool values from discrete credentials
    pub fn from_credentials(credentials: DatabaseCredentials) -> Self {
        let connect_options = PgConnectOptions::new()
            .host(&credentials.host)
            .port(credentials.port)
            .username(&credentials.user)
            .password(&credentials.password)
            .database(&credentials.database);
        Self::with_defaults(connect_options)
    }

    fn with_defaults(connect_options: PgConnectOptions) -> Self {
        Self {
            connect_options,
            max_connections: 5,
            acquire_timeout: Duration::from_secs(30),
            query_timeout: DEFAULT_QUERY_TIMEOUT,
        }
    }
}

/// Creates a PostgreSQL connection pool
pub async fn create_postgres_pool(config: &DatabaseConfig) -> Result<PgPool, DatabaseError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect_with(config.connect_options.clone())
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "failed to connect to PostgreSQL");
            DatabaseError::ConnectionError
        })?;

    Ok(pool)
}

/// Creates the products table when it is missing
pub async fn ensure_schema(pool: &PgPool) -> Result<(), DatabaseError> {
    sqlx::query(PRODUCTS_TABLE)
        .execute(pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "failed to create products table");
            DatabaseError::SchemaError
        })?;

    Ok(())
}
