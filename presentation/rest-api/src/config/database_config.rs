use std::time::Duration;

use persistence::db::{
    DatabaseConfig, DatabaseCredentials, create_postgres_pool, ensure_schema,
};
use sqlx::PgPool;

use super::error::ConfigError;

/// Build the database configuration through `lookup`
///
/// Variables:
/// - DATABASE_URL: PostgreSQL connection string; takes precedence when set
/// - DB_USER, DB_PASSWORD, DB_NAME: required when DATABASE_URL is absent
/// - DB_HOST (default: "localhost"), DB_PORT (default: 5432)
/// - DB_MAX_CONNECTIONS (default: 5)
/// - DB_QUERY_TIMEOUT_SECS: per-statement deadline, must be positive (default: 5)
pub fn from_lookup(
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<DatabaseConfig, ConfigError> {
    let mut config = match lookup("DATABASE_URL") {
        Some(url) => {
            DatabaseConfig::from_url(&url).map_err(|_| ConfigError::Invalid("DATABASE_URL"))?
        }
        None => DatabaseConfig::from_credentials(DatabaseCredentials {
            user: lookup("DB_USER").ok_or(ConfigError::Missing("DB_USER"))?,
            password: lookup("DB_PASSWORD").ok_or(ConfigError::Missing("DB_PASSWORD"))?,
            database: lookup("DB_NAME").ok_or(ConfigError::Missing("DB_NAME"))?,
            host: lookup("DB_HOST").unwrap_or_else(|| "localhost".to_string()),
            port: parse_or(&lookup, "DB_PORT", 5432)?,
        }),
    };

    config.max_connections = parse_or(&lookup, "DB_MAX_CONNECTIONS", config.max_connections)?;
    let timeout_secs = parse_or(
        &lookup,
        "DB_QUERY_TIMEOUT_SECS",
        config.query_timeout.as_secs(),
    )?;
    if timeout_secs == 0 {
        return Err(ConfigError::Invalid("DB_QUERY_TIMEOUT_SECS"));
    }
    config.query_timeout = Duration::from_secs(timeout_secs);

    Ok(config)
}

fn parse_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid(key)),
        None => Ok(default),
    }
}

/// Connects the pool and makes sure the products table exists
///
/// # Errors
/// Returns error if the connection or the table bootstrap fails
pub async fn init_database(config: &DatabaseConfig) -> anyhow::Result<PgPool> {
    let pool = create_postgres_pool(config).await?;
    ensure_schema(&pool).await?;
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn should_prefer_database_url() {
        let config = from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://app:secret@db:5432/inventory"),
            ("DB_NAME", "ignored"),
        ]))
        .unwrap();

        assert_eq!(config.connect_options.get_database(), Some("inventory"));
        assert_eq!(config.connect_options.get_host(), "db");
    }

    #[test]
    fn should_build_from_credentials() {
        let config = from_lookup(lookup_from(&[
            ("DB_USER", "app"),
            ("DB_PASSWORD", "secret"),
            ("DB_NAME", "test"),
            ("DB_QUERY_TIMEOUT_SECS", "2"),
        ]))
        .unwrap();

        assert_eq!(config.connect_options.get_host(), "localhost");
        assert_eq!(config.connect_options.get_port(), 5432);
        assert_eq!(config.connect_options.get_database(), Some("test"));
        assert_eq!(config.query_timeout, Duration::from_secs(2));
        assert_eq!(config.max_connections, 5);
    }

    #[test]
    fn should_fail_when_credentials_are_missing() {
        let result = from_lookup(lookup_from(&[("DB_USER", "app")]));
        assert!(matches!(result, Err(ConfigError::Missing("DB_PASSWORD"))));
    }

    #[test]
    fn should_fail_when_numbers_do_not_parse() {
        let result = from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://app@db/inventory"),
            ("DB_MAX_CONNECTIONS", "many"),
        ]));
        assert!(matches!(
            result,
            Err(ConfigError::Invalid("DB_MAX_CONNECTIONS"))
        ));
    }

    #[test]
    fn should_reject_zero_query_timeout() {
        let result = from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://app@db/inventory"),
            ("DB_QUERY_TIMEOUT_SECS", "0"),
        ]));
        assert!(matches!(
            result,
            Err(ConfigError::Invalid("DB_QUERY_TIMEOUT_SECS"))
        ));
    }
}
