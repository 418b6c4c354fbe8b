use persistence::db::DatabaseConfig;
use poem::middleware::Cors;

use super::{cors_config, database_config, error::ConfigError, server_config::ServerConfig};

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub database: DatabaseConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::from_lookup(&lookup),
            cors: cors_config::init_cors(&lookup),
            database: database_config::from_lookup(&lookup)?,
        })
    }
}
