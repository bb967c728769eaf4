use persistence::db::{
    DEFAULT_MAX_CONNECTIONS, DatabaseConfig, create_postgres_pool, run_migrations,
};
use sqlx::PgPool;
use std::env;

use super::error::{ConfigError, parse_or};

pub const DEFAULT_MIGRATIONS_PATH: &str = "./migrations";

/// Database settings read from the environment
#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    pub migrations_path: String,
}

impl DatabaseSettings {
    /// Environment variables:
    /// - DATABASE_URL: PostgreSQL connection string (required)
    /// - DATABASE_MAX_CONNECTIONS: pool size (default: 5)
    /// - MIGRATIONS_PATH: migrations directory (default: "./migrations")
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| env::var(name).ok())
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let url = var("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let max_connections = parse_or(
            "DATABASE_MAX_CONNECTIONS",
            var("DATABASE_MAX_CONNECTIONS"),
            DEFAULT_MAX_CONNECTIONS,
        )?;
        let migrations_path =
            var("MIGRATIONS_PATH").unwrap_or_else(|| DEFAULT_MIGRATIONS_PATH.to_string());

        Ok(Self {
            url,
            max_connections,
            migrations_path,
        })
    }
}

/// Initialize database connection pool from environment variables and
/// apply pending migrations.
///
/// # Errors
/// Returns error if DATABASE_URL is not set, connection fails or a
/// migration cannot be applied
pub async fn init_database() -> anyhow::Result<PgPool> {
    let settings = DatabaseSettings::from_env()?;
    let config =
        DatabaseConfig::new(settings.url).with_max_connections(settings.max_connections);
    let pool = create_postgres_pool(&config).await?;
    run_migrations(&pool, &settings.migrations_path).await?;
    Ok(pool)
}
