use super::error::{ConfigError, parse_or};
use super::jwt_config::JwtConfig;
use super::{cors_config, server_config::ServerConfig};
use poem::middleware::Cors;

pub const DEFAULT_RECIPES_PAGE_SIZE: u32 = 6;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub jwt: JwtConfig,
    /// Page size of recipe and subscription lists when the client sends no `limit`.
    pub recipes_page_size: u32,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::from_env()?,
            cors: cors_config::init_cors(),
            jwt: JwtConfig::from_env()?,
            recipes_page_size: parse_or(
                "RECIPES_PAGE_SIZE",
                std::env::var("RECIPES_PAGE_SIZE").ok(),
                DEFAULT_RECIPES_PAGE_SIZE,
            )?,
        })
    }
}
