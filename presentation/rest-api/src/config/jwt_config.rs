use std::env;

use super::error::ConfigError;

/// Settings for validating HS256 bearer tokens.
#[derive(Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: Option<String>,
}

impl JwtConfig {
    /// Environment variables:
    /// - JWT_SECRET: shared HS256 secret (required)
    /// - JWT_ISSUER: expected `iss` claim (optional)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| env::var(name).ok())
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let secret = var("JWT_SECRET")
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::Missing("JWT_SECRET"))?;
        let issuer = var("JWT_ISSUER").filter(|s| !s.is_empty());

        Ok(Self { secret, issuer })
    }
}
