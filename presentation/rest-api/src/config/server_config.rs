use std::env;

use super::error::{ConfigError, parse_or};

pub const DEFAULT_IP: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;

/// HTTP listener settings
///
/// - `SERVICE_IP` (default `127.0.0.1`)
/// - `SERVICE_PORT` (default `8080`)
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| env::var(name).ok())
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            ip: var("SERVICE_IP").unwrap_or_else(|| DEFAULT_IP.to_string()),
            port: parse_or("SERVICE_PORT", var("SERVICE_PORT"), DEFAULT_PORT)?,
        })
    }

    /// `ip:port`
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}
