//! HTTP server configuration

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

use crate::seed::SeedMode;

/// Server settings, read from `SERVER_*` environment variables
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind (`SERVER_HOST`, default: "0.0.0.0")
    pub host: String,
    /// Port to listen on (`SERVER_PORT`, default: 3001)
    pub port: u16,
    /// Startup fixture policy (`SERVER_SEED_MODE`, default: "if-empty")
    pub seed_mode: SeedMode,
}

impl ServerConfig {
    /// Create a new ServerConfig from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("host", "0.0.0.0")?
            .set_default("port", 3001)?
            .set_default("seed_mode", "if-empty")?
            .add_source(Environment::with_prefix("SERVER"))
            .build()?
            .try_deserialize()
    }

    /// `host:port` pair for the listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
