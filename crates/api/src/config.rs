//! Configuration loaded from environment variables.

use std::env;
use std::net::SocketAddr;

/// API server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address.
    pub addr: SocketAddr,
    /// SQLite database URL.
    pub database_url: String,
    /// Browser origin allowed to call the API.
    pub cors_origin: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `SCRIBE_ADDR` | Server bind address | `127.0.0.1:8000` |
    /// | `DATABASE_URL` | SQLite database URL | (required) |
    /// | `CORS_ORIGIN` | Allowed browser origin | `http://localhost:5173` |
    pub fn from_env() -> Result<Self, ConfigError> {
        let addr = env::var("SCRIBE_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidAddr)?;

        let database_url = env::var("DATABASE_URL").map_err(|_| ConfigError::MissingDatabaseUrl)?;
        if database_url.trim().is_empty() {
            return Err(ConfigError::MissingDatabaseUrl);
        }

        let cors_origin =
            env::var("CORS_ORIGIN").unwrap_or_else(|_| "http://localhost:5173".to_string());

        Ok(Self {
            addr,
            database_url,
            cors_origin,
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid SCRIBE_ADDR format")]
    InvalidAddr,

    #[error("DATABASE_URL environment variable is required")]
    MissingDatabaseUrl,
}
