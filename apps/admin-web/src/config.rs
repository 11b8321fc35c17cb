//! Admin panel configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. A `.env` file in the working directory is read first.

use std::env;

use tienda_db::{ConnectionMode, DbConfig};

/// Admin panel configuration.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// HTTP server port
    pub http_port: u16,

    /// Address the HTTP server binds to
    pub bind_addr: String,

    /// SQLite database file, or `:memory:`
    pub database_path: String,

    /// Maximum pooled connections
    pub max_connections: u32,

    /// Pool reuse or close-after-statement
    pub connection_mode: ConnectionMode,

    /// Apply embedded migrations at startup
    pub run_migrations: bool,
}

impl AdminConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "Loaded .env file");
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key/value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let config = AdminConfig {
            http_port: var("TIENDA_HTTP_PORT", "8080")
                .parse()
                .map_err(|_| ConfigError::InvalidValue("TIENDA_HTTP_PORT".to_string()))?,

            bind_addr: var("TIENDA_BIND_ADDR", "0.0.0.0"),

            database_path: var("TIENDA_DATABASE_PATH", "./tienda.db"),

            max_connections: var("TIENDA_DB_MAX_CONNECTIONS", "5")
                .parse()
                .map_err(|_| ConfigError::InvalidValue("TIENDA_DB_MAX_CONNECTIONS".to_string()))?,

            connection_mode: var("TIENDA_CONNECTION_MODE", "pooled")
                .parse()
                .map_err(|_| ConfigError::InvalidValue("TIENDA_CONNECTION_MODE".to_string()))?,

            run_migrations: var("TIENDA_RUN_MIGRATIONS", "true")
                .parse()
                .map_err(|_| ConfigError::InvalidValue("TIENDA_RUN_MIGRATIONS".to_string()))?,
        };

        if config.database_path.trim().is_empty() {
            return Err(ConfigError::MissingRequired("TIENDA_DATABASE_PATH".to_string()));
        }

        if config.max_connections == 0 {
            return Err(ConfigError::InvalidValue("TIENDA_DB_MAX_CONNECTIONS".to_string()));
        }

        Ok(config)
    }

    /// `host:port` string for the listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.bind_addr, self.http_port)
    }

    /// Database settings derived from this configuration.
    pub fn db_config(&self) -> DbConfig {
        DbConfig::new(&self.database_path)
            .max_connections(self.max_connections)
            .connection_mode(self.connection_mode)
            .run_migrations(self.run_migrations)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Missing required configuration: {0}")]
    MissingRequired(String),
}
