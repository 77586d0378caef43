//! Configuration for server binaries
//!
//! Layered loading: `config/default` file, then an environment-specific file
//! selected by `RUN_ENV`, then `APP__`-prefixed environment variables
//! (e.g. `APP__SERVER__PORT=8080`). A `.env` file is honored via dotenvy.

use std::net::{IpAddr, SocketAddr};

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Allowed CORS origins; empty disables cross-origin access.
    pub cors_origins: Vec<String>,
    /// Maximum request body size in bytes.
    pub max_request_body_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            cors_origins: Vec::new(),
            max_request_body_size: 1024 * 1024,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// MongoDB connection string. A database named in the URI path takes
    /// precedence over `database`.
    pub uri: String,
    /// Database name used when the URI does not name one.
    pub database: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            uri: "mongodb://localhost:27017/insurance_db".to_string(),
            database: "insurance_db".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// Emit JSON log lines instead of the human-readable format.
    pub json: bool,
    pub file_enabled: bool,
    pub file_directory: String,
    pub file_prefix: String,
    /// One of: daily, hourly, minutely, never.
    pub file_rotation: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file_enabled: false,
            file_directory: "logs".to_string(),
            file_prefix: "policy-server".to_string(),
            file_rotation: "daily".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from files and environment.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let run_env = std::env::var("RUN_ENV").unwrap_or_else(|_| "development".to_string());

        let settings = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_env}")).required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.database.uri.is_empty() {
            return Err("database.uri must not be empty".to_string());
        }
        if self.server.port == 0 {
            return Err("server.port must be non-zero".to_string());
        }
        match self.logging.file_rotation.as_str() {
            "daily" | "hourly" | "minutely" | "never" => {}
            other => return Err(format!("unknown logging.file_rotation: {other}")),
        }
        Ok(())
    }

    /// Socket address the server binds to.
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let host: IpAddr = self.server.host.parse()?;
        Ok(SocketAddr::new(host, self.server.port))
    }
}
