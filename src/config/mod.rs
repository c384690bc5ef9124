//! Configuration loading and management
//!
//! Defaults suit local development; a YAML file (`BARKEEP_CONFIG`) and a few
//! environment variables override them.

use crate::core::error::AppError;
use serde::{Deserialize, Serialize};

/// Complete application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
}

/// HTTP listener settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

/// Document store settings (used by the `mongodb_backend` feature)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub uri: String,
    pub database: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            uri: "mongodb://localhost:27017".to_string(),
            database: "barkeep".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self, AppError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("failed to read {}: {}", path, e)))?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, AppError> {
        serde_yaml::from_str(yaml).map_err(|e| AppError::Config(format!("invalid YAML: {}", e)))
    }

    /// Resolve configuration: `BARKEEP_CONFIG` file if set, defaults
    /// otherwise, then individual environment overrides.
    pub fn load() -> Result<Self, AppError> {
        let mut config = match std::env::var("BARKEEP_CONFIG") {
            Ok(path) => Self::from_yaml_file(&path)?,
            Err(_) => Self::default(),
        };

        if let Ok(port) = std::env::var("BARKEEP_PORT") {
            config.server.port = port
                .parse()
                .map_err(|e| AppError::Config(format!("invalid BARKEEP_PORT: {}", e)))?;
        }
        if let Ok(uri) = std::env::var("BARKEEP_MONGODB_URI") {
            config.database.uri = uri;
        }
        if let Ok(db) = std::env::var("BARKEEP_MONGODB_DATABASE") {
            config.database.database = db;
        }

        Ok(config)
    }

    /// Socket address string for the HTTP listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
