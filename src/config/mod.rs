//! Configuration management for the Study Hub API
//!
//! This module handles loading, validation, and management of all service
//! configuration.

pub mod models;

pub use models::*;

use crate::utils::error::{HubError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the Study Hub API
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Hub configuration
    pub hub: HubConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| HubError::Config(format!("Failed to read config file: {}", e)))?;

        let hub: HubConfig = serde_yaml::from_str(&content)
            .map_err(|e| HubError::Config(format!("Failed to parse config: {}", e)))?;

        let mut config = Self { hub };
        config.apply_env_overrides();
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let mut config = Self::default();
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Apply environment-variable overrides on top of the loaded values
    ///
    /// Environment always wins over the file, matching how the service is
    /// deployed: secrets arrive through the environment, not the YAML.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(key) = std::env::var("OPENAI_API_KEY") {
            if !key.is_empty() {
                self.hub.completion.api_key = Some(key);
            }
        }
        if let Ok(base) = std::env::var("OPENAI_API_BASE") {
            self.hub.completion.api_base = base;
        }
        if let Ok(model) = std::env::var("OPENAI_MODEL") {
            self.hub.completion.model = model;
        }
        if let Ok(url) = std::env::var("DATABASE_URL") {
            self.hub.storage.database.url = url;
            self.hub.storage.database.enabled = true;
        }
        if let Ok(url) = std::env::var("REDIS_URL") {
            self.hub.storage.cache.url = url;
            self.hub.storage.cache.enabled = true;
        }
        if let Ok(dir) = std::env::var("DECKS_DIR") {
            self.hub.storage.decks.enabled = true;
            self.hub.storage.decks.storage_type = "local".to_string();
            self.hub.storage.decks.local_path = Some(dir);
        }
        if let Ok(bucket) = std::env::var("DECKS_S3_BUCKET") {
            let mut s3 = self.hub.storage.decks.s3.clone().unwrap_or_default();
            s3.bucket = bucket;
            if let Ok(region) = std::env::var("DECKS_S3_REGION") {
                s3.region = region;
            }
            if let Ok(endpoint) = std::env::var("DECKS_S3_ENDPOINT") {
                s3.endpoint = Some(endpoint);
            }
            self.hub.storage.decks.enabled = true;
            self.hub.storage.decks.storage_type = "s3".to_string();
            self.hub.storage.decks.s3 = Some(s3);
        }
        if let Ok(port) = std::env::var("PORT") {
            if let Ok(port) = port.parse() {
                self.hub.server.port = port;
            }
        }
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.hub.server
    }

    /// Get completion API configuration
    pub fn completion(&self) -> &CompletionConfig {
        &self.hub.completion
    }

    /// Get storage configuration
    pub fn storage(&self) -> &StorageConfig {
        &self.hub.storage
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.hub
            .server
            .validate()
            .map_err(|e| HubError::Config(format!("Server config error: {}", e)))?;

        self.hub
            .storage
            .validate()
            .map_err(|e| HubError::Config(format!("Storage config error: {}", e)))?;

        debug!("Configuration validation completed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_yaml_round_trip() {
        let yaml = r#"
server:
  host: "127.0.0.1"
  port: 9000
completion:
  model: "gpt-4o"
storage:
  database:
    url: "sqlite://data/hub.db?mode=rwc"
    enabled: true
  cache:
    url: "redis://localhost:6379"
    enabled: true
  decks:
    enabled: true
    storage_type: "local"
    local_path: "decks"
"#;
        let hub: HubConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(hub.server.host, "127.0.0.1");
        assert_eq!(hub.server.port, 9000);
        assert!(hub.storage.database.enabled);
        assert_eq!(hub.storage.decks.local_path.as_deref(), Some("decks"));
    }
}
