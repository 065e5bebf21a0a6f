//! Storage configuration

use super::{default_connection_timeout, default_max_connections};
use serde::{Deserialize, Serialize};

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StorageConfig {
    /// Score row-store configuration
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Cache configuration
    #[serde(default)]
    pub cache: CacheConfig,
    /// Deck object-store configuration
    #[serde(default)]
    pub decks: DeckStorageConfig,
}

impl StorageConfig {
    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.database.enabled && self.database.url.is_empty() {
            return Err("Database enabled but no URL configured".to_string());
        }
        if self.cache.enabled && self.cache.url.is_empty() {
            return Err("Cache enabled but no URL configured".to_string());
        }
        self.decks.validate()
    }
}

/// Score database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database URL
    #[serde(default)]
    pub url: String,
    /// Enable the score row store
    #[serde(default)]
    pub enabled: bool,
    /// Maximum connections
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Connection timeout in seconds
    #[serde(default = "default_connection_timeout")]
    pub connection_timeout: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            enabled: false,
            max_connections: default_max_connections(),
            connection_timeout: default_connection_timeout(),
        }
    }
}

/// Cache configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Redis URL
    #[serde(default)]
    pub url: String,
    /// Enable the cache (disabled runs the no-op store)
    #[serde(default)]
    pub enabled: bool,
    /// Connection timeout in seconds
    #[serde(default = "default_connection_timeout")]
    pub connection_timeout: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            enabled: false,
            connection_timeout: default_connection_timeout(),
        }
    }
}

/// Deck object-store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeckStorageConfig {
    /// Enable deck downloads
    #[serde(default)]
    pub enabled: bool,
    /// Backend type: "local" or "s3"
    #[serde(default = "default_deck_storage_type")]
    pub storage_type: String,
    /// Directory for the local backend
    #[serde(default)]
    pub local_path: Option<String>,
    /// S3 settings for the s3 backend
    #[serde(default)]
    pub s3: Option<S3Config>,
}

impl Default for DeckStorageConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            storage_type: default_deck_storage_type(),
            local_path: None,
            s3: None,
        }
    }
}

impl DeckStorageConfig {
    /// Validate deck storage configuration
    pub fn validate(&self) -> Result<(), String> {
        if !self.enabled {
            return Ok(());
        }
        match self.storage_type.as_str() {
            "local" => {
                if self.local_path.is_none() {
                    return Err("Local deck storage enabled but no path configured".to_string());
                }
            }
            "s3" => {
                match &self.s3 {
                    Some(s3) if s3.bucket.is_empty() => {
                        return Err("S3 deck storage enabled but no bucket configured".to_string());
                    }
                    None => {
                        return Err("S3 deck storage enabled but no S3 settings configured".to_string());
                    }
                    _ => {}
                }
            }
            other => {
                return Err(format!("Unsupported deck storage type: {}", other));
            }
        }
        Ok(())
    }
}

/// S3-compatible bucket settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct S3Config {
    /// Bucket name
    #[serde(default)]
    pub bucket: String,
    /// Region
    #[serde(default = "default_s3_region")]
    pub region: String,
    /// Custom endpoint for S3-compatible stores (e.g. R2)
    #[serde(default)]
    pub endpoint: Option<String>,
}

fn default_deck_storage_type() -> String {
    "local".to_string()
}

fn default_s3_region() -> String {
    "us-east-1".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_storage_is_disabled_and_valid() {
        let config = StorageConfig::default();
        assert!(!config.database.enabled);
        assert!(!config.cache.enabled);
        assert!(!config.decks.enabled);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_enabled_database_requires_url() {
        let config = StorageConfig {
            database: DatabaseConfig {
                enabled: true,
                ..DatabaseConfig::default()
            },
            ..StorageConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_enabled_local_decks_require_path() {
        let mut decks = DeckStorageConfig {
            enabled: true,
            ..DeckStorageConfig::default()
        };
        assert!(decks.validate().is_err());

        decks.local_path = Some("decks".to_string());
        assert!(decks.validate().is_ok());
    }

    #[test]
    fn test_enabled_s3_decks_require_bucket() {
        let decks = DeckStorageConfig {
            enabled: true,
            storage_type: "s3".to_string(),
            s3: Some(S3Config::default()),
            ..DeckStorageConfig::default()
        };
        assert!(decks.validate().is_err());

        let decks = DeckStorageConfig {
            enabled: true,
            storage_type: "s3".to_string(),
            s3: Some(S3Config {
                bucket: "anki-decks".to_string(),
                ..S3Config::default()
            }),
            ..DeckStorageConfig::default()
        };
        assert!(decks.validate().is_ok());
    }

    #[test]
    fn test_unknown_storage_type_rejected() {
        let decks = DeckStorageConfig {
            enabled: true,
            storage_type: "ftp".to_string(),
            ..DeckStorageConfig::default()
        };
        assert!(decks.validate().is_err());
    }
}
