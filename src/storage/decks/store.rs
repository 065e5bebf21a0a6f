//! DeckStore enum implementation with dispatch methods

use crate::config::DeckStorageConfig;
use crate::utils::error::{HubError, Result};
use tracing::info;

use super::local::LocalDecks;
use super::s3::S3Decks;
use super::types::{DeckObject, DeckStore};

impl DeckStore {
    /// Create a new deck store instance
    pub async fn new(config: &DeckStorageConfig) -> Result<Self> {
        info!("Initializing deck store: {}", config.storage_type);

        match config.storage_type.as_str() {
            "local" => {
                let path = config
                    .local_path
                    .as_ref()
                    .ok_or_else(|| HubError::Config("Local path not specified".to_string()))?;
                Ok(DeckStore::Local(LocalDecks::new(path).await?))
            }
            "s3" => {
                let s3_config = config
                    .s3
                    .as_ref()
                    .ok_or_else(|| HubError::Config("S3 configuration not specified".to_string()))?;
                Ok(DeckStore::S3(S3Decks::new(s3_config).await?))
            }
            _ => Err(HubError::Config(format!(
                "Unsupported deck storage type: {}",
                config.storage_type
            ))),
        }
    }

    /// List all stored decks
    pub async fn list(&self) -> Result<Vec<DeckObject>> {
        match self {
            DeckStore::Local(storage) => storage.list().await,
            DeckStore::S3(storage) => storage.list().await,
        }
    }

    /// Retrieve a deck by name; `None` when the object is absent
    pub async fn get(&self, name: &str) -> Result<Option<Vec<u8>>> {
        match self {
            DeckStore::Local(storage) => storage.get(name).await,
            DeckStore::S3(storage) => storage.get(name).await,
        }
    }
}
