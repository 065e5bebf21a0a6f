//! Local directory deck storage

use crate::utils::error::{HubError, Result};
use chrono::{DateTime, Utc};
use std::path::PathBuf;
use tokio::fs;
use tracing::{debug, info};

use super::types::DeckObject;

/// Local deck storage
#[derive(Debug, Clone)]
pub struct LocalDecks {
    base_path: PathBuf,
}

impl LocalDecks {
    /// Create a new local deck store
    pub async fn new(base_path: &str) -> Result<Self> {
        let path = PathBuf::from(base_path);

        if !path.exists() {
            fs::create_dir_all(&path).await.map_err(|e| {
                HubError::DeckStorage(format!("Failed to create deck directory: {}", e))
            })?;
        }

        info!("Local deck store initialized at: {}", path.display());
        Ok(Self { base_path: path })
    }

    /// List all decks in the directory, sorted by name
    pub async fn list(&self) -> Result<Vec<DeckObject>> {
        let mut entries = fs::read_dir(&self.base_path)
            .await
            .map_err(|e| HubError::DeckStorage(format!("Failed to read deck directory: {}", e)))?;

        let mut decks = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| HubError::DeckStorage(format!("Failed to read deck directory: {}", e)))?
        {
            let metadata = entry.metadata().await.map_err(|e| {
                HubError::DeckStorage(format!("Failed to read deck metadata: {}", e))
            })?;
            if !metadata.is_file() {
                continue;
            }

            let uploaded = metadata
                .modified()
                .ok()
                .map(DateTime::<Utc>::from);

            decks.push(DeckObject {
                name: entry.file_name().to_string_lossy().into_owned(),
                size: metadata.len(),
                uploaded,
            });
        }

        decks.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(decks)
    }

    /// Retrieve a deck's bytes; `None` when the file is absent
    pub async fn get(&self, name: &str) -> Result<Option<Vec<u8>>> {
        // Keys are plain filenames; anything path-like cannot name a deck
        if name.is_empty() || name.contains(['/', '\\']) || name.contains("..") {
            return Ok(None);
        }

        let path = self.base_path.join(name);
        match fs::read(&path).await {
            Ok(content) => {
                debug!("Deck read: {} ({} bytes)", name, content.len());
                Ok(Some(content))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(HubError::DeckStorage(format!(
                "Failed to read deck {}: {}",
                name, e
            ))),
        }
    }
}
