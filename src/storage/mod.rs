//! Storage layer for the Study Hub API
//!
//! This module provides the cache, score row store, and deck object store.
//! Each backend is optional: the cache degrades to an explicit no-op store,
//! while the score and deck stores stay absent and surface as 503 at the
//! route level.

/// Cache store module
pub mod cache;
/// Deck object-store module
pub mod decks;
/// Score row-store module
pub mod scores;

pub use cache::CacheStore;
pub use decks::{DeckObject, DeckStore};
pub use scores::{ScoreRecord, ScoreStore};

use crate::config::StorageConfig;
use crate::utils::error::Result;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Main storage layer that orchestrates all storage backends
#[derive(Debug, Clone)]
pub struct StorageLayer {
    /// Completion-result cache (no-op when unconfigured)
    pub cache: Arc<CacheStore>,
    /// Per-user score row store
    pub scores: Option<Arc<ScoreStore>>,
    /// Flashcard deck object store
    pub decks: Option<Arc<DeckStore>>,
}

impl StorageLayer {
    /// Create a new storage layer
    ///
    /// A failing cache connection degrades to the no-op store; a failing
    /// score or deck backend is a startup error, since enabling one is an
    /// explicit operator decision.
    pub async fn new(config: &StorageConfig) -> Result<Self> {
        info!("Initializing storage layer");

        let cache = if config.cache.enabled {
            match CacheStore::connect(&config.cache).await {
                Ok(store) => Arc::new(store),
                Err(e) => {
                    warn!("Cache connection failed, continuing without cache: {}", e);
                    Arc::new(CacheStore::noop())
                }
            }
        } else {
            debug!("Cache disabled, using no-op store");
            Arc::new(CacheStore::noop())
        };

        let scores = if config.database.enabled {
            debug!("Connecting score store");
            Some(Arc::new(ScoreStore::connect(&config.database).await?))
        } else {
            debug!("Score store disabled");
            None
        };

        let decks = if config.decks.enabled {
            debug!("Initializing deck store: {}", config.decks.storage_type);
            Some(Arc::new(DeckStore::new(&config.decks).await?))
        } else {
            debug!("Deck store disabled");
            None
        };

        info!("Storage layer initialized");
        Ok(Self { cache, scores, decks })
    }
}
