//! Application state shared across HTTP handlers

use crate::completion::CompletionClient;
use crate::config::Config;
use crate::content::ContentLibrary;
use crate::storage::StorageLayer;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// All fields are wrapped in Arc for cheap cloning into workers. The
/// completion client is absent when no API credential is configured; the
/// AI handlers then answer in fallback mode.
#[derive(Clone)]
pub struct AppState {
    /// Service configuration (shared read-only)
    pub config: Arc<Config>,
    /// Embedded study content tables
    pub content: Arc<ContentLibrary>,
    /// Completion API client, when configured
    pub completion: Option<Arc<CompletionClient>>,
    /// Storage layer
    pub storage: Arc<StorageLayer>,
}

impl AppState {
    /// Create a new AppState with shared resources
    pub fn new(
        config: Config,
        content: ContentLibrary,
        completion: Option<CompletionClient>,
        storage: StorageLayer,
    ) -> Self {
        Self {
            config: Arc::new(config),
            content: Arc::new(content),
            completion: completion.map(Arc::new),
            storage: Arc::new(storage),
        }
    }

    /// Get service configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
