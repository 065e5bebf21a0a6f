//! Configuration data models
//!
//! This module defines all configuration structures used throughout the
//! service.

pub mod completion;
pub mod server;
pub mod storage;

// Re-export all configuration types
pub use completion::*;
pub use server::*;
pub use storage::*;

use serde::{Deserialize, Serialize};

/// Main hub configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HubConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Completion API configuration
    #[serde(default)]
    pub completion: CompletionConfig,
    /// Storage configuration
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Default server host
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8787
}

/// Default timeout in seconds
pub fn default_timeout() -> u64 {
    30
}

/// Default connection timeout in seconds
pub fn default_connection_timeout() -> u64 {
    5
}

/// Default maximum database connections
pub fn default_max_connections() -> u32 {
    10
}
