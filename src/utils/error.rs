//! Error handling for the Study Hub API
//!
//! This module defines all error types used throughout the service.

use thiserror::Error;

/// Result type alias for the Study Hub API
pub type Result<T> = std::result::Result<T, HubError>;

/// Main error type for the Study Hub API
#[derive(Error, Debug)]
pub enum HubError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database errors
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Redis errors
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Not found errors
    #[error("Not found: {0}")]
    NotFound(String),

    /// Backend-not-configured errors
    #[error("Service unavailable: {0}")]
    Unavailable(String),

    /// Completion API errors
    #[error("Completion error: {0}")]
    Completion(String),

    /// Deck storage errors
    #[error("Deck storage error: {0}")]
    DeckStorage(String),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),

    /// Server errors
    #[error("Server error: {0}")]
    Server(String),
}

impl HubError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a not-found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Create a service-unavailable error
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }

    /// Create a completion API error
    pub fn completion(message: impl Into<String>) -> Self {
        Self::Completion(message.into())
    }

    /// Create a server error
    pub fn server(message: impl Into<String>) -> Self {
        Self::Server(message.into())
    }
}
