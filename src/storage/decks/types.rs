//! Deck store types and enums

use serde::{Deserialize, Serialize};

use super::{LocalDecks, S3Decks};

/// Deck storage backend
#[derive(Debug, Clone)]
pub enum DeckStore {
    /// Local directory storage
    Local(LocalDecks),
    /// S3-compatible object storage
    S3(S3Decks),
}

/// Listing entry for one stored deck
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeckObject {
    /// Object key / filename
    pub name: String,
    /// Size in bytes
    pub size: u64,
    /// Upload timestamp, when the backend reports one
    pub uploaded: Option<chrono::DateTime<chrono::Utc>>,
}
