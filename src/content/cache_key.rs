//! Cache key derivation
//!
//! Keys are pure functions of normalized input: identical input always
//! resolves to the same key. Quiz payloads are keyed by the normalized
//! concept name; concept-analysis payloads are keyed by a content hash of
//! the submitted text.

use sha2::{Digest, Sha256};

/// Number of leading characters of the submitted text that feed the hash
const TEXT_HASH_PREFIX_CHARS: usize = 1000;

/// Derive the cache key for a quiz payload
///
/// The concept is lower-cased, trimmed, and whitespace runs collapse to a
/// single `-`, so `"Blob Storage"` and `"  blob   storage  "` share a key.
pub fn concept_cache_key(concept: &str) -> String {
    let normalized = concept
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    format!("cprs:{}", normalized)
}

/// Derive the cache key for a concept-analysis payload
///
/// Hashes the first [`TEXT_HASH_PREFIX_CHARS`] characters of the text as a
/// proxy for the whole submission.
pub fn text_cache_key(text: &str) -> String {
    let prefix: String = text.chars().take(TEXT_HASH_PREFIX_CHARS).collect();
    let digest = Sha256::digest(prefix.as_bytes());
    format!("concepts:text:{}", hex::encode(digest))
}
