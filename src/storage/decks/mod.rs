//! Flashcard deck object store
//!
//! Decks are immutable binary objects keyed by filename; the service only
//! lists and reads them. Local directory backend by default, S3-compatible
//! backend behind the `s3` cargo feature.

mod local;
mod s3;
mod store;
mod types;

pub use local::LocalDecks;
pub use s3::S3Decks;
pub use types::{DeckObject, DeckStore};
