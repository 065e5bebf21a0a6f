//! # StudyHub-RS
//!
//! An AZ-104 exam-study hub edge API. Seven stateless HTTP handlers behind
//! a single router:
//!
//! - **Concept extraction**: local Azure keyword scanning over pasted quiz
//!   text, optionally enriched with CPRS study breakdowns from an LLM
//!   completion service.
//! - **Quiz generation**: six-question multiple-choice quizzes per concept,
//!   cached by normalized concept name.
//! - **Score sync**: per-user score blobs upserted into a row store, last
//!   write wins.
//! - **Deck downloads**: flashcard decks listed and streamed from object
//!   storage.
//!
//! Every optional backend (completion API, cache, row store, object store)
//! is injected through application state; handlers answer with typed
//! fallback payloads rather than HTTP errors when AI generation cannot run.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use studyhub_rs::{Config, server::HttpServer};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let server = HttpServer::new(&config).await?;
//!     server.start().await?;
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

// Public module exports
pub mod completion;
pub mod config;
pub mod content;
pub mod server;
pub mod storage;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use content::ContentLibrary;
pub use utils::error::{HubError, Result};

pub use completion::{
    AnalysisFallback, ChatMessage, CompletionClient, ConceptAnalysis, ConceptBreakdown,
    QuizFallback, QuizQuestion, QuizSheet, system_message, user_message,
};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(VERSION, env!("CARGO_PKG_VERSION"));
        assert_eq!(NAME, env!("CARGO_PKG_NAME"));
        assert!(!DESCRIPTION.is_empty());
    }
}
