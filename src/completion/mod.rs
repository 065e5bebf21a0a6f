//! Completion API integration
//!
//! Everything that talks to (or shapes data for) the text-completion
//! service: the chat-style client, the CPRS prompt templates, and the
//! structured payloads the handlers return.

pub mod client;
pub mod prompts;
pub mod types;

pub use client::CompletionClient;
pub use types::{
    AnalysisFallback, ChatMessage, ConceptAnalysis, ConceptBreakdown, QuizFallback, QuizQuestion,
    QuizSheet, system_message, user_message,
};
