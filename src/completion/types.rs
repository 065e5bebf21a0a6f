//! Completion wire types and structured study payloads

use crate::content::GuideReference;
use serde::{Deserialize, Serialize};

/// One message of a chat-style completion request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Message role ("system" or "user")
    pub role: String,
    /// Message text
    pub content: String,
}

/// Build a system message
pub fn system_message(content: impl Into<String>) -> ChatMessage {
    ChatMessage {
        role: "system".to_string(),
        content: content.into(),
    }
}

/// Build a user message
pub fn user_message(content: impl Into<String>) -> ChatMessage {
    ChatMessage {
        role: "user".to_string(),
        content: content.into(),
    }
}

fn is_false(value: &bool) -> bool {
    !value
}

/// One CPRS breakdown of a concept, as produced by the completion service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConceptBreakdown {
    /// Concept name
    #[serde(default)]
    pub name: String,
    /// The root problem the concept solves
    #[serde(default)]
    pub foundation: String,
    /// Precise one-sentence definition
    #[serde(default)]
    pub definition: String,
    /// How it differs from commonly confused services
    #[serde(default)]
    pub differentiation: String,
    /// The accurate Azure fact
    #[serde(default)]
    pub correct_fact: String,
    /// Why the student's answer was wrong
    #[serde(default)]
    pub why_wrong: String,
    /// One-sentence memory hook
    #[serde(default)]
    pub compression: String,
    /// Related exam objective code, e.g. "1.2"
    #[serde(default)]
    pub objective: String,
}

/// Full concept analysis returned by the extract-concepts endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConceptAnalysis {
    /// Per-concept CPRS breakdowns
    #[serde(default)]
    pub concepts: Vec<ConceptBreakdown>,
    /// Short study summary of the weak areas
    #[serde(default)]
    pub summary: String,
    /// Terms found by local keyword extraction
    #[serde(default)]
    pub local_concepts: Vec<String>,
    /// Guide references for the merged concept set
    #[serde(default)]
    pub guide_references: Vec<GuideReference>,
    /// Set when the payload was served from cache
    #[serde(default, skip_serializing_if = "is_false")]
    pub cached: bool,
}

/// Fallback payload for the extract-concepts endpoint
///
/// Serialized with HTTP 200 like the success payload; callers inspect
/// `fallback`/`error` rather than the status code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisFallback {
    /// Always true
    pub fallback: bool,
    /// Why the service fell back (credential missing)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_reason: Option<String>,
    /// Downstream failure message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Terms found by local keyword extraction
    #[serde(default)]
    pub local_concepts: Vec<String>,
    /// Guide references for the local terms
    #[serde(default)]
    pub guide_references: Vec<GuideReference>,
    /// Always empty in fallback mode
    #[serde(default)]
    pub concepts: Vec<ConceptBreakdown>,
    /// Fixed fallback summary line
    #[serde(default)]
    pub summary: String,
}

impl AnalysisFallback {
    /// Fallback for a missing completion credential
    pub fn missing_credential(
        local_concepts: Vec<String>,
        guide_references: Vec<GuideReference>,
    ) -> Self {
        Self {
            fallback: true,
            fallback_reason: Some("Completion API key not configured".to_string()),
            error: None,
            local_concepts,
            guide_references,
            concepts: Vec::new(),
            summary: "AI analysis unavailable - using keyword extraction mode.".to_string(),
        }
    }

    /// Fallback for a downstream failure
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            fallback: true,
            fallback_reason: None,
            error: Some(message.into()),
            local_concepts: Vec::new(),
            guide_references: Vec::new(),
            concepts: Vec::new(),
            summary: "AI analysis failed - using keyword extraction mode.".to_string(),
        }
    }
}

impl From<crate::utils::error::HubError> for AnalysisFallback {
    fn from(err: crate::utils::error::HubError) -> Self {
        Self::failure(err.to_string())
    }
}

/// The four options of a multiple-choice question
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuizOptions {
    /// Option A
    #[serde(rename = "A", default)]
    pub a: String,
    /// Option B
    #[serde(rename = "B", default)]
    pub b: String,
    /// Option C
    #[serde(rename = "C", default)]
    pub c: String,
    /// Option D
    #[serde(rename = "D", default)]
    pub d: String,
}

/// One quiz question
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizQuestion {
    /// Question type (Foundation, Definition, Differentiation, Scenario,
    /// Anti-Confusion, Compression)
    #[serde(rename = "type", default)]
    pub question_type: String,
    /// Question text
    #[serde(default)]
    pub question: String,
    /// The four options
    #[serde(default)]
    pub options: QuizOptions,
    /// Correct option letter
    #[serde(default)]
    pub correct: String,
    /// Why the correct option is correct
    #[serde(default)]
    pub explanation: String,
}

/// Full quiz payload returned by the generate-cprs endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizSheet {
    /// The concept quizzed
    #[serde(default)]
    pub concept: String,
    /// Six questions, one per CPRS angle
    #[serde(default)]
    pub questions: Vec<QuizQuestion>,
    /// Related exam objective code
    #[serde(default)]
    pub objective: String,
    /// Guide references for the concept
    #[serde(default)]
    pub guide_references: Vec<GuideReference>,
    /// Set when the payload was served from cache
    #[serde(default, skip_serializing_if = "is_false")]
    pub cached: bool,
}

/// Fallback payload for the generate-cprs endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizFallback {
    /// Always true
    pub fallback: bool,
    /// Why the service fell back (credential missing)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_reason: Option<String>,
    /// Downstream failure message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// The concept quizzed (empty on downstream failure)
    #[serde(default)]
    pub concept: String,
    /// Guide references for the concept
    #[serde(default)]
    pub guide_references: Vec<GuideReference>,
    /// Always empty in fallback mode
    #[serde(default)]
    pub questions: Vec<QuizQuestion>,
}

impl QuizFallback {
    /// Fallback for a missing completion credential
    pub fn missing_credential(concept: String, guide_references: Vec<GuideReference>) -> Self {
        Self {
            fallback: true,
            fallback_reason: Some("Completion API key not configured".to_string()),
            error: None,
            concept,
            guide_references,
            questions: Vec::new(),
        }
    }

    /// Fallback for a downstream failure
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            fallback: true,
            fallback_reason: None,
            error: Some(message.into()),
            concept: String::new(),
            guide_references: Vec::new(),
            questions: Vec::new(),
        }
    }
}

impl From<crate::utils::error::HubError> for QuizFallback {
    fn from(err: crate::utils::error::HubError) -> Self {
        Self::failure(err.to_string())
    }
}
