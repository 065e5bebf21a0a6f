//! Concept-extraction endpoint

use crate::completion::prompts::{
    EXTRACTION_MAX_TOKENS, EXTRACTION_SYSTEM_PROMPT, concept_extraction_prompt,
};
use crate::completion::{
    AnalysisFallback, CompletionClient, ConceptAnalysis, system_message, user_message,
};
use crate::content::text_cache_key;
use crate::server::routes::errors;
use crate::server::state::AppState;
use crate::storage::cache::ANALYSIS_TTL_SECS;
use actix_web::{HttpResponse, Result as ActixResult, web};
use serde::Deserialize;
use tracing::{info, warn};

/// Request body for POST /api/extract-concepts
#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    /// Pasted quiz review text
    #[serde(default)]
    pub text: Option<String>,
}

/// Extract Azure concepts from pasted quiz text
///
/// Local keyword extraction always runs; the completion service adds CPRS
/// breakdowns when configured. Downstream failures become 200 fallback
/// payloads, never HTTP errors.
pub async fn extract_concepts(
    state: web::Data<AppState>,
    request: web::Json<ExtractRequest>,
) -> ActixResult<HttpResponse> {
    let Some(text) = request.into_inner().text.filter(|t| !t.is_empty()) else {
        return Ok(errors::validation_error("No text provided"));
    };

    let local_concepts = state.content.keywords.extract(&text);
    let guide_references = state.content.guide_index.find_references(&local_concepts);
    info!("Extracted {} local concepts", local_concepts.len());

    let Some(client) = state.completion.clone() else {
        return Ok(HttpResponse::Ok()
            .json(AnalysisFallback::missing_credential(local_concepts, guide_references)));
    };

    match run_analysis(&state, &client, &text, &local_concepts).await {
        Ok(analysis) => Ok(HttpResponse::Ok().json(analysis)),
        Err(fallback) => {
            warn!("Concept analysis fell back: {:?}", fallback.error);
            Ok(HttpResponse::Ok().json(fallback))
        }
    }
}

/// The AI analysis pipeline
///
/// Typed so every failure is a fallback payload by construction: cache
/// errors, completion errors, and parse errors all convert via `?`.
async fn run_analysis(
    state: &AppState,
    client: &CompletionClient,
    text: &str,
    local_concepts: &[String],
) -> Result<ConceptAnalysis, AnalysisFallback> {
    let cache_key = text_cache_key(text);

    if let Some(mut cached) = state
        .storage
        .cache
        .get_json::<ConceptAnalysis>(&cache_key)
        .await?
    {
        cached.cached = true;
        return Ok(cached);
    }

    let messages = [
        system_message(EXTRACTION_SYSTEM_PROMPT),
        user_message(concept_extraction_prompt(text, &state.content.taxonomy)),
    ];
    let mut analysis: ConceptAnalysis =
        client.complete_json(&messages, EXTRACTION_MAX_TOKENS).await?;

    // Union of LLM-returned names and local keywords drives the references
    let mut all_names: Vec<String> = analysis.concepts.iter().map(|c| c.name.clone()).collect();
    all_names.extend(local_concepts.iter().cloned());
    analysis.guide_references = state.content.guide_index.find_references(&all_names);
    analysis.local_concepts = local_concepts.to_vec();

    state
        .storage
        .cache
        .put_json(&cache_key, &analysis, ANALYSIS_TTL_SECS)
        .await?;

    Ok(analysis)
}
