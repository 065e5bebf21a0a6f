//! Quiz-generation endpoint

use crate::completion::prompts::{QUIZ_MAX_TOKENS, QUIZ_SYSTEM_PROMPT, quiz_prompt};
use crate::completion::{QuizFallback, QuizSheet, system_message, user_message};
use crate::content::{GuideReference, concept_cache_key};
use crate::server::routes::errors;
use crate::server::state::AppState;
use crate::storage::cache::QUIZ_TTL_SECS;
use actix_web::{HttpResponse, Result as ActixResult, web};
use serde::Deserialize;
use tracing::{info, warn};

/// Request body for POST /api/generate-cprs
#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    /// Concept to quiz
    #[serde(default)]
    pub concept: Option<String>,
}

/// Generate a six-question CPRS quiz for a concept
///
/// Cached per normalized concept name; guide references are recomputed on
/// every request so they are never served stale.
pub async fn generate_cprs(
    state: web::Data<AppState>,
    request: web::Json<QuizRequest>,
) -> ActixResult<HttpResponse> {
    let Some(concept) = request.into_inner().concept else {
        return Ok(errors::validation_error("No concept provided"));
    };
    let concept = concept.trim().to_string();
    if concept.is_empty() {
        return Ok(errors::validation_error("Concept cannot be empty"));
    }

    let guide_references = state.content.guide_index.find_references(&[concept.as_str()]);

    match run_quiz(&state, &concept, guide_references).await {
        Ok(sheet) => Ok(HttpResponse::Ok().json(sheet)),
        Err(fallback) => {
            if fallback.error.is_some() {
                warn!("Quiz generation fell back: {:?}", fallback.error);
            }
            Ok(HttpResponse::Ok().json(fallback))
        }
    }
}

/// The quiz pipeline
///
/// Cache first, then credential check, then completion. Every failure
/// converts into the fallback payload via `?`.
async fn run_quiz(
    state: &AppState,
    concept: &str,
    guide_references: Vec<GuideReference>,
) -> Result<QuizSheet, QuizFallback> {
    let cache_key = concept_cache_key(concept);

    if let Some(mut cached) = state.storage.cache.get_json::<QuizSheet>(&cache_key).await? {
        info!("Serving cached quiz for: {}", concept);
        cached.cached = true;
        cached.guide_references = guide_references;
        return Ok(cached);
    }

    let Some(client) = &state.completion else {
        return Err(QuizFallback::missing_credential(
            concept.to_string(),
            guide_references,
        ));
    };

    let messages = [
        system_message(QUIZ_SYSTEM_PROMPT),
        user_message(quiz_prompt(concept, &state.content.taxonomy)),
    ];
    let mut sheet: QuizSheet = client.complete_json(&messages, QUIZ_MAX_TOKENS).await?;
    sheet.guide_references = guide_references;

    state
        .storage
        .cache
        .put_json(&cache_key, &sheet, QUIZ_TTL_SECS)
        .await?;

    Ok(sheet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::routes::{configure_routes, test_support};
    use actix_web::{App, test};
    use serde_json::{Value, json};

    #[actix_web::test]
    async fn test_missing_concept_is_a_client_error() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_support::bare_state()))
                .configure(configure_routes),
        )
        .await;

        let request = test::TestRequest::post()
            .uri("/api/generate-cprs")
            .set_json(json!({}))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), 400);
        let body: Value = test::read_body_json(response).await;
        assert_eq!(body["error"], "No concept provided");
    }

    #[actix_web::test]
    async fn test_empty_concept_is_rejected() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_support::bare_state()))
                .configure(configure_routes),
        )
        .await;

        for concept in ["", "   "] {
            let request = test::TestRequest::post()
                .uri("/api/generate-cprs")
                .set_json(json!({ "concept": concept }))
                .to_request();
            let response = test::call_service(&app, request).await;
            assert_eq!(response.status(), 400);
            let body: Value = test::read_body_json(response).await;
            assert_eq!(body["error"], "Concept cannot be empty");
        }
    }

    #[actix_web::test]
    async fn test_no_credential_returns_fallback_with_references() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_support::bare_state()))
                .configure(configure_routes),
        )
        .await;

        let request = test::TestRequest::post()
            .uri("/api/generate-cprs")
            .set_json(json!({ "concept": "Blob Storage" }))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), 200);

        let body: Value = test::read_body_json(response).await;
        assert_eq!(body["fallback"], Value::Bool(true));
        assert_eq!(body["concept"], "Blob Storage");
        assert_eq!(body["questions"], json!([]));
        assert_eq!(
            body["guide_references"][0]["guide"],
            "azure_blob_storage.html"
        );
    }
}
