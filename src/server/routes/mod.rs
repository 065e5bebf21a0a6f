//! HTTP route modules
//!
//! All handlers return well-formed JSON; the two AI-generation endpoints
//! additionally never surface downstream failures as HTTP errors (the
//! frontend inspects `fallback`/`error` fields instead).

pub mod concepts;
pub mod decks;
pub mod quiz;
pub mod sync;
pub mod users;

use crate::server::state::AppState;
use actix_web::{HttpResponse, Result as ActixResult, web};
use serde_json::json;

/// Configure API routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // AI-backed study content
            .route("/extract-concepts", web::post().to(concepts::extract_concepts))
            .route("/generate-cprs", web::post().to(quiz::generate_cprs))
            // Score sync
            .route("/sync", web::get().to(sync::get_scores))
            .route("/sync", web::put().to(sync::put_scores))
            // User id issuance
            .route("/user", web::post().to(users::create_user))
            // Deck downloads
            .route("/anki-decks", web::get().to(decks::list_decks))
            .route("/anki-decks/{name}", web::get().to(decks::get_deck)),
    );
}

/// Catch-all service discovery document
///
/// Any unmatched path or method lands here; the feature flags report
/// which optional backends are configured.
pub async fn service_descriptor(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(json!({
        "status": "AZ-104 Study Hub API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": [
            "POST /api/extract-concepts",
            "POST /api/generate-cprs",
            "GET /api/sync?userId=xxx",
            "PUT /api/sync",
            "POST /api/user",
            "GET /api/anki-decks",
            "GET /api/anki-decks/:name"
        ],
        "features": {
            "ai_generation": state.completion.is_some(),
            "caching": !state.storage.cache.is_noop(),
            "score_sync": state.storage.scores.is_some(),
            "deck_storage": state.storage.decks.is_some(),
        }
    })))
}

/// Error response helpers
///
/// Flat `{"error": message}` bodies, matching the wire contract of every
/// endpoint's error shape.
pub mod errors {
    use actix_web::HttpResponse;
    use serde_json::json;

    /// Create a 400 validation error response
    pub fn validation_error(message: &str) -> HttpResponse {
        HttpResponse::BadRequest().json(json!({ "error": message }))
    }

    /// Create a 503 backend-not-configured error response
    pub fn unavailable_error(message: &str) -> HttpResponse {
        HttpResponse::ServiceUnavailable().json(json!({ "error": message }))
    }

    /// Create a 404 not-found error response
    pub fn not_found_error(message: &str) -> HttpResponse {
        HttpResponse::NotFound().json(json!({ "error": message }))
    }

    /// Create a 500 internal error response
    pub fn internal_error(message: &str) -> HttpResponse {
        HttpResponse::InternalServerError().json(json!({ "error": message }))
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::config::Config;
    use crate::content::ContentLibrary;
    use crate::storage::{CacheStore, StorageLayer};
    use std::sync::Arc;

    /// AppState with no optional backend configured
    pub fn bare_state() -> AppState {
        AppState::new(
            Config::default(),
            ContentLibrary::builtin(),
            None,
            StorageLayer {
                cache: Arc::new(CacheStore::noop()),
                scores: None,
                decks: None,
            },
        )
    }
}
