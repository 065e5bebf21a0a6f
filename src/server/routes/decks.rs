//! Deck listing and download endpoints

use crate::server::routes::errors;
use crate::server::state::AppState;
use actix_web::{HttpResponse, Result as ActixResult, web};
use serde_json::json;
use tracing::error;

/// List all stored flashcard decks
pub async fn list_decks(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    let Some(decks) = &state.storage.decks else {
        return Ok(errors::unavailable_error("Deck storage not configured"));
    };

    match decks.list().await {
        Ok(decks) => Ok(HttpResponse::Ok().json(json!({ "decks": decks }))),
        Err(e) => {
            error!("Deck listing failed: {}", e);
            Ok(errors::internal_error(&e.to_string()))
        }
    }
}

/// Download one deck as an octet-stream attachment
pub async fn get_deck(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let name = path.into_inner();

    let Some(decks) = &state.storage.decks else {
        return Ok(errors::unavailable_error("Deck storage not configured"));
    };

    match decks.get(&name).await {
        Ok(Some(content)) => Ok(HttpResponse::Ok()
            .content_type("application/octet-stream")
            .insert_header((
                "Content-Disposition",
                format!("attachment; filename=\"{}\"", name),
            ))
            .body(content)),
        Ok(None) => Ok(errors::not_found_error("Deck not found")),
        Err(e) => {
            error!("Deck download failed: {}", e);
            Ok(errors::internal_error(&e.to_string()))
        }
    }
}
