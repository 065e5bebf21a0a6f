//! Score sync endpoints

use crate::server::routes::errors;
use crate::server::state::AppState;
use actix_web::{HttpResponse, Result as ActixResult, web};
use serde::Deserialize;
use serde_json::json;
use tracing::error;

/// Query parameters for GET /api/sync
#[derive(Debug, Deserialize)]
pub struct SyncQuery {
    /// Opaque user id
    #[serde(rename = "userId", default)]
    pub user_id: Option<String>,
}

/// Request body for PUT /api/sync
#[derive(Debug, Deserialize)]
pub struct SyncWriteRequest {
    /// Opaque user id
    #[serde(rename = "userId", default)]
    pub user_id: Option<String>,
    /// Opaque score blob
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

/// Read the score row for a user
///
/// An absent row answers `{found:false}` with 200; only a failing store
/// is an error.
pub async fn get_scores(
    state: web::Data<AppState>,
    query: web::Query<SyncQuery>,
) -> ActixResult<HttpResponse> {
    let Some(user_id) = query.user_id.as_deref().filter(|id| !id.is_empty()) else {
        return Ok(errors::validation_error("userId required"));
    };

    let Some(scores) = &state.storage.scores else {
        return Ok(errors::unavailable_error("Database not configured"));
    };

    match scores.fetch(user_id).await {
        Ok(None) => Ok(HttpResponse::Ok().json(json!({ "found": false }))),
        Ok(Some(record)) => Ok(HttpResponse::Ok().json(json!({
            "found": true,
            "data": record.data,
            "updatedAt": record.updated_at.to_rfc3339(),
        }))),
        Err(e) => {
            error!("Score read failed: {}", e);
            Ok(errors::internal_error(&e.to_string()))
        }
    }
}

/// Upsert the score row for a user, replacing any prior blob wholesale
pub async fn put_scores(
    state: web::Data<AppState>,
    request: web::Json<SyncWriteRequest>,
) -> ActixResult<HttpResponse> {
    let request = request.into_inner();
    let (Some(user_id), Some(data)) = (
        request.user_id.filter(|id| !id.is_empty()),
        request.data,
    ) else {
        return Ok(errors::validation_error("userId and data required"));
    };

    let Some(scores) = &state.storage.scores else {
        return Ok(errors::unavailable_error("Database not configured"));
    };

    match scores.upsert(&user_id, data).await {
        Ok(updated_at) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "updatedAt": updated_at.to_rfc3339(),
        }))),
        Err(e) => {
            error!("Score write failed: {}", e);
            Ok(errors::internal_error(&e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::routes::{configure_routes, test_support};
    use actix_web::{App, test};
    use serde_json::Value;

    #[actix_web::test]
    async fn test_get_without_user_id_is_a_client_error() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_support::bare_state()))
                .configure(configure_routes),
        )
        .await;

        let request = test::TestRequest::get().uri("/api/sync").to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), 400);
        let body: Value = test::read_body_json(response).await;
        assert_eq!(body["error"], "userId required");
    }

    #[actix_web::test]
    async fn test_get_without_store_is_unavailable() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_support::bare_state()))
                .configure(configure_routes),
        )
        .await;

        let request = test::TestRequest::get()
            .uri("/api/sync?userId=user_abc")
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), 503);
        let body: Value = test::read_body_json(response).await;
        assert_eq!(body["error"], "Database not configured");
    }

    #[actix_web::test]
    async fn test_put_requires_both_fields() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_support::bare_state()))
                .configure(configure_routes),
        )
        .await;

        for body in [
            serde_json::json!({}),
            serde_json::json!({ "userId": "user_abc" }),
            serde_json::json!({ "data": { "domain_1": {} } }),
        ] {
            let request = test::TestRequest::put()
                .uri("/api/sync")
                .set_json(body)
                .to_request();
            let response = test::call_service(&app, request).await;
            assert_eq!(response.status(), 400);
            let body: Value = test::read_body_json(response).await;
            assert_eq!(body["error"], "userId and data required");
        }
    }

    #[cfg(feature = "sqlite")]
    mod with_store {
        use super::*;
        use crate::config::{Config, DatabaseConfig};
        use crate::content::ContentLibrary;
        use crate::server::state::AppState;
        use crate::storage::{CacheStore, ScoreStore, StorageLayer};
        use std::sync::Arc;

        async fn state_with_store() -> AppState {
            let store = ScoreStore::connect(&DatabaseConfig {
                url: "sqlite::memory:".to_string(),
                enabled: true,
                max_connections: 1,
                connection_timeout: 5,
            })
            .await
            .unwrap();

            AppState::new(
                Config::default(),
                ContentLibrary::builtin(),
                None,
                StorageLayer {
                    cache: Arc::new(CacheStore::noop()),
                    scores: Some(Arc::new(store)),
                    decks: None,
                },
            )
        }

        #[actix_web::test]
        async fn test_absent_user_answers_found_false() {
            let app = test::init_service(
                App::new()
                    .app_data(web::Data::new(state_with_store().await))
                    .configure(configure_routes),
            )
            .await;

            let request = test::TestRequest::get()
                .uri("/api/sync?userId=ghost")
                .to_request();
            let response = test::call_service(&app, request).await;
            assert_eq!(response.status(), 200);
            let body: Value = test::read_body_json(response).await;
            assert_eq!(body, serde_json::json!({ "found": false }));
        }

        #[actix_web::test]
        async fn test_write_then_read_round_trips() {
            let app = test::init_service(
                App::new()
                    .app_data(web::Data::new(state_with_store().await))
                    .configure(configure_routes),
            )
            .await;

            let write = test::TestRequest::put()
                .uri("/api/sync")
                .set_json(serde_json::json!({
                    "userId": "user_abc",
                    "data": { "domain_2": { "correct": 3, "total": 5 } }
                }))
                .to_request();
            let body: Value = test::call_and_read_body_json(&app, write).await;
            assert_eq!(body["success"], Value::Bool(true));
            assert!(body["updatedAt"].is_string());

            let read = test::TestRequest::get()
                .uri("/api/sync?userId=user_abc")
                .to_request();
            let body: Value = test::call_and_read_body_json(&app, read).await;
            assert_eq!(body["found"], Value::Bool(true));
            assert_eq!(body["data"]["domain_2"]["correct"], 3);
        }

        #[actix_web::test]
        async fn test_second_write_wins_wholesale() {
            let app = test::init_service(
                App::new()
                    .app_data(web::Data::new(state_with_store().await))
                    .configure(configure_routes),
            )
            .await;

            for data in [
                serde_json::json!({ "domain_1": { "correct": 1, "total": 1 } }),
                serde_json::json!({ "domain_5": { "correct": 2, "total": 4 } }),
            ] {
                let write = test::TestRequest::put()
                    .uri("/api/sync")
                    .set_json(serde_json::json!({ "userId": "user_abc", "data": data }))
                    .to_request();
                let response = test::call_service(&app, write).await;
                assert_eq!(response.status(), 200);
            }

            let read = test::TestRequest::get()
                .uri("/api/sync?userId=user_abc")
                .to_request();
            let body: Value = test::call_and_read_body_json(&app, read).await;
            // Second blob only; no merge with the first
            assert!(body["data"].get("domain_1").is_none());
            assert_eq!(body["data"]["domain_5"]["total"], 4);
        }
    }
}
