//! User-id issuance endpoint

use actix_web::{HttpResponse, Result as ActixResult};
use serde_json::json;
use uuid::Uuid;

/// Issue a fresh opaque user id
///
/// Stateless: nothing is persisted until the client writes scores for the
/// id via PUT /api/sync.
pub async fn create_user() -> ActixResult<HttpResponse> {
    let user_id = format!("user_{}", Uuid::new_v4());
    Ok(HttpResponse::Ok().json(json!({ "userId": user_id })))
}

#[cfg(test)]
mod tests {
    use crate::server::routes::{configure_routes, test_support};
    use actix_web::{App, test, web};
    use serde_json::Value;

    #[actix_web::test]
    async fn test_each_call_issues_a_fresh_id() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_support::bare_state()))
                .configure(configure_routes),
        )
        .await;

        let mut ids = Vec::new();
        for _ in 0..2 {
            let request = test::TestRequest::post().uri("/api/user").to_request();
            let body: Value = test::call_and_read_body_json(&app, request).await;
            let id = body["userId"].as_str().unwrap().to_string();
            assert!(id.starts_with("user_"));
            ids.push(id);
        }
        assert_ne!(ids[0], ids[1]);
    }
}
