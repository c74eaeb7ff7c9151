//! API router.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//! API routes live at the top level (the paths the frontend calls); every
//! other path is served from the static assets directory with an
//! `index.html` fallback for client-side routing.

use std::path::Path;
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};

use crate::api::endpoints;
use crate::api::types::ApiContext;
use crate::config;
use crate::core_state::CoreState;

/// Build the API router with the configured assets directory.
pub fn api_router(core: Arc<CoreState>) -> Router {
    build_router(ApiContext::new(core), &config::assets_dir())
}

fn build_router(ctx: ApiContext, assets_dir: &Path) -> Router {
    let api = Router::new()
        .route("/health", get(endpoints::health::check))
        .route("/suggestions", get(endpoints::suggestions::list))
        .route("/medication/:name", get(endpoints::medications::detail))
        .route("/providers", get(endpoints::providers::list))
        .route("/provider/:id", get(endpoints::providers::preferences))
        .route("/generate-hpi", post(endpoints::hpi::generate))
        .with_state(ctx)
        .layer(CorsLayer::permissive());

    let assets = ServeDir::new(assets_dir)
        .fallback(ServeFile::new(assets_dir.join("index.html")));

    api.fallback_service(assets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn test_router() -> Router {
        let core = Arc::new(CoreState::for_tests());
        api_router(core)
    }

    async fn response_json(response: axum::http::Response<Body>) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), 65536)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn health_reports_catalog_counts() {
        let response = test_router().oneshot(get_request("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        assert_eq!(json["status"], "ok");
        assert!(json["medications_loaded"].as_u64().unwrap() > 0);
        assert_eq!(json["generation_backed"], false);
    }

    #[tokio::test]
    async fn suggestions_returns_pair_arrays() {
        let response = test_router()
            .oneshot(get_request("/suggestions?q=lisin"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        assert_eq!(json, serde_json::json!([["lisinopril", "lisinopril"]]));
    }

    #[tokio::test]
    async fn suggestions_brand_query_shows_alias() {
        let response = test_router()
            .oneshot(get_request("/suggestions?q=zestril"))
            .await
            .unwrap();
        let json = response_json(response).await;
        assert_eq!(json, serde_json::json!([["lisinopril", "Zestril"]]));
    }

    #[tokio::test]
    async fn suggestions_empty_query_returns_empty_array() {
        for uri in ["/suggestions?q=", "/suggestions"] {
            let response = test_router().oneshot(get_request(uri)).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            let json = response_json(response).await;
            assert_eq!(json, serde_json::json!([]), "uri {uri}");
        }
    }

    #[tokio::test]
    async fn suggestions_hopeless_query_returns_empty_array() {
        let response = test_router()
            .oneshot(get_request("/suggestions?q=xyzzy"))
            .await
            .unwrap();
        let json = response_json(response).await;
        assert_eq!(json, serde_json::json!([]));
    }

    #[tokio::test]
    async fn medication_detail_shape() {
        let response = test_router()
            .oneshot(get_request("/medication/lisinopril"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        assert_eq!(json["name"], "Lisinopril");
        assert!(json["description"].is_string());
        assert_eq!(json["alternate_names"][0], "Zestril");
        assert!(json["mechanism_of_action"].is_string());
    }

    #[tokio::test]
    async fn medication_lookup_is_case_insensitive() {
        let response = test_router()
            .oneshot(get_request("/medication/LISINOPRIL"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn unknown_medication_returns_404() {
        let response = test_router()
            .oneshot(get_request("/medication/nosuchdrug"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json = response_json(response).await;
        assert_eq!(json["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn providers_lists_id_name_pairs() {
        let response = test_router().oneshot(get_request("/providers")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        assert_eq!(json[0]["id"], "dr-osman");
        assert_eq!(json[0]["name"], "Dr. Osman");
    }

    #[tokio::test]
    async fn provider_preferences_returned_directly() {
        let response = test_router()
            .oneshot(get_request("/provider/dr-osman"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        assert_eq!(json["hpi_style"], "concise");
    }

    #[tokio::test]
    async fn unknown_provider_returns_404() {
        let response = test_router()
            .oneshot(get_request("/provider/nobody"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn generate_hpi_drafts_narrative() {
        let body = serde_json::json!({
            "gender": "female",
            "pastMedicalHistory": "",
            "chiefComplaint": "abdominal pain",
            "onsetTiming": "since this morning",
            "accompaniedBy": "",
            "additionalSymptoms": "nausea",
            "otherNotes": "worse after meals",
            "pertinentNegatives": "fever",
            "currentMedications": ""
        });
        let request = Request::builder()
            .method("POST")
            .uri("/generate-hpi")
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = test_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        let narrative = json["generated_hpi"].as_str().unwrap();
        assert!(narrative.starts_with("with no significant past medical history"));
        assert!(narrative.contains("abdominal pain"));
        assert_eq!(json["source"], "local_draft");
    }

    #[tokio::test]
    async fn generate_hpi_without_body_returns_400() {
        let request = Request::builder()
            .method("POST")
            .uri("/generate-hpi")
            .body(Body::empty())
            .unwrap();

        let response = test_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = response_json(response).await;
        assert_eq!(json["error"]["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn unknown_path_falls_back_to_assets() {
        // No assets directory in the test environment, so the fallback
        // chain bottoms out at 404 rather than an API error body.
        let tmp = tempfile::tempdir().unwrap();
        let ctx = ApiContext::new(Arc::new(CoreState::for_tests()));
        let router = build_router(ctx, tmp.path());

        let response = router.oneshot(get_request("/nonexistent")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn spa_paths_serve_index_html() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("index.html"), "<html>chartscribe</html>").unwrap();

        let ctx = ApiContext::new(Arc::new(CoreState::for_tests()));
        let router = build_router(ctx, tmp.path());

        let response = router.oneshot(get_request("/encounter/new")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
        assert_eq!(&body[..], b"<html>chartscribe</html>");
    }
}
