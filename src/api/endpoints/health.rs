//! Health check endpoint.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::types::ApiContext;
use crate::config;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub medications_loaded: usize,
    pub providers_loaded: usize,
    pub generation_backed: bool,
}

/// `GET /health` — liveness plus catalog/backend status.
pub async fn check(State(ctx): State<ApiContext>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: config::APP_VERSION,
        medications_loaded: ctx.core.reference.medications.len(),
        providers_loaded: ctx.core.reference.providers.len(),
        generation_backed: ctx.core.hpi.is_backed(),
    })
}
