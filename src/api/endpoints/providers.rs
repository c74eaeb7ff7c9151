//! Provider directory endpoints.

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;

#[derive(Serialize)]
pub struct ProviderSummary {
    pub id: String,
    pub name: String,
}

/// `GET /providers` — id/name pairs for the provider picker.
pub async fn list(State(ctx): State<ApiContext>) -> Json<Vec<ProviderSummary>> {
    let providers = ctx
        .core
        .reference
        .providers
        .records()
        .map(|p| ProviderSummary {
            id: p.id.clone(),
            name: p.name.clone(),
        })
        .collect();
    Json(providers)
}

/// `GET /provider/:id` — the provider's documentation preferences.
pub async fn preferences(
    State(ctx): State<ApiContext>,
    Path(provider_id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let provider = ctx
        .core
        .reference
        .providers
        .get(&provider_id)
        .ok_or_else(|| ApiError::NotFound("Provider not found".into()))?;
    Ok(Json(provider.preferences.clone()))
}
