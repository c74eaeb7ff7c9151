//! Medication detail endpoint.

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;

#[derive(Serialize)]
pub struct MedicationDetailResponse {
    pub name: String,
    pub description: String,
    pub alternate_names: Vec<String>,
    pub mechanism_of_action: String,
}

/// `GET /medication/:name` — full detail for one catalog entry.
/// Lookup is case-insensitive on the canonical name.
pub async fn detail(
    State(ctx): State<ApiContext>,
    Path(name): Path<String>,
) -> Result<Json<MedicationDetailResponse>, ApiError> {
    let record = ctx
        .core
        .reference
        .medications
        .get(&name)
        .ok_or_else(|| ApiError::NotFound("Medication not found".into()))?;

    Ok(Json(MedicationDetailResponse {
        name: record.label.clone(),
        description: record.description.clone(),
        alternate_names: record.alternate_names.clone(),
        mechanism_of_action: record.mechanism_of_action.clone(),
    }))
}
