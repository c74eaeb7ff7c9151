//! HPI generation endpoint.

use axum::extract::State;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::hpi::{EncounterForm, HpiResult};

/// `POST /generate-hpi` — draft an HPI narrative from the encounter form.
///
/// The generation call is blocking HTTP, so it runs on the blocking pool.
/// A missing or non-JSON body is a 400, mirroring the frontend contract.
pub async fn generate(
    State(ctx): State<ApiContext>,
    body: Option<Json<EncounterForm>>,
) -> Result<Json<HpiResult>, ApiError> {
    let Json(form) =
        body.ok_or_else(|| ApiError::BadRequest("No input data provided".into()))?;

    let core = ctx.core.clone();
    let result = tokio::task::spawn_blocking(move || core.hpi.draft(&form))
        .await
        .map_err(|e| ApiError::Internal(format!("Generation task failed: {e}")))??;

    Ok(Json(result))
}
