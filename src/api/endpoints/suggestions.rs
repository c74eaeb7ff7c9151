//! Medication autocomplete endpoint.

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::api::types::ApiContext;
use crate::suggest::{rank_medications, Suggestion, DEFAULT_SUGGESTION_LIMIT};

#[derive(Deserialize)]
pub struct SuggestionsQuery {
    #[serde(default)]
    pub q: String,
}

/// `GET /suggestions?q=` — top-5 fuzzy matches as
/// `[generic_name, displayed_alias]` pairs. An absent or empty query
/// yields an empty array.
pub async fn list(
    State(ctx): State<ApiContext>,
    Query(query): Query<SuggestionsQuery>,
) -> Json<Vec<Suggestion>> {
    Json(rank_medications(
        &query.q,
        &ctx.core.reference.medications,
        DEFAULT_SUGGESTION_LIMIT,
    ))
}
