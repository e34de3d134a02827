use axum::{
    extract::{Query, State},
    response::Json,
};
use serde::{Deserialize, Serialize};
use storefront_core::client::suggest;

use crate::state::AppState;

const DEFAULT_SUGGESTION_LIMIT: usize = 8;

#[derive(Debug, Deserialize)]
pub struct NormalizeParams {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct NormalizeResponse {
    pub query: String,
    pub normalized: String,
}

pub async fn normalize_query(
    State(state): State<AppState>,
    Query(params): Query<NormalizeParams>,
) -> Json<NormalizeResponse> {
    let normalized = state.normalizer().normalize(&params.q);
    tracing::debug!("[normalize] {:?} → {:?}", params.q, normalized);
    Json(NormalizeResponse { query: params.q, normalized })
}

#[derive(Debug, Deserialize)]
pub struct SuggestParams {
    #[serde(default)]
    pub q: String,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SuggestResponse {
    pub suggestions: Vec<String>,
}

pub async fn suggest_queries(Query(params): Query<SuggestParams>) -> Json<SuggestResponse> {
    let limit = params.limit.unwrap_or(DEFAULT_SUGGESTION_LIMIT);
    let suggestions = suggest(&params.q, limit).into_iter().map(str::to_string).collect();
    Json(SuggestResponse { suggestions })
}
