//! API Routes
//!
//! Helper endpoints next to the search proxy. `/api/search` itself is the
//! proxy router, merged in `router.rs`.

mod normalize;

pub use normalize::{NormalizeResponse, SuggestResponse};

use axum::{routing::get, Router};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/normalize", get(normalize::normalize_query))
        .route("/suggest", get(normalize::suggest_queries))
}
