use axum::{
    extract::DefaultBodyLimit, http::StatusCode, response::IntoResponse, routing::get, Router,
};
use storefront_core::proxy::build_search_router;
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::api;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let search_router = build_search_router(state.proxy().clone());
    let static_dir = state.config().server.static_dir.clone();

    let app = Router::<AppState>::new()
        .nest("/api", api::router())
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
        .with_state(state)
        .merge(search_router);

    // SPA fallback: unknown paths serve index.html so client-side routes
    // like /product/:id work on direct access.
    let app = match static_dir {
        Some(dir) => {
            let index_path = format!("{}/index.html", dir);
            let spa_service = ServeDir::new(&dir)
                .append_index_html_on_directories(true)
                .fallback(ServeFile::new(&index_path));
            app.fallback_service(spa_service)
        },
        None => app,
    };

    app.layer(DefaultBodyLimit::max(10 * 1024 * 1024)).layer(TraceLayer::new_for_http())
}

async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, axum::Json(serde_json::json!({"status": "ok"})))
}
