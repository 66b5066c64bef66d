//! HTTP API route definitions.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers::{
    analyze, health, metrics, not_found, optimize, root, status, suggestions, AppState,
};

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        // Health endpoints
        .route("/health", get(health))
        .route("/status", get(status))
        // Engine operations
        .route("/analyze", post(analyze))
        .route("/optimize", post(optimize))
        // Reporting
        .route("/suggestions", get(suggestions))
        .route("/metrics", get(metrics))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
