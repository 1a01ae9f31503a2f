//! HTTP routes for keyword endpoints.

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use super::handlers::{
    get_keyword_analysis, get_latest_analysis, get_top_keywords, health, submit_analysis,
    KeywordAppState,
};

/// Creates the keyword router with all routes.
pub fn keyword_routes(state: KeywordAppState) -> Router {
    Router::new()
        // GET /api/keywords/top
        .route("/api/keywords/top", get(get_top_keywords))
        // GET /api/keywords/:keyword/analysis
        .route("/api/keywords/:keyword/analysis", get(get_keyword_analysis))
        // POST /api/analysis
        .route("/api/analysis", post(submit_analysis))
        // GET /api/analysis/latest
        .route("/api/analysis/latest", get(get_latest_analysis))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
