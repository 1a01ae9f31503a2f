//! HTTP handlers for keyword endpoints.
//!
//! These handlers connect Axum routes to the keyword query handlers.

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::{
    AnalyzeKeywordHandler, AnalyzeKeywordQuery, FetchTopKeywordsHandler, KeywordServiceError,
    LatestAnalysisTracker,
};
use crate::domain::keyword::{KeywordAnalysis, TopKeywords};

use super::dto::{AnalyzeKeywordRequest, ErrorResponse, SubmissionResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Keyword API error that implements IntoResponse.
#[derive(Debug)]
pub enum KeywordApiError {
    BadRequest(String),
    NotFound(String),
    Upstream(KeywordServiceError),
}

impl IntoResponse for KeywordApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            KeywordApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg))
            }
            KeywordApiError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorResponse::not_found(msg)),
            KeywordApiError::Upstream(err) => (
                StatusCode::BAD_GATEWAY,
                ErrorResponse::bad_gateway(err.code(), err.to_string()),
            ),
        };
        (status, Json(error)).into_response()
    }
}

impl From<KeywordServiceError> for KeywordApiError {
    fn from(error: KeywordServiceError) -> Self {
        KeywordApiError::Upstream(error)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing keyword dependencies.
#[derive(Clone)]
pub struct KeywordAppState {
    pub top_keywords: Arc<FetchTopKeywordsHandler>,
    pub analyze: Arc<AnalyzeKeywordHandler>,
    pub tracker: Arc<LatestAnalysisTracker>,
}

impl KeywordAppState {
    /// Builds the state around one analysis handler, shared with the tracker.
    pub fn new(top_keywords: FetchTopKeywordsHandler, analyze: AnalyzeKeywordHandler) -> Self {
        let analyze = Arc::new(analyze);
        Self {
            top_keywords: Arc::new(top_keywords),
            tracker: Arc::new(LatestAnalysisTracker::new(analyze.clone())),
            analyze,
        }
    }
}

fn non_blank(keyword: &str) -> Result<String, KeywordApiError> {
    let trimmed = keyword.trim();
    if trimmed.is_empty() {
        return Err(KeywordApiError::BadRequest("keyword must not be blank".to_string()));
    }
    Ok(trimmed.to_string())
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/keywords/top
///
/// Always 200; placeholder rows are flagged through `origin`.
pub async fn get_top_keywords(State(state): State<KeywordAppState>) -> Json<TopKeywords> {
    Json(state.top_keywords.handle().await)
}

/// GET /api/keywords/:keyword/analysis
pub async fn get_keyword_analysis(
    State(state): State<KeywordAppState>,
    Path(keyword): Path<String>,
) -> Result<Json<KeywordAnalysis>, KeywordApiError> {
    let keyword = non_blank(&keyword)?;
    let analysis = state.analyze.handle(AnalyzeKeywordQuery::new(keyword)).await?;
    Ok(Json(analysis))
}

/// POST /api/analysis
///
/// Runs through the latest-analysis tracker; a reply overtaken by a newer
/// submission reports `superseded`.
pub async fn submit_analysis(
    State(state): State<KeywordAppState>,
    Json(request): Json<AnalyzeKeywordRequest>,
) -> Result<Json<SubmissionResponse>, KeywordApiError> {
    let keyword = non_blank(&request.keyword)?;
    let outcome = state.tracker.submit(AnalyzeKeywordQuery::new(keyword)).await?;
    Ok(Json(outcome.into()))
}

/// GET /api/analysis/latest
pub async fn get_latest_analysis(
    State(state): State<KeywordAppState>,
) -> Result<Json<KeywordAnalysis>, KeywordApiError> {
    state
        .tracker
        .current()
        .await
        .map(Json)
        .ok_or_else(|| KeywordApiError::NotFound("no analysis has completed yet".to_string()))
}

/// GET /health
pub async fn health() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::extraction::ExtractionError;
    use crate::ports::OracleError;

    #[test]
    fn blank_keyword_is_rejected() {
        assert!(matches!(non_blank("   "), Err(KeywordApiError::BadRequest(_))));
        assert_eq!(non_blank("  coffee ").unwrap(), "coffee");
    }

    #[test]
    fn upstream_errors_map_to_bad_gateway() {
        let errors = [
            KeywordServiceError::EmptyResponse,
            KeywordServiceError::MalformedResponse(ExtractionError::malformed("no payload")),
            KeywordServiceError::Transport(OracleError::Timeout { timeout_secs: 120 }),
        ];
        for error in errors {
            let response = KeywordApiError::from(error).into_response();
            assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        }
    }

    #[test]
    fn not_found_maps_to_404() {
        let response = KeywordApiError::NotFound("none".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
