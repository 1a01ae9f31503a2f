//! Keyword HTTP adapter module.
//!
//! Exposes the ranking, analysis and latest-analysis endpoints.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{AnalyzeKeywordRequest, ErrorResponse, SubmissionResponse};
pub use handlers::{KeywordApiError, KeywordAppState};
pub use routes::keyword_routes;
