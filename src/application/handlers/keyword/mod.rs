//! Keyword query handlers.
//!
//! - `FetchTopKeywordsHandler` - best-effort ranking, falls back to placeholder rows
//! - `AnalyzeKeywordHandler` - single keyword analysis, propagates every failure
//! - `LatestAnalysisTracker` - discards analysis results overtaken by newer requests

mod analyze_keyword;
mod config;
mod error;
mod fetch_top_keywords;
mod latest_analysis;

pub use analyze_keyword::{AnalyzeKeywordHandler, AnalyzeKeywordQuery};
pub use config::KeywordQueryConfig;
pub use error::KeywordServiceError;
pub use fetch_top_keywords::FetchTopKeywordsHandler;
pub use latest_analysis::{AnalysisOutcome, LatestAnalysisTracker};
