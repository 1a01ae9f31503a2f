//! Application handlers.
//!
//! Query handlers that orchestrate prompt building, the oracle call and
//! payload validation.

pub mod keyword;

pub use keyword::{
    AnalysisOutcome, AnalyzeKeywordHandler, AnalyzeKeywordQuery, FetchTopKeywordsHandler,
    KeywordQueryConfig, KeywordServiceError, LatestAnalysisTracker,
};
