//! AnalyzeKeywordHandler - Query handler for single keyword analysis.
//!
//! Unlike the ranking, analysis has no placeholder: every failure is
//! returned to the caller.

use std::sync::Arc;

use crate::domain::keyword::{
    parse_analysis, KeywordAnalysis, PromptBuilder, EXPECTED_RELATED_KEYWORDS,
    EXPECTED_TREND_POINTS,
};
use crate::ports::{OracleRequest, SearchOracle};

use super::config::KeywordQueryConfig;
use super::error::{payload_of, KeywordServiceError};

/// Query to analyze one keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzeKeywordQuery {
    /// Keyword to analyze. Callers reject blank input before building the query.
    pub keyword: String,
}

impl AnalyzeKeywordQuery {
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
        }
    }
}

/// Handler for keyword analysis.
pub struct AnalyzeKeywordHandler {
    oracle: Arc<dyn SearchOracle>,
    prompts: PromptBuilder,
    config: KeywordQueryConfig,
}

impl AnalyzeKeywordHandler {
    pub fn new(
        oracle: Arc<dyn SearchOracle>,
        prompts: PromptBuilder,
        config: KeywordQueryConfig,
    ) -> Self {
        Self {
            oracle,
            prompts,
            config,
        }
    }

    pub async fn handle(
        &self,
        query: AnalyzeKeywordQuery,
    ) -> Result<KeywordAnalysis, KeywordServiceError> {
        let request = OracleRequest::new(self.prompts.analysis_prompt(&query.keyword))
            .with_temperature(self.config.analysis_temperature)
            .with_search_grounding(true);
        let request_id = request.request_id;

        let result = self.run(request).await;
        match &result {
            Ok(analysis) => tracing::info!(
                %request_id,
                keyword = %query.keyword,
                sources = analysis.sources.len(),
                "Analyzed keyword"
            ),
            Err(err) => tracing::error!(
                %request_id,
                keyword = %query.keyword,
                error = %err,
                "Error analyzing keyword"
            ),
        }
        result
    }

    async fn run(&self, request: OracleRequest) -> Result<KeywordAnalysis, KeywordServiceError> {
        let request_id = request.request_id;
        let response = self.oracle.generate(request).await?;
        let payload = payload_of(&response)?;
        let analysis = parse_analysis(payload, response.citations)?;

        if analysis.trend_data.len() != EXPECTED_TREND_POINTS {
            tracing::warn!(
                %request_id,
                received = analysis.trend_data.len(),
                "Unexpected number of trend points"
            );
        }
        if analysis.related_keywords.len() != EXPECTED_RELATED_KEYWORDS {
            tracing::warn!(
                %request_id,
                received = analysis.related_keywords.len(),
                "Unexpected number of related keywords"
            );
        }

        Ok(analysis)
    }
}
