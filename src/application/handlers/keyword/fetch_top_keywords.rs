//! FetchTopKeywordsHandler - Query handler for the top keyword ranking.
//!
//! Best-effort: any failure along the way is logged and replaced by the
//! placeholder ranking, so callers always get something to display.

use std::sync::Arc;

use crate::domain::keyword::{is_contiguous, parse_ranking, PromptBuilder, TopKeywords};
use crate::ports::{OracleRequest, SearchOracle};

use super::config::KeywordQueryConfig;
use super::error::{payload_of, KeywordServiceError};

/// Handler for fetching the top keyword ranking.
pub struct FetchTopKeywordsHandler {
    oracle: Arc<dyn SearchOracle>,
    prompts: PromptBuilder,
    config: KeywordQueryConfig,
}

impl FetchTopKeywordsHandler {
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

    /// Fetches the ranking. Never fails; see [`TopKeywords::fallback`].
    pub async fn handle(&self) -> TopKeywords {
        match self.try_fetch().await {
            Ok(result) => result,
            Err(err) => {
                tracing::error!(error = %err, code = err.code(), "Error fetching top keywords, serving placeholder ranking");
                TopKeywords::fallback(err.to_string())
            }
        }
    }

    async fn try_fetch(&self) -> Result<TopKeywords, KeywordServiceError> {
        let request = OracleRequest::new(self.prompts.ranking_prompt(self.config.top_n))
            .with_temperature(self.config.ranking_temperature)
            .with_search_grounding(true);
        let request_id = request.request_id;

        let response = self.oracle.generate(request).await?;
        let payload = payload_of(&response)?;
        let keywords = parse_ranking(payload)?;

        if keywords.len() != self.config.top_n as usize {
            tracing::warn!(
                %request_id,
                requested = self.config.top_n,
                received = keywords.len(),
                "Ranking size differs from the requested size"
            );
        }
        if !is_contiguous(&keywords) {
            tracing::warn!(%request_id, "Ranking has gaps in its ranks");
        }

        tracing::info!(
            %request_id,
            keywords = keywords.len(),
            sources = response.citations.len(),
            "Fetched top keywords"
        );

        Ok(TopKeywords::live(keywords, response.citations))
    }
}
