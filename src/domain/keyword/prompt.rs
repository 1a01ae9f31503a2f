//! Prompt construction for the two query kinds.
//!
//! Both prompts ask for a single ```json fenced block so the reply can be
//! picked up by the fenced-block path of the extractor.

use super::analysis::{EXPECTED_RELATED_KEYWORDS, EXPECTED_TREND_POINTS};

/// Builds the natural-language requests sent to the oracle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptBuilder {
    market: String,
}

impl PromptBuilder {
    /// Creates a builder for the given search market, e.g. "Naver (South Korea)".
    pub fn new(market: impl Into<String>) -> Self {
        Self {
            market: market.into(),
        }
    }

    pub fn market(&self) -> &str {
        &self.market
    }

    /// Prompt for the top `top_n` keywords of the past week.
    pub fn ranking_prompt(&self, top_n: u32) -> String {
        format!(
            r#"Find the {top_n} most popular search keywords of the past week on {market}.
List as many as you can, ordered from rank 1 to rank {top_n}.
Base the ranking on recent news, entertainment, sports and social issues.

Output ONLY JSON of the following shape, inside a ```json code block:
Array<{{
  "rank": number,
  "keyword": string,
  "category": string,
  "change": "up" | "down" | "new" | "same",
  "volumeEstimate": string (e.g. "100K+", "50K+")
}}>"#,
            top_n = top_n,
            market = self.market,
        )
    }

    /// Prompt for an SEO and search analysis of one keyword.
    pub fn analysis_prompt(&self, keyword: &str) -> String {
        let keyword_json = serde_json::Value::String(keyword.to_string()).to_string();
        format!(
            r#"Perform an SEO and search analysis of the keyword {keyword_json} for {market}.

Output ONLY a JSON object of the following shape, inside a ```json code block:
{{
  "keyword": {keyword_json},
  "searchVolume": "estimated monthly searches (e.g. 15,000+)",
  "competition": "Low" | "Medium" | "High" | "Very High",
  "competitionScore": integer from 0 to 100 (higher means more competition),
  "cpcEstimate": "estimated cost per click in local currency",
  "summary": "two sentences on the current trend and competition",
  "trendData": [ // {trend_points} daily interest index points (0-100), oldest first
    {{"date": "D-6", "value": number}},
    {{"date": "D-5", "value": number}},
    ...
    {{"date": "Today", "value": number}}
  ],
  "relatedKeywords": [ // {related} related keywords
    {{"keyword": string, "relevance": integer from 0 to 100}}
  ]
}}"#,
            keyword_json = keyword_json,
            market = self.market,
            trend_points = EXPECTED_TREND_POINTS,
            related = EXPECTED_RELATED_KEYWORDS,
        )
    }
}
