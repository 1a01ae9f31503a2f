//! Single keyword analysis records.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ranking::json_kind;
use crate::domain::foundation::{Score, ValidationError};

/// Number of trend points the oracle is asked for ("D-6" .. "Today").
pub const EXPECTED_TREND_POINTS: usize = 7;

/// Number of related keywords the oracle is asked for.
pub const EXPECTED_RELATED_KEYWORDS: usize = 5;

/// How crowded the keyword is among advertisers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompetitionLevel {
    Low,
    Medium,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

/// One point of the daily interest index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// Day label such as "D-3" or "Today".
    pub date: String,
    pub value: f64,
}

/// A keyword related to the analysed one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedKeyword {
    pub keyword: String,
    pub relevance: Score,
}

/// Analysis of one keyword.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordAnalysis {
    /// Keyword as echoed by the oracle; not required to equal the input.
    pub keyword: String,
    pub search_volume: String,
    pub competition: CompetitionLevel,
    pub competition_score: Score,
    pub cpc_estimate: String,
    pub summary: String,
    /// Chronological, oldest first.
    pub trend_data: Vec<TrendPoint>,
    pub related_keywords: Vec<RelatedKeyword>,
    /// Grounding citation URIs, in the order returned, duplicates kept.
    pub sources: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawRelatedKeyword {
    keyword: String,
    relevance: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawKeywordAnalysis {
    keyword: String,
    search_volume: String,
    competition: CompetitionLevel,
    competition_score: i64,
    cpc_estimate: String,
    summary: String,
    trend_data: Vec<TrendPoint>,
    related_keywords: Vec<RawRelatedKeyword>,
}

/// Validates an extracted payload into an analysis record.
///
/// Any `sources` field in the payload is ignored; the caller merges in the
/// grounding citations of the reply instead.
pub fn parse_analysis(
    payload: Value,
    sources: Vec<String>,
) -> Result<KeywordAnalysis, ValidationError> {
    if !payload.is_object() {
        return Err(ValidationError::Schema(format!(
            "expected an analysis object, got {}",
            json_kind(&payload)
        )));
    }

    let raw: RawKeywordAnalysis = serde_json::from_value(payload)?;

    let keyword = raw.keyword.trim();
    if keyword.is_empty() {
        return Err(ValidationError::empty_field("keyword"));
    }

    let competition_score = Score::try_new(raw.competition_score).map_err(|_| {
        ValidationError::out_of_range("competitionScore", 0, 100, raw.competition_score)
    })?;

    let related_keywords = raw
        .related_keywords
        .into_iter()
        .enumerate()
        .map(|(index, related)| {
            let relevance = Score::try_new(related.relevance).map_err(|_| {
                ValidationError::out_of_range("relevance", 0, 100, related.relevance)
                    .at_index("relatedKeywords", index)
            })?;
            Ok(RelatedKeyword {
                keyword: related.keyword.trim().to_string(),
                relevance,
            })
        })
        .collect::<Result<Vec<_>, ValidationError>>()?;

    Ok(KeywordAnalysis {
        keyword: keyword.to_string(),
        search_volume: raw.search_volume,
        competition: raw.competition,
        competition_score,
        cpc_estimate: raw.cpc_estimate,
        summary: raw.summary,
        trend_data: raw.trend_data,
        related_keywords,
        sources,
    })
}
