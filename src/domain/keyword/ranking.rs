//! Top keyword ranking records.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;

use crate::domain::foundation::{Timestamp, ValidationError};

/// Number of placeholder rows shown when the ranking cannot be loaded.
pub const FALLBACK_ROW_COUNT: u32 = 10;

/// Category label carried by placeholder rows.
pub const FALLBACK_CATEGORY: &str = "System";

/// Rank movement compared to the previous period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankChange {
    Up,
    Down,
    New,
    Same,
}

/// One row of the keyword ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordRank {
    /// 1-based position, unique within a ranking.
    pub rank: u32,
    pub keyword: String,
    pub category: String,
    pub change: RankChange,
    /// Free-text magnitude such as "100K+"; never parsed.
    pub volume_estimate: String,
}

impl KeywordRank {
    /// Creates a placeholder row for the given rank.
    pub fn placeholder(rank: u32) -> Self {
        Self {
            rank,
            keyword: format!("Data unavailable (sample keyword {})", rank),
            category: FALLBACK_CATEGORY.to_string(),
            change: RankChange::Same,
            volume_estimate: "-".to_string(),
        }
    }
}

/// Row shape as the oracle sends it, before invariants are checked.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawKeywordRank {
    rank: i64,
    keyword: String,
    category: String,
    change: RankChange,
    volume_estimate: String,
}

impl RawKeywordRank {
    fn validate(self) -> Result<KeywordRank, ValidationError> {
        if self.rank < 1 || self.rank > i64::from(u32::MAX) {
            return Err(ValidationError::out_of_range(
                "rank",
                1,
                i64::from(u32::MAX),
                self.rank,
            ));
        }
        let keyword = self.keyword.trim();
        if keyword.is_empty() {
            return Err(ValidationError::empty_field("keyword"));
        }

        Ok(KeywordRank {
            rank: self.rank as u32,
            keyword: keyword.to_string(),
            category: self.category.trim().to_string(),
            change: self.change,
            volume_estimate: self.volume_estimate.trim().to_string(),
        })
    }
}

/// Validates an extracted payload into ranking rows sorted by rank.
///
/// The payload must be an array of row objects. Ranks must be positive
/// and unique; gaps are allowed.
pub fn parse_ranking(payload: Value) -> Result<Vec<KeywordRank>, ValidationError> {
    let Value::Array(items) = payload else {
        return Err(ValidationError::Schema(format!(
            "expected an array of keyword rows, got {}",
            json_kind(&payload)
        )));
    };

    let mut rows = Vec::with_capacity(items.len());
    let mut seen = HashSet::with_capacity(items.len());

    for (index, item) in items.into_iter().enumerate() {
        let raw: RawKeywordRank = serde_json::from_value(item).map_err(|e| {
            ValidationError::Schema(format!("keywords[{}]: {}", index, e))
        })?;
        let row = raw.validate().map_err(|e| e.at_index("keywords", index))?;

        if !seen.insert(row.rank) {
            return Err(ValidationError::duplicate("rank", row.rank));
        }
        rows.push(row);
    }

    rows.sort_by_key(|row| row.rank);
    Ok(rows)
}

/// Returns true when ranks run 1..=N without gaps. Expects sorted rows.
pub fn is_contiguous(rows: &[KeywordRank]) -> bool {
    rows.iter()
        .enumerate()
        .all(|(index, row)| row.rank as usize == index + 1)
}

/// Where a ranking result came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RankingOrigin {
    /// Parsed from a live oracle reply.
    Live,
    /// Placeholder rows substituted after a failure.
    Fallback { reason: String },
}

/// A ranking result set as handed to the presentation surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopKeywords {
    /// Rows ordered by rank ascending.
    pub keywords: Vec<KeywordRank>,
    /// Grounding citation URIs, in the order returned, duplicates kept.
    pub sources: Vec<String>,
    pub origin: RankingOrigin,
    pub fetched_at: Timestamp,
}

impl TopKeywords {
    /// Creates a live result.
    pub fn live(keywords: Vec<KeywordRank>, sources: Vec<String>) -> Self {
        Self {
            keywords,
            sources,
            origin: RankingOrigin::Live,
            fetched_at: Timestamp::now(),
        }
    }

    /// Creates the placeholder result: ranks 1..=10, no sources.
    pub fn fallback(reason: impl Into<String>) -> Self {
        Self {
            keywords: (1..=FALLBACK_ROW_COUNT).map(KeywordRank::placeholder).collect(),
            sources: Vec::new(),
            origin: RankingOrigin::Fallback {
                reason: reason.into(),
            },
            fetched_at: Timestamp::now(),
        }
    }

    /// Returns true if this result holds placeholder rows.
    pub fn is_fallback(&self) -> bool {
        matches!(self.origin, RankingOrigin::Fallback { .. })
    }
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(rank: i64, keyword: &str) -> Value {
        json!({
            "rank": rank,
            "keyword": keyword,
            "category": "News",
            "change": "up",
            "volumeEstimate": "50K+"
        })
    }

    #[test]
    fn parses_valid_rows() {
        let rows = parse_ranking(json!([row(1, "weather"), row(2, "stocks")])).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].rank, 1);
        assert_eq!(rows[0].keyword, "weather");
        assert_eq!(rows[0].change, RankChange::Up);
        assert_eq!(rows[0].volume_estimate, "50K+");
    }

    #[test]
    fn rows_are_sorted_by_rank() {
        let rows = parse_ranking(json!([row(3, "c"), row(1, "a"), row(2, "b")])).unwrap();
        let ranks: Vec<u32> = rows.iter().map(|r| r.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
    }

    #[test]
    fn gaps_are_allowed_but_detectable() {
        let rows = parse_ranking(json!([row(1, "a"), row(3, "c")])).unwrap();
        assert_eq!(rows.len(), 2);
        assert!(!is_contiguous(&rows));

        let rows = parse_ranking(json!([row(2, "b"), row(1, "a")])).unwrap();
        assert!(is_contiguous(&rows));
    }

    #[test]
    fn duplicate_ranks_are_rejected() {
        let err = parse_ranking(json!([row(1, "a"), row(1, "b")])).unwrap_err();
        assert_eq!(err, ValidationError::duplicate("rank", 1));
    }

    #[test]
    fn zero_rank_is_rejected() {
        let err = parse_ranking(json!([row(0, "a")])).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::OutOfRange { ref field, actual: 0, .. } if field == "keywords[0].rank"
        ));
    }

    #[test]
    fn blank_keyword_is_rejected() {
        let err = parse_ranking(json!([row(1, "   ")])).unwrap_err();
        assert_eq!(err, ValidationError::empty_field("keywords[0].keyword"));
    }

    #[test]
    fn unknown_change_is_rejected() {
        let mut bad = row(1, "a");
        bad["change"] = json!("sideways");
        let err = parse_ranking(json!([bad])).unwrap_err();
        assert!(matches!(err, ValidationError::Schema(_)));
    }

    #[test]
    fn wrong_field_type_is_rejected() {
        let mut bad = row(1, "a");
        bad["rank"] = json!("first");
        assert!(matches!(
            parse_ranking(json!([bad])),
            Err(ValidationError::Schema(_))
        ));
    }

    #[test]
    fn object_payload_is_rejected() {
        let err = parse_ranking(json!({"keywords": []})).unwrap_err();
        assert_eq!(
            err,
            ValidationError::Schema("expected an array of keyword rows, got an object".to_string())
        );
    }

    #[test]
    fn empty_array_is_an_empty_ranking() {
        assert!(parse_ranking(json!([])).unwrap().is_empty());
    }

    #[test]
    fn fallback_has_ten_placeholder_rows() {
        let result = TopKeywords::fallback("oracle down");

        assert!(result.is_fallback());
        assert!(result.sources.is_empty());
        assert_eq!(result.keywords.len(), 10);
        for (index, row) in result.keywords.iter().enumerate() {
            assert_eq!(row.rank as usize, index + 1);
            assert_eq!(row.change, RankChange::Same);
            assert_eq!(row.volume_estimate, "-");
            assert_eq!(row.category, FALLBACK_CATEGORY);
        }
    }

    #[test]
    fn keyword_rank_uses_camel_case_on_the_wire() {
        let json = serde_json::to_value(KeywordRank::placeholder(1)).unwrap();
        assert_eq!(json["volumeEstimate"], "-");
        assert_eq!(json["change"], "same");
    }

    #[test]
    fn origin_serializes_with_kind_tag() {
        let json = serde_json::to_value(RankingOrigin::Fallback {
            reason: "timeout".to_string(),
        })
        .unwrap();
        assert_eq!(json, json!({"kind": "fallback", "reason": "timeout"}));
        assert_eq!(
            serde_json::to_value(RankingOrigin::Live).unwrap(),
            json!({"kind": "live"})
        );
    }
}
