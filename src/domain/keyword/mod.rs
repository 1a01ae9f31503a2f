//! Keyword domain - ranking rows, keyword analysis and prompt building.

mod analysis;
mod prompt;
mod ranking;

pub use analysis::{
    parse_analysis, CompetitionLevel, KeywordAnalysis, RelatedKeyword, TrendPoint,
    EXPECTED_RELATED_KEYWORDS, EXPECTED_TREND_POINTS,
};
pub use prompt::PromptBuilder;
pub use ranking::{
    is_contiguous, parse_ranking, KeywordRank, RankChange, RankingOrigin, TopKeywords,
    FALLBACK_CATEGORY, FALLBACK_ROW_COUNT,
};
