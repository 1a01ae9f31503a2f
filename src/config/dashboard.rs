//! Keyword query configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::application::KeywordQueryConfig;
use crate::domain::keyword::PromptBuilder;

/// Settings for the ranking and analysis queries
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    /// Number of ranking rows to request
    #[serde(default = "default_top_n")]
    pub top_n: u32,

    /// Search market named in the prompts
    #[serde(default = "default_market")]
    pub market: String,

    /// Sampling temperature for the ranking query
    #[serde(default = "default_ranking_temperature")]
    pub ranking_temperature: f32,

    /// Sampling temperature for the analysis query
    #[serde(default = "default_analysis_temperature")]
    pub analysis_temperature: f32,
}

impl DashboardConfig {
    /// Handler settings derived from this configuration
    pub fn query_config(&self) -> KeywordQueryConfig {
        KeywordQueryConfig {
            top_n: self.top_n,
            ranking_temperature: self.ranking_temperature,
            analysis_temperature: self.analysis_temperature,
        }
    }

    /// Prompt builder for the configured market
    pub fn prompt_builder(&self) -> PromptBuilder {
        PromptBuilder::new(self.market.clone())
    }

    /// Validate query settings
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(1..=100).contains(&self.top_n) {
            return Err(ValidationError::InvalidTopN);
        }
        if self.market.trim().is_empty() {
            return Err(ValidationError::MissingRequired("KEYWORD_PULSE__DASHBOARD__MARKET"));
        }
        if !(0.0..=2.0).contains(&self.ranking_temperature) {
            return Err(ValidationError::InvalidTemperature("ranking_temperature"));
        }
        if !(0.0..=2.0).contains(&self.analysis_temperature) {
            return Err(ValidationError::InvalidTemperature("analysis_temperature"));
        }
        Ok(())
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
            market: default_market(),
            ranking_temperature: default_ranking_temperature(),
            analysis_temperature: default_analysis_temperature(),
        }
    }
}

fn default_top_n() -> u32 {
    100
}

fn default_market() -> String {
    "Naver (South Korea)".to_string()
}

fn default_ranking_temperature() -> f32 {
    0.5
}

fn default_analysis_temperature() -> f32 {
    0.7
}
