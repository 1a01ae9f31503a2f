//! Settings shared by the keyword handlers.

/// Tunables for the ranking and analysis queries.
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordQueryConfig {
    /// How many ranking rows to ask for.
    pub top_n: u32,
    /// Sampling temperature for the ranking query.
    pub ranking_temperature: f32,
    /// Sampling temperature for the analysis query.
    pub analysis_temperature: f32,
}

impl Default for KeywordQueryConfig {
    fn default() -> Self {
        Self {
            top_n: 100,
            ranking_temperature: 0.5,
            analysis_temperature: 0.7,
        }
    }
}
