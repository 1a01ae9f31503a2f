//! Data transfer objects for the keyword API.

use serde::{Deserialize, Serialize};

use crate::application::AnalysisOutcome;
use crate::domain::keyword::KeywordAnalysis;

/// Body of `POST /api/analysis`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnalyzeKeywordRequest {
    pub keyword: String,
}

/// Result of a tracked analysis submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SubmissionResponse {
    Current { analysis: KeywordAnalysis },
    Superseded { generation: u64, latest: u64 },
}

impl From<AnalysisOutcome> for SubmissionResponse {
    fn from(outcome: AnalysisOutcome) -> Self {
        match outcome {
            AnalysisOutcome::Current(analysis) => SubmissionResponse::Current { analysis },
            AnalysisOutcome::Superseded { generation, latest } => {
                SubmissionResponse::Superseded { generation, latest }
            }
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: message.into(),
            details: None,
        }
    }

    /// Upstream oracle failure, tagged with the service error code.
    pub fn bad_gateway(code: &str, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
        }
    }
}
