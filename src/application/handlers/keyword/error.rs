//! Errors surfaced by the keyword handlers.

use serde_json::Value;
use thiserror::Error;

use crate::domain::extraction::{extract_structured_payload, ExtractionError};
use crate::domain::foundation::ValidationError;
use crate::ports::{FinishReason, OracleError, OracleResponse};

/// Why a keyword query could not produce a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeywordServiceError {
    /// The oracle replied without any text.
    #[error("oracle returned an empty response")]
    EmptyResponse,

    /// The reply held no recognisable payload, or it failed to parse.
    #[error(transparent)]
    MalformedResponse(#[from] ExtractionError),

    /// The payload parsed but does not satisfy the record contract.
    #[error("payload failed validation: {0}")]
    InvalidPayload(#[from] ValidationError),

    /// The outbound call itself failed.
    #[error("oracle call failed: {0}")]
    Transport(#[from] OracleError),
}

impl KeywordServiceError {
    /// Stable machine-readable code for API responses.
    pub fn code(&self) -> &'static str {
        match self {
            KeywordServiceError::EmptyResponse => "EMPTY_RESPONSE",
            KeywordServiceError::MalformedResponse(_) => "MALFORMED_RESPONSE",
            KeywordServiceError::InvalidPayload(_) => "INVALID_PAYLOAD",
            KeywordServiceError::Transport(_) => "TRANSPORT_FAILURE",
        }
    }
}

/// Pulls the structured payload out of an oracle reply.
///
/// A reply cut off at the output token limit usually ends mid-payload, so
/// an extraction failure on such a reply names the truncation.
pub(super) fn payload_of(response: &OracleResponse) -> Result<Value, KeywordServiceError> {
    let truncated = response.finish_reason == FinishReason::Length;
    if truncated {
        tracing::warn!(
            model = %response.model,
            completion_tokens = response.usage.completion_tokens,
            "Oracle reply stopped at the output token limit"
        );
    }

    let text = response
        .non_empty_text()
        .ok_or(KeywordServiceError::EmptyResponse)?;
    extract_structured_payload(text).map_err(|err| match err {
        ExtractionError::MalformedResponse { reason } if truncated => ExtractionError::malformed(
            format!("reply truncated at the output token limit: {}", reason),
        )
        .into(),
        other => other.into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::TokenUsage;
    use serde_json::json;

    fn response(text: Option<&str>) -> OracleResponse {
        OracleResponse {
            text: text.map(str::to_string),
            citations: vec![],
            model: "mock".to_string(),
            usage: TokenUsage::zero(),
            finish_reason: FinishReason::Stop,
        }
    }

    #[test]
    fn payload_of_extracts_json() {
        let value = payload_of(&response(Some("```json\n{\"a\": 1}\n```"))).unwrap();
        assert_eq!(value, json!({"a": 1}));
    }

    #[test]
    fn payload_of_reports_empty_text() {
        assert_eq!(
            payload_of(&response(None)).unwrap_err(),
            KeywordServiceError::EmptyResponse
        );
        assert_eq!(
            payload_of(&response(Some("   "))).unwrap_err(),
            KeywordServiceError::EmptyResponse
        );
    }

    #[test]
    fn payload_of_reports_malformed_text() {
        let err = payload_of(&response(Some("sorry, no data"))).unwrap_err();
        assert!(matches!(err, KeywordServiceError::MalformedResponse(_)));
        assert_eq!(err.code(), "MALFORMED_RESPONSE");
    }

    #[test]
    fn truncated_reply_names_the_token_limit() {
        let mut truncated = response(Some("```json\n[{\"rank\": 1, \"keyword\": \"a\""));
        truncated.finish_reason = FinishReason::Length;

        match payload_of(&truncated).unwrap_err() {
            KeywordServiceError::MalformedResponse(ExtractionError::MalformedResponse { reason }) => {
                assert!(reason.starts_with("reply truncated at the output token limit"));
            }
            other => panic!("Expected malformed response, got {:?}", other),
        }
    }

    #[test]
    fn truncated_reply_with_complete_payload_still_parses() {
        let mut truncated = response(Some("[{\"rank\": 1}] and then the model ran ou"));
        truncated.finish_reason = FinishReason::Length;
        assert_eq!(payload_of(&truncated).unwrap(), json!([{"rank": 1}]));
    }

    #[test]
    fn error_codes_are_stable() {
        assert_eq!(KeywordServiceError::EmptyResponse.code(), "EMPTY_RESPONSE");
        assert_eq!(
            KeywordServiceError::from(OracleError::AuthenticationFailed).code(),
            "TRANSPORT_FAILURE"
        );
        assert_eq!(
            KeywordServiceError::from(ValidationError::empty_field("keyword")).code(),
            "INVALID_PAYLOAD"
        );
    }
}
