//! Search Oracle Port - Interface for the search-grounded generative model.
//!
//! This port abstracts the external AI service that answers keyword
//! questions in free text, enabling the keyword handlers to run against
//! any provider (or a mock in tests) without coupling to a specific API.
//!
//! # Design
//!
//! - One request, one reply; no streaming
//! - Replies carry free text plus the grounding citations the provider attached
//! - Error types for common transport failure modes (rate limits, auth, timeouts)

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::RequestId;

/// Port for oracle interactions.
///
/// Implementations connect to an external AI service and translate
/// between the provider-specific API and these types.
#[async_trait]
pub trait SearchOracle: Send + Sync {
    /// Sends a prompt and waits for the full reply.
    async fn generate(&self, request: OracleRequest) -> Result<OracleResponse, OracleError>;

    /// Get provider information (name, model, capabilities).
    fn provider_info(&self) -> ProviderInfo;
}

/// Request sent to the oracle.
#[derive(Debug, Clone, PartialEq)]
pub struct OracleRequest {
    /// Natural-language prompt.
    pub prompt: String,
    /// Sampling temperature (0.0 = deterministic).
    pub temperature: Option<f32>,
    /// Whether the provider should ground the answer with web search.
    pub search_grounding: bool,
    /// Maximum tokens to generate.
    pub max_output_tokens: Option<u32>,
    /// Correlation id for logs.
    pub request_id: RequestId,
}

impl OracleRequest {
    /// Creates a request with search grounding enabled.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            temperature: None,
            search_grounding: true,
            max_output_tokens: None,
            request_id: RequestId::new(),
        }
    }

    /// Sets the temperature.
    pub fn with_temperature(mut self, temp: f32) -> Self {
        self.temperature = Some(temp);
        self
    }

    /// Enables or disables search grounding.
    pub fn with_search_grounding(mut self, enabled: bool) -> Self {
        self.search_grounding = enabled;
        self
    }

    /// Sets the maximum tokens to generate.
    pub fn with_max_output_tokens(mut self, max: u32) -> Self {
        self.max_output_tokens = Some(max);
        self
    }
}

/// Reply from the oracle.
#[derive(Debug, Clone, PartialEq)]
pub struct OracleResponse {
    /// Generated text. `None` when the provider returned no text part.
    pub text: Option<String>,
    /// Grounding citation URIs in provider order. Not deduplicated.
    pub citations: Vec<String>,
    /// Model that produced the reply.
    pub model: String,
    /// Token usage.
    pub usage: TokenUsage,
    /// Why the model stopped generating.
    pub finish_reason: FinishReason,
}

impl OracleResponse {
    /// Returns the text if it contains anything besides whitespace.
    pub fn non_empty_text(&self) -> Option<&str> {
        self.text
            .as_deref()
            .filter(|text| !text.trim().is_empty())
    }
}

/// Token usage information.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Tokens in the prompt.
    pub prompt_tokens: u32,
    /// Tokens in the completion.
    pub completion_tokens: u32,
    /// Total tokens (prompt + completion).
    pub total_tokens: u32,
}

impl TokenUsage {
    /// Creates new token usage.
    pub fn new(prompt_tokens: u32, completion_tokens: u32) -> Self {
        Self {
            prompt_tokens,
            completion_tokens,
            total_tokens: prompt_tokens + completion_tokens,
        }
    }

    /// Creates zero usage.
    pub fn zero() -> Self {
        Self::default()
    }
}

/// Reason the model stopped generating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    /// Natural stop (end of response).
    Stop,
    /// Hit the output token limit.
    Length,
    /// Content was filtered for safety.
    ContentFilter,
    /// Any other provider-specific reason.
    Other,
}

/// Provider information and capabilities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderInfo {
    /// Provider name (e.g., "gemini").
    pub name: String,
    /// Model identifier (e.g., "gemini-2.5-flash").
    pub model: String,
    /// Whether web-search grounding is supported.
    pub supports_search_grounding: bool,
}

impl ProviderInfo {
    /// Creates new provider info.
    pub fn new(name: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
            supports_search_grounding: true,
        }
    }

    /// Sets search grounding support.
    pub fn with_search_grounding(mut self, supports: bool) -> Self {
        self.supports_search_grounding = supports;
        self
    }
}

/// Oracle transport errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OracleError {
    /// Rate limited by provider.
    #[error("rate limited: retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds until retry is allowed.
        retry_after_secs: u32,
    },

    /// Prompt or reply was blocked by the provider's safety filters.
    #[error("content filtered: {reason}")]
    ContentFiltered {
        /// Reason for filtering.
        reason: String,
    },

    /// Provider is unavailable.
    #[error("provider unavailable: {message}")]
    Unavailable {
        /// Error details.
        message: String,
    },

    /// API key or authentication failed.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Network error during request.
    #[error("network error: {0}")]
    Network(String),

    /// Failed to parse the provider's response envelope.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid request configuration.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u32,
    },
}

impl OracleError {
    /// Creates a rate limited error.
    pub fn rate_limited(retry_after_secs: u32) -> Self {
        Self::RateLimited { retry_after_secs }
    }

    /// Creates a content filtered error.
    pub fn content_filtered(reason: impl Into<String>) -> Self {
        Self::ContentFiltered {
            reason: reason.into(),
        }
    }

    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Returns true if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            OracleError::RateLimited { .. }
                | OracleError::Unavailable { .. }
                | OracleError::Network(_)
                | OracleError::Timeout { .. }
        )
    }
}
