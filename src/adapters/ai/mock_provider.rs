//! Mock Search Oracle for testing.
//!
//! Provides a configurable mock implementation of the SearchOracle port,
//! allowing tests to run without calling real AI APIs.
//!
//! # Features
//!
//! - Pre-configured replies with grounding citations
//! - Simulated delays for overlapping-request testing
//! - Error injection for resilience testing
//! - Call tracking for verification
//!
//! # Example
//!
//! ```ignore
//! let oracle = MockSearchOracle::new()
//!     .with_reply_and_citations("```json\n[]\n```", vec!["https://example.com"])
//!     .with_delay(Duration::from_millis(100));
//!
//! let response = oracle.generate(request).await?;
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{
    FinishReason, OracleError, OracleRequest, OracleResponse, ProviderInfo, SearchOracle,
    TokenUsage,
};

/// Mock oracle for testing.
///
/// Configurable to return specific replies, simulate delays, or inject errors.
#[derive(Debug, Clone)]
pub struct MockSearchOracle {
    /// Pre-configured replies (consumed in order).
    replies: Arc<Mutex<VecDeque<MockReply>>>,
    /// Provider info to return.
    info: ProviderInfo,
    /// Simulated latency per request.
    delay: Duration,
    /// Call history for verification.
    calls: Arc<Mutex<Vec<OracleRequest>>>,
}

/// A configured mock reply.
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Return a successful reply.
    Success {
        text: Option<String>,
        citations: Vec<String>,
        delay: Option<Duration>,
    },
    /// Return an error.
    Error(MockError),
}

/// Mock error types for testing error handling.
#[derive(Debug, Clone)]
pub enum MockError {
    /// Simulate rate limiting.
    RateLimited { retry_after_secs: u32 },
    /// Simulate content filtering.
    ContentFiltered { reason: String },
    /// Simulate provider unavailable.
    Unavailable { message: String },
    /// Simulate authentication failure.
    AuthenticationFailed,
    /// Simulate network error.
    Network { message: String },
    /// Simulate timeout.
    Timeout { timeout_secs: u32 },
}

impl From<MockError> for OracleError {
    fn from(err: MockError) -> Self {
        match err {
            MockError::RateLimited { retry_after_secs } => {
                OracleError::rate_limited(retry_after_secs)
            }
            MockError::ContentFiltered { reason } => OracleError::content_filtered(reason),
            MockError::Unavailable { message } => OracleError::unavailable(message),
            MockError::AuthenticationFailed => OracleError::AuthenticationFailed,
            MockError::Network { message } => OracleError::network(message),
            MockError::Timeout { timeout_secs } => OracleError::Timeout { timeout_secs },
        }
    }
}

impl Default for MockSearchOracle {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSearchOracle {
    /// Creates a new mock oracle with default settings.
    pub fn new() -> Self {
        Self {
            replies: Arc::new(Mutex::new(VecDeque::new())),
            info: ProviderInfo::new("mock", "mock-model-1"),
            delay: Duration::ZERO,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Adds a successful text reply without citations.
    pub fn with_reply(self, text: impl Into<String>) -> Self {
        self.with_reply_and_citations(text, Vec::<String>::new())
    }

    /// Adds a successful text reply with grounding citations.
    pub fn with_reply_and_citations<I, S>(self, text: impl Into<String>, citations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.push(MockReply::Success {
            text: Some(text.into()),
            citations: citations.into_iter().map(Into::into).collect(),
            delay: None,
        })
    }

    /// Adds a text reply that takes `delay` to arrive, overriding the global delay.
    pub fn with_delayed_reply(self, text: impl Into<String>, delay: Duration) -> Self {
        self.push(MockReply::Success {
            text: Some(text.into()),
            citations: Vec::new(),
            delay: Some(delay),
        })
    }

    /// Adds a reply that carries no text at all.
    pub fn with_empty_reply(self) -> Self {
        self.push(MockReply::Success {
            text: None,
            citations: Vec::new(),
            delay: None,
        })
    }

    /// Adds an error reply to the queue.
    pub fn with_error(self, error: MockError) -> Self {
        self.push(MockReply::Error(error))
    }

    /// Sets simulated latency per request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Sets the provider info.
    pub fn with_provider_info(mut self, info: ProviderInfo) -> Self {
        self.info = info;
        self
    }

    /// Returns the number of calls made to this oracle.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Returns all recorded calls.
    pub fn get_calls(&self) -> Vec<OracleRequest> {
        self.calls.lock().unwrap().clone()
    }

    /// Clears the call history.
    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    fn push(self, reply: MockReply) -> Self {
        self.replies.lock().unwrap().push_back(reply);
        self
    }

    /// Gets the next reply or a default.
    fn next_reply(&self) -> MockReply {
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| MockReply::Success {
                text: Some("Mock response".to_string()),
                citations: Vec::new(),
                delay: None,
            })
    }
}

#[async_trait]
impl SearchOracle for MockSearchOracle {
    async fn generate(&self, request: OracleRequest) -> Result<OracleResponse, OracleError> {
        self.calls.lock().unwrap().push(request);

        // Take the reply before sleeping so overlapping calls get replies in call order
        let reply = self.next_reply();

        match reply {
            MockReply::Success {
                text,
                citations,
                delay,
            } => {
                let delay = delay.unwrap_or(self.delay);
                if !delay.is_zero() {
                    sleep(delay).await;
                }
                Ok(OracleResponse {
                    text,
                    citations,
                    model: self.info.model.clone(),
                    usage: TokenUsage::new(10, 20),
                    finish_reason: FinishReason::Stop,
                })
            }
            MockReply::Error(err) => {
                if !self.delay.is_zero() {
                    sleep(self.delay).await;
                }
                Err(err.into())
            }
        }
    }

    fn provider_info(&self) -> ProviderInfo {
        self.info.clone()
    }
}
