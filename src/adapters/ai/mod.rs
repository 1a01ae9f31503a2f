//! Search Oracle Adapters.
//!
//! Implementations of the SearchOracle port.
//!
//! ## Available Adapters
//!
//! - `MockSearchOracle` - Configurable mock for testing
//! - `GeminiProvider` - Google Gemini with Google Search grounding

mod gemini_provider;
mod mock_provider;

pub use gemini_provider::{GeminiConfig, GeminiProvider};
pub use mock_provider::{MockError, MockReply, MockSearchOracle};
