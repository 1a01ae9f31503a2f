//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Search oracle implementations (Gemini, mock)
//! - `http` - REST API exposed to the dashboard front-end

pub mod ai;
pub mod http;
