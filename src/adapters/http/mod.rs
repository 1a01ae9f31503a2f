//! HTTP adapters - REST API implementations.

pub mod keyword;

pub use keyword::{keyword_routes, KeywordAppState};
