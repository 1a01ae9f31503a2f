//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `SearchOracle` - The search-grounded generative model that answers keyword queries

mod search_oracle;

pub use search_oracle::{
    FinishReason, OracleError, OracleRequest, OracleResponse, ProviderInfo, SearchOracle,
    TokenUsage,
};
