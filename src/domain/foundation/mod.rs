//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types
//! that form the vocabulary of the keyword domain.

mod errors;
mod ids;
mod score;
mod timestamp;

pub use errors::ValidationError;
pub use ids::RequestId;
pub use score::Score;
pub use timestamp::Timestamp;
