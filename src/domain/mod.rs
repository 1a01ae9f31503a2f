//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `extraction` - Locating structured payloads in free-text oracle replies
//! - `keyword` - Ranking and analysis records, validation, prompt building

pub mod extraction;
pub mod foundation;
pub mod keyword;
