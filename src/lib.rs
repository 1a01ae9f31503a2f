//! Keyword Pulse - search keyword ranking and keyword analysis service
//!
//! This crate asks a search-grounded generative model for a Top-N keyword
//! ranking and for single keyword analyses, extracts the JSON payload
//! embedded in its free-text replies and validates it into typed records.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
