//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid bind address: {0}")]
    InvalidBindAddress(String),

    #[error("Invalid dashboard origin: {0}")]
    InvalidOrigin(String),

    #[error("Invalid oracle request timeout")]
    InvalidTimeout,

    #[error("Oracle base URL must start with http:// or https://")]
    InvalidBaseUrl,

    #[error("Oracle base URL must use HTTPS in production")]
    BaseUrlMustBeHttps,

    #[error("Ranking size must be between 1 and 100")]
    InvalidTopN,

    #[error("Temperature '{0}' must be between 0.0 and 2.0")]
    InvalidTemperature(&'static str),
}
