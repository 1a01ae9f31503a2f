//! Listener, logging and CORS settings for the keyword API.

use axum::http::HeaderValue;
use serde::Deserialize;
use std::net::SocketAddr;

use super::error::ValidationError;

/// Origin of the Vite dev server, allowed when nothing is configured in development.
const DEV_DASHBOARD_ORIGIN: &str = "http://localhost:5173";

/// Deployment stage. Production switches logs to JSON and requires HTTPS upstream.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub environment: Environment,

    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Comma-separated origins of the dashboard front-end.
    pub dashboard_origins: Option<String>,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ValidationError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse()
            .map_err(|_| ValidationError::InvalidBindAddress(addr))
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// Structured JSON log lines are emitted only in production.
    pub fn json_logs(&self) -> bool {
        self.is_production()
    }

    /// Origins the CORS layer lets through.
    ///
    /// Each entry must be an absolute http(s) origin; a trailing slash is
    /// dropped since browsers never send one. With nothing configured,
    /// development allows the local dashboard dev server and every other
    /// stage allows no cross-origin calls.
    pub fn allowed_origins(&self) -> Result<Vec<HeaderValue>, ValidationError> {
        let Some(raw) = self.dashboard_origins.as_deref() else {
            return Ok(match self.environment {
                Environment::Development => vec![HeaderValue::from_static(DEV_DASHBOARD_ORIGIN)],
                _ => Vec::new(),
            });
        };

        raw.split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(|origin| {
                let origin = origin.trim_end_matches('/');
                if !origin.starts_with("http://") && !origin.starts_with("https://") {
                    return Err(ValidationError::InvalidOrigin(origin.to_string()));
                }
                HeaderValue::from_str(origin)
                    .map_err(|_| ValidationError::InvalidOrigin(origin.to_string()))
            })
            .collect()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        self.socket_addr()?;
        self.allowed_origins()?;
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            environment: Environment::default(),
            log_level: default_log_level(),
            dashboard_origins: None,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}
