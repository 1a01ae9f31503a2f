use std::sync::Arc;

use axum::http::{header, Method};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use keyword_pulse::adapters::ai::{GeminiConfig, GeminiProvider};
use keyword_pulse::adapters::http::{keyword_routes, KeywordAppState};
use keyword_pulse::application::{AnalyzeKeywordHandler, FetchTopKeywordsHandler};
use keyword_pulse::config::{AppConfig, ValidationError};
use keyword_pulse::ports::SearchOracle;
use keyword_pulse::telemetry;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration
    let config = AppConfig::load()?;
    config.validate()?;

    // 2. Initialize logging
    telemetry::init_telemetry(&config.server.log_level, config.server.json_logs());
    info!(environment = ?config.server.environment, "Starting keyword-pulse");

    // 3. Build the oracle client
    let api_key = config
        .oracle
        .api_key
        .clone()
        .ok_or(ValidationError::MissingRequired("KEYWORD_PULSE__ORACLE__API_KEY"))?;
    let gemini = GeminiConfig::from_secret(api_key)
        .with_model(config.oracle.model.clone())
        .with_base_url(config.oracle.base_url.clone())
        .with_timeout(config.oracle.timeout())
        .with_max_retries(config.oracle.max_retries);
    let oracle: Arc<dyn SearchOracle> = Arc::new(GeminiProvider::new(gemini)?);
    info!(model = %config.oracle.model, "Search oracle initialized");

    // 4. Wire handlers
    let query_config = config.dashboard.query_config();
    let state = KeywordAppState::new(
        FetchTopKeywordsHandler::new(
            oracle.clone(),
            config.dashboard.prompt_builder(),
            query_config.clone(),
        ),
        AnalyzeKeywordHandler::new(oracle, config.dashboard.prompt_builder(), query_config),
    );

    let cors = CorsLayer::new()
        .allow_origin(config.server.allowed_origins()?)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    let app = keyword_routes(state).layer(cors);

    // 5. Serve
    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "Listening");
    axum::serve(listener, app).await?;

    Ok(())
}
