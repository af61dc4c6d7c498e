//! Mood Detector API
//!
//! HTTP front end for mood classification. Loads the sentiment lexicon once
//! at startup, then serves `POST /api/mood` and `GET /api/health`.

#![warn(missing_docs)]

pub mod cli;
pub mod config;
pub mod handlers;
pub mod probe;
pub mod service;

use axum::http::HeaderValue;
use axum::Router;
use config::ServerConfig;
use handlers::{create_router, AppState};
use mood_lexicon::{load_analyzer, LexiconError};
use service::MoodService;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Server error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Sentiment lexicon failed to load
    #[error("Failed to load sentiment lexicon: {0}")]
    Lexicon(#[from] LexiconError),

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}

/// Install the global tracing subscriber (stderr)
///
/// `RUST_LOG` takes precedence over `default_level`.
pub fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

/// Load the sentiment source and build the application state
///
/// This is the readiness gate: it returns only once the lexicon is fully
/// loaded, and the listener is not bound before it returns.
pub fn build_state(config: &ServerConfig) -> Result<AppState, ServerError> {
    let analyzer = load_analyzer(config.lexicon_path.as_deref())?;
    let service = MoodService::new(Arc::new(analyzer));

    info!("Sentiment source '{}' ready", service.source_name());
    Ok(AppState { service })
}

/// CORS policy for the configured origins
///
/// Credentials are allowed, so methods and headers mirror the request
/// instead of using a wildcard.
pub fn cors_layer(config: &ServerConfig) -> Result<CorsLayer, ServerError> {
    let origins: Vec<HeaderValue> = config.origin_header_values()?;

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request()))
}

/// Routes plus CORS
pub fn build_app(state: AppState, config: &ServerConfig) -> Result<Router, ServerError> {
    Ok(create_router(state).layer(cors_layer(config)?))
}

/// Start the mood HTTP server
///
/// Validates configuration, loads the lexicon, binds, and serves until
/// Ctrl+C.
pub async fn start_server(config: ServerConfig) -> Result<(), ServerError> {
    config.validate()?;

    info!("Starting Mood Detector API");
    info!("Bind address: {}", config.bind_addr());
    info!("Allowed origins: {}", config.allowed_origins.join(", "));

    let state = build_state(&config)?;
    let app = build_app(state, &config)?;

    // Bind and serve
    let listener = TcpListener::bind(&config.bind_addr()).await?;
    info!("Mood Detector API listening on {}", config.bind_addr());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::Server(e.to_string()))?;

    info!("Mood Detector API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
