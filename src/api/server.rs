/*!
 * HTTP server setup and routing.
 *
 * Sets up the axum server with routes for analysis, status, and the raw
 * dictionary probe.
 */

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use log::info;
use tower_http::cors::CorsLayer;

use crate::analysis::BatchAnalyzer;
use crate::app_config::Config;
use crate::errors::AppError;

/// Shared application context passed to all handlers
#[derive(Clone)]
pub struct AppContext {
    /// The batch service; single-line analysis goes through its analyzer
    pub batch: Arc<BatchAnalyzer>,
}

/// Build the API router over an application context
pub fn router(ctx: AppContext) -> Router {
    Router::new()
        // Health and readiness
        .route("/health", get(super::handlers::health))
        .route("/status", get(super::handlers::status))
        // Analysis
        .route("/analyze", post(super::handlers::analyze))
        .route("/analyze-batch", post(super::handlers::analyze_batch))
        // Raw dictionary probe
        .route("/dictionary/stress/:word", get(super::handlers::dictionary_stress))
        // Attach application context
        .with_state(ctx)
        // The editor front-end runs on another origin
        .layer(CorsLayer::permissive())
}

/// Run the HTTP API server until shutdown
pub async fn run(config: Config) -> Result<(), AppError> {
    let batch = Arc::new(BatchAnalyzer::from_config(&config));
    if let Some(reason) = batch.dictionary_error() {
        log::warn!("Serving degraded (heuristic-only): {}", reason);
    }

    let app = router(AppContext { batch });

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid server address: {}", e)))?;
    info!("Starting HTTP server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Http(format!("Failed to bind to {}: {}", addr, e)))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Http(format!("Server error: {}", e)))?;

    Ok(())
}
