/*!
 * HTTP request handlers.
 *
 * Implements the REST endpoints over the analysis engine. Input problems
 * that the engine defines as recoverable (empty text, blank lines) return
 * well-formed empty results, not errors; only transport-level problems get
 * a `{ "detail": ... }` error body.
 */

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use super::server::AppContext;
use crate::analysis::types::{BatchAnalysis, LineAnalysis};

// ============================================================================
// Request/Response Types
// ============================================================================

/// Analysis context hint. Accepted for future prosody tuning; currently a
/// no-op in the core algorithm. Documented as reserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisContext {
    #[default]
    Lyrical,
    Conversational,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// Line of text to analyze
    pub text: String,

    /// Reserved context hint
    #[serde(default)]
    pub context: AnalysisContext,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeBatchRequest {
    /// Lines to analyze independently
    pub lines: Vec<String>,

    /// Reserved context hint
    #[serde(default)]
    pub context: AnalysisContext,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    /// "ready" or "error"
    pub status: String,

    /// Human-readable detail, e.g. the dictionary load failure
    pub message: String,

    /// Component readiness and cache counters
    pub components: StatusComponents,
}

#[derive(Debug, Serialize)]
pub struct StatusComponents {
    pub dictionary_loaded: bool,
    pub dictionary_entries: usize,
    pub cache_size: usize,
    pub cache_hits: usize,
    pub cache_misses: usize,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub module: String,
    pub version: String,
}

#[derive(Debug, Serialize)]
pub struct DictionaryStressResponse {
    /// Whether the word has a dictionary entry
    pub found: bool,

    /// Dictionary syllable split; empty on a miss
    pub syllables: Vec<String>,

    /// Dictionary stress digits (0/1/2); empty on a miss
    pub stress_pattern: Vec<u8>,

    /// Entry confidence; 0.0 on a miss
    pub confidence: f64,
}

/// Conventional error body for 4xx/5xx responses
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

/// Error responses carry a status code and a `detail` message
pub struct ApiError {
    status: StatusCode,
    detail: String,
}

impl ApiError {
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody { detail: self.detail })).into_response()
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /health - liveness check
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        module: "scansion".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /status - readiness and cache statistics
pub async fn status(State(ctx): State<AppContext>) -> Json<StatusResponse> {
    let status = ctx.batch.status();
    let (label, message) = match ctx.batch.dictionary_error() {
        None => ("ready", "analysis engine ready".to_string()),
        Some(reason) => ("error", reason.to_string()),
    };

    Json(StatusResponse {
        status: label.to_string(),
        message,
        components: StatusComponents {
            dictionary_loaded: status.dictionary_loaded,
            dictionary_entries: status.dictionary_entries,
            cache_size: status.cache_size,
            cache_hits: status.cache_hits,
            cache_misses: status.cache_misses,
        },
    })
}

/// POST /analyze - analyze a single line
pub async fn analyze(
    State(ctx): State<AppContext>,
    Json(request): Json<AnalyzeRequest>,
) -> Json<LineAnalysis> {
    Json(ctx.batch.analyzer().analyze_line(&request.text).await)
}

/// POST /analyze-batch - analyze many lines, preserving input order
pub async fn analyze_batch(
    State(ctx): State<AppContext>,
    Json(request): Json<AnalyzeBatchRequest>,
) -> Json<BatchAnalysis> {
    Json(ctx.batch.analyze_batch(&request.lines).await)
}

/// GET /dictionary/stress/:word - raw dictionary probe, no heuristic
/// fallback
pub async fn dictionary_stress(
    State(ctx): State<AppContext>,
    Path(word): Path<String>,
) -> Result<Json<DictionaryStressResponse>, ApiError> {
    let Some(dictionary) = ctx.batch.dictionary() else {
        return Err(ApiError::new(
            StatusCode::SERVICE_UNAVAILABLE,
            "pronunciation dictionary is not loaded",
        ));
    };

    let response = match dictionary.lookup(&word) {
        Some(entry) => DictionaryStressResponse {
            found: true,
            syllables: entry.syllables.clone(),
            stress_pattern: entry.stress.clone(),
            confidence: entry.confidence,
        },
        None => DictionaryStressResponse {
            found: false,
            syllables: Vec::new(),
            stress_pattern: Vec::new(),
            confidence: 0.0,
        },
    };
    Ok(Json(response))
}
