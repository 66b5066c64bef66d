//! HTTP API handlers.

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use crate::config::Config;
use crate::engine::state::{EngineMetrics, EngineStatus, EvolutionEngine, OptimizationResult};
use crate::engine::suggestions::{suggestion_catalog, Suggestion};
use crate::engine::AnalysisReport;
use crate::error::ApiError;
use crate::utils::now_rfc3339;

/// Every route the service answers, for the 404 body.
pub const AVAILABLE_ENDPOINTS: [&str; 7] = [
    "/",
    "/health",
    "/status",
    "/analyze",
    "/optimize",
    "/suggestions",
    "/metrics",
];

/// Application state shared with handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Shared engine state.
    pub engine: Arc<EvolutionEngine>,
    /// Simulated work delay for /analyze.
    pub analyze_delay: Duration,
    /// Simulated work delay for /optimize.
    pub optimize_delay: Duration,
}

impl AppState {
    /// Create app state from configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            engine: Arc::new(EvolutionEngine::new()),
            analyze_delay: Duration::from_millis(config.analyze_delay_ms),
            optimize_delay: Duration::from_millis(config.optimize_delay_ms),
        }
    }
}

/// Service descriptor returned from the root endpoint.
#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    /// Service name.
    pub name: &'static str,
    /// Crate version.
    pub version: &'static str,
    /// What this service does.
    pub description: &'static str,
    /// Service status.
    pub status: &'static str,
    /// Index of the operational endpoints.
    pub endpoints: EndpointIndex,
}

/// The five operational endpoints.
#[derive(Debug, Serialize)]
pub struct EndpointIndex {
    pub health: &'static str,
    pub status: &'static str,
    pub analyze: &'static str,
    pub optimize: &'static str,
    pub suggestions: &'static str,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status: "healthy".
    pub status: &'static str,
    /// When the check ran.
    pub timestamp: String,
    /// Whether the engine is running.
    pub engine_status: bool,
    /// Formatted engine uptime.
    pub uptime: String,
}

/// Optimization request body. Absent fields fall back to defaults.
#[derive(Debug, Deserialize)]
pub struct OptimizeRequest {
    /// The path to optimize.
    #[serde(default = "default_path_id")]
    pub path_id: String,
}

fn default_path_id() -> String {
    "unknown".to_string()
}

impl Default for OptimizeRequest {
    fn default() -> Self {
        Self {
            path_id: default_path_id(),
        }
    }
}

/// Suggestion catalog response.
#[derive(Debug, Serialize)]
pub struct SuggestionsResponse {
    /// When the catalog was read.
    pub timestamp: String,
    /// The fixed suggestion records.
    pub suggestions: &'static [Suggestion],
    /// Number of suggestions.
    pub total_count: usize,
}

/// Metrics endpoint response.
#[derive(Debug, Serialize)]
pub struct MetricsResponse {
    /// When the snapshot was taken.
    pub timestamp: String,
    /// The engine's cumulative counters.
    pub engine_metrics: EngineMetrics,
    /// Full status report.
    pub status: EngineStatus,
    /// Fixed performance figures.
    pub performance: PerformanceSnapshot,
}

/// Fixed performance figures reported on /metrics.
#[derive(Debug, Serialize)]
pub struct PerformanceSnapshot {
    pub avg_analysis_time: &'static str,
    pub avg_optimization_time: &'static str,
    pub success_rate: f64,
}

impl PerformanceSnapshot {
    fn current() -> Self {
        Self {
            avg_analysis_time: "2.3 seconds",
            avg_optimization_time: "45 seconds",
            success_rate: 94.2,
        }
    }
}

/// Body of every 404 response.
#[derive(Debug, Serialize)]
pub struct NotFoundResponse {
    pub error: &'static str,
    pub message: &'static str,
    pub available_endpoints: [&'static str; 7],
}

/// Root handler - service descriptor and endpoint index.
pub async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        name: "AI-Seed Evolution Engine",
        version: env!("CARGO_PKG_VERSION"),
        description: "AI-powered path optimization and evolution system",
        status: "running",
        endpoints: EndpointIndex {
            health: "/health",
            status: "/status",
            analyze: "/analyze",
            optimize: "/optimize",
            suggestions: "/suggestions",
        },
    })
}

/// Health check handler - always returns 200.
pub async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    Ok(Json(HealthResponse {
        status: "healthy",
        timestamp: now_rfc3339()?,
        engine_status: state.engine.is_running(),
        uptime: state.engine.uptime_formatted(),
    }))
}

/// Status handler - full engine status report.
pub async fn status(State(state): State<AppState>) -> Result<Json<EngineStatus>, ApiError> {
    Ok(Json(state.engine.status().await?))
}

/// Analysis handler - simulated work, then a fixed report.
///
/// The body is advisory only: anything that is not valid JSON (including an
/// empty body) is treated as an empty object.
pub async fn analyze(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<AnalysisReport>, ApiError> {
    let request: Value =
        serde_json::from_slice(&body).unwrap_or_else(|_| Value::Object(serde_json::Map::new()));
    info!("Starting path analysis with request: {request}");

    let started = Instant::now();
    tokio::time::sleep(state.analyze_delay).await;

    let report = state.engine.analyze_paths()?;

    crate::metrics::inc_analyses_run();
    crate::metrics::record_request_latency(started, "/analyze");
    Ok(Json(report))
}

/// Optimization handler - simulated work, then mutates engine counters.
pub async fn optimize(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<OptimizationResult>, ApiError> {
    let request: OptimizeRequest = serde_json::from_slice(&body).unwrap_or_default();
    info!("Starting optimization for path: {}", request.path_id);

    let started = Instant::now();
    tokio::time::sleep(state.optimize_delay).await;

    let result = state.engine.apply_optimization(&request.path_id).await?;

    crate::metrics::inc_optimizations_applied();
    crate::metrics::record_request_latency(started, "/optimize");
    Ok(Json(result))
}

/// Suggestions handler - the fixed catalog with a count.
pub async fn suggestions() -> Result<Json<SuggestionsResponse>, ApiError> {
    let catalog = suggestion_catalog();

    crate::metrics::inc_suggestions_served();
    Ok(Json(SuggestionsResponse {
        timestamp: now_rfc3339()?,
        suggestions: catalog,
        total_count: catalog.len(),
    }))
}

/// Metrics handler - engine counters plus a full status report.
pub async fn metrics(State(state): State<AppState>) -> Result<Json<MetricsResponse>, ApiError> {
    Ok(Json(MetricsResponse {
        timestamp: now_rfc3339()?,
        engine_metrics: state.engine.metrics_snapshot().await,
        status: state.engine.status().await?,
        performance: PerformanceSnapshot::current(),
    }))
}

/// Fallback handler for unmatched routes.
pub async fn not_found(uri: Uri) -> (StatusCode, Json<NotFoundResponse>) {
    warn!("Unknown route requested: {uri}");

    (
        StatusCode::NOT_FOUND,
        Json(NotFoundResponse {
            error: "Endpoint not found",
            message: "The requested endpoint does not exist",
            available_endpoints: AVAILABLE_ENDPOINTS,
        }),
    )
}
