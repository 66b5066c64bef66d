//! Operational metrics for the service.
//!
//! These feed the `metrics` facade and are distinct from the engine's own
//! counters exposed on the `/metrics` JSON endpoint.

use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use tracing::debug;

/// HTTP request latency metric name.
pub const METRIC_HTTP_REQUEST_LATENCY: &str = "http_request_latency_ms";
/// Analysis passes counter metric name.
pub const METRIC_ANALYSES_RUN: &str = "path_analyses_total";
/// Applied optimizations counter metric name.
pub const METRIC_OPTIMIZATIONS_APPLIED: &str = "optimizations_applied_total";
/// Suggestion catalog reads counter metric name.
pub const METRIC_SUGGESTIONS_SERVED: &str = "suggestions_served_total";

/// Initialize all metric descriptions.
/// Call this once at startup to register metrics with descriptions.
pub fn init_metrics() {
    describe_histogram!(
        METRIC_HTTP_REQUEST_LATENCY,
        "HTTP request latency in milliseconds"
    );

    describe_counter!(METRIC_ANALYSES_RUN, "Total number of analysis passes run");
    describe_counter!(
        METRIC_OPTIMIZATIONS_APPLIED,
        "Total number of optimizations applied"
    );
    describe_counter!(
        METRIC_SUGGESTIONS_SERVED,
        "Total number of suggestion catalog reads"
    );

    debug!("Metrics initialized");
}

/// Record HTTP request latency for an endpoint.
pub fn record_request_latency(start: Instant, endpoint: &str) {
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
    histogram!(METRIC_HTTP_REQUEST_LATENCY, "endpoint" => endpoint.to_string())
        .record(latency_ms);
}

/// Increment the analysis pass counter.
pub fn inc_analyses_run() {
    counter!(METRIC_ANALYSES_RUN).increment(1);
}

/// Increment the applied optimization counter.
pub fn inc_optimizations_applied() {
    counter!(METRIC_OPTIMIZATIONS_APPLIED).increment(1);
}

/// Increment the suggestion catalog read counter.
pub fn inc_suggestions_served() {
    counter!(METRIC_SUGGESTIONS_SERVED).increment(1);
}
