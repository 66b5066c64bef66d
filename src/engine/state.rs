//! Engine state and cumulative metrics.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tokio::sync::RwLock;
use tracing::info;

use super::analysis::{self, AnalysisReport};
use crate::utils::now_rfc3339;

/// Efficiency percentage points added by each applied optimization.
pub const EFFICIENCY_GAIN_PER_OPTIMIZATION: f64 = 12.5;

/// Reliability improvement reported for each applied optimization.
pub const RELIABILITY_IMPROVEMENT: f64 = 8.3;

/// Time reported as saved by each applied optimization.
pub const TIME_SAVED: &str = "45 seconds";

/// Cumulative engine metrics.
///
/// Counters only ever increase for the life of the process; nothing resets
/// or decrements them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineMetrics {
    /// Optimizations applied since the engine was seeded.
    pub total_optimizations: u64,
    /// Paths covered by analysis passes.
    pub paths_analyzed: u64,
    /// Improvement suggestions issued.
    pub suggestions_issued: u64,
    /// Accumulated efficiency gain in percentage points.
    pub efficiency_gained: f64,
}

/// Point-in-time engine status report.
#[derive(Debug, Clone, Serialize)]
pub struct EngineStatus {
    /// Whether the engine is running.
    pub running: bool,
    /// Current evolution cycle number.
    pub cycle: u32,
    /// Seconds elapsed since the engine started.
    pub uptime_seconds: f64,
    /// Uptime rendered for humans, minute granularity.
    pub uptime_formatted: String,
    /// Cumulative metrics snapshot.
    pub metrics: EngineMetrics,
    /// When this report was produced.
    pub last_activity: String,
}

/// Result of one applied optimization.
#[derive(Debug, Clone, Serialize)]
pub struct OptimizationResult {
    /// Identifier of the form `opt_<unix timestamp>`.
    pub optimization_id: String,
    /// The path that was optimized.
    pub path_id: String,
    /// Always "completed".
    pub status: &'static str,
    /// Fixed improvement figures.
    pub improvements: Improvements,
    /// When the optimization finished.
    pub timestamp: String,
}

/// Improvement figures attached to an optimization result.
#[derive(Debug, Clone, Serialize)]
pub struct Improvements {
    /// Efficiency gain in percentage points.
    pub efficiency_gain: f64,
    /// Human-readable time saved.
    pub time_saved: &'static str,
    /// Reliability improvement in percentage points.
    pub reliability_improvement: f64,
}

/// The process-wide evolution engine.
///
/// Constructed once at startup and shared through `AppState`. The run flag
/// and cycle number are fixed at construction; the metrics record is the
/// only mutable part and sits behind an async `RwLock`.
#[derive(Debug)]
pub struct EvolutionEngine {
    running: bool,
    cycle: u32,
    started: Instant,
    started_at: OffsetDateTime,
    metrics: RwLock<EngineMetrics>,
}

impl EvolutionEngine {
    /// Cycle number the engine reports.
    pub const INITIAL_CYCLE: u32 = 23;

    /// Create a new engine with its seed metrics.
    pub fn new() -> Self {
        Self {
            running: true,
            cycle: Self::INITIAL_CYCLE,
            started: Instant::now(),
            started_at: OffsetDateTime::now_utc(),
            metrics: RwLock::new(EngineMetrics {
                total_optimizations: 47,
                paths_analyzed: 156,
                suggestions_issued: 23,
                efficiency_gained: 15.8,
            }),
        }
    }

    /// Whether the engine is running. Always true; nothing stops it.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Current evolution cycle number.
    pub fn cycle(&self) -> u32 {
        self.cycle
    }

    /// When the engine was constructed.
    pub fn started_at(&self) -> OffsetDateTime {
        self.started_at
    }

    /// Seconds elapsed since construction, from the monotonic clock.
    pub fn uptime_seconds(&self) -> f64 {
        self.started.elapsed().as_secs_f64()
    }

    /// Uptime rendered for humans.
    pub fn uptime_formatted(&self) -> String {
        format_uptime(self.uptime_seconds())
    }

    /// Clone the current metrics record.
    pub async fn metrics_snapshot(&self) -> EngineMetrics {
        self.metrics.read().await.clone()
    }

    /// Produce a full status report.
    pub async fn status(&self) -> Result<EngineStatus, time::error::Format> {
        let uptime = self.uptime_seconds();

        Ok(EngineStatus {
            running: self.running,
            cycle: self.cycle,
            uptime_seconds: uptime,
            uptime_formatted: format_uptime(uptime),
            metrics: self.metrics.read().await.clone(),
            last_activity: now_rfc3339()?,
        })
    }

    /// Apply an optimization to the given path.
    ///
    /// Both counter updates happen under one write lock, so concurrent
    /// calls never interleave between the two increments.
    pub async fn apply_optimization(
        &self,
        path_id: &str,
    ) -> Result<OptimizationResult, time::error::Format> {
        let now = OffsetDateTime::now_utc();

        let result = OptimizationResult {
            optimization_id: format!("opt_{}", now.unix_timestamp()),
            path_id: path_id.to_string(),
            status: "completed",
            improvements: Improvements {
                efficiency_gain: EFFICIENCY_GAIN_PER_OPTIMIZATION,
                time_saved: TIME_SAVED,
                reliability_improvement: RELIABILITY_IMPROVEMENT,
            },
            timestamp: now.format(&time::format_description::well_known::Rfc3339)?,
        };

        {
            let mut metrics = self.metrics.write().await;
            metrics.total_optimizations += 1;
            metrics.efficiency_gained += EFFICIENCY_GAIN_PER_OPTIMIZATION;
        }

        info!("Optimization completed for path {path_id}");
        Ok(result)
    }

    /// Analyze paths for optimization opportunities. Pure; mutates nothing.
    pub fn analyze_paths(&self) -> Result<AnalysisReport, time::error::Format> {
        analysis::analyze_paths()
    }
}

impl Default for EvolutionEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Render an uptime in seconds as `"{d}d {h}h {m}m"`, `"{h}h {m}m"`, or
/// `"{m}m"` depending on magnitude. Components are floored; seconds are
/// never shown.
pub fn format_uptime(seconds: f64) -> String {
    let total = seconds as u64;
    let days = total / 86_400;
    let hours = (total % 86_400) / 3_600;
    let minutes = (total % 3_600) / 60;

    if days > 0 {
        format!("{days}d {hours}h {minutes}m")
    } else if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}
