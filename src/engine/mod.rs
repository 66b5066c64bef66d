//! Evolution engine core: shared state, path analysis, and the
//! improvement suggestion catalog.

pub mod analysis;
pub mod state;
pub mod suggestions;

pub use analysis::{AnalysisFinding, AnalysisReport};
pub use state::{EngineMetrics, EngineStatus, EvolutionEngine, OptimizationResult};
pub use suggestions::{suggestion_catalog, Suggestion};
