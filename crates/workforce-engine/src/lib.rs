//! Workforce projection engine.
//!
//! Pipeline: raw records → aggregation → per-category growth statistics →
//! Monte Carlo trajectory ensemble → prediction summary, with a batch
//! orchestrator across categories and a version-stamped stats cache.

pub mod aggregation;
pub mod batch;
pub mod cache;
pub mod predictor;
pub mod simulation;
pub mod stats;

pub use aggregation::{aggregate_raw, load_csv};
pub use batch::{BatchOutcome, BatchParameters, SkippedCategory};
pub use cache::StatsCache;
pub use predictor::Predictor;
pub use simulation::{MonteCarloProjector, SimulationEnsemble};
