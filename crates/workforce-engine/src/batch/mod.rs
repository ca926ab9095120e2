//! Batch orchestration across categories.

pub mod orchestrator;
pub mod types;

pub use orchestrator::run;
pub use types::{BatchOutcome, BatchParameters, SkippedCategory};
