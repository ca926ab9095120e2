//! Batch outcome types: an explicit accounting of successes and skips.

use serde::{Deserialize, Serialize};

use workforce_core::types::PredictionSummary;

/// A category that could not be predicted, with the reason.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedCategory {
    pub job_type: String,
    /// Structured error code (e.g. "DATA_ERROR").
    pub error_code: String,
    pub reason: String,
}

/// Echo of the shared batch parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchParameters {
    pub target_year: i32,
    pub n_simulations: usize,
    pub confidence_level: f64,
    pub total_predictions: usize,
}

/// Result of a batch run: successes in input order plus every skipped
/// category with its reason. A single bad category never aborts the batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchOutcome {
    pub results: Vec<PredictionSummary>,
    pub skipped: Vec<SkippedCategory>,
    pub parameters: BatchParameters,
}
