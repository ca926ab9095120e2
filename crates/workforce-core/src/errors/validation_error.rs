//! Request validation errors.

use super::error_code::{self, EngineErrorCode};

/// Errors raised when a prediction request is malformed.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Target year {target_year} must be greater than current year {current_year}")]
    TargetYearNotAhead { target_year: i32, current_year: i32 },

    #[error("Job type is required")]
    MissingJobType,

    #[error("Confidence level must be strictly between 0 and 1, got {value}")]
    ConfidenceLevelOutOfRange { value: f64 },

    #[error("Simulation count must be at least 1")]
    InvalidSimulationCount,
}

impl EngineErrorCode for ValidationError {
    fn error_code(&self) -> &'static str {
        error_code::VALIDATION_ERROR
    }
}
