//! Numeric computation errors.

use super::error_code::{self, EngineErrorCode};

/// Errors raised by division-by-zero guards in growth and CAGR math.
#[derive(Debug, thiserror::Error)]
pub enum ComputationError {
    #[error("Zero population for {category} in {year}: growth rate undefined")]
    ZeroBasePopulation { category: String, year: i32 },

    #[error("Zero current population for {category}: CAGR undefined")]
    ZeroCurrentPopulation { category: String },
}

impl EngineErrorCode for ComputationError {
    fn error_code(&self) -> &'static str {
        error_code::COMPUTATION_ERROR
    }
}
