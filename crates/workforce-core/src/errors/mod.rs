//! Engine error taxonomy.
//!
//! One enum per failure domain (data, validation, computation, config),
//! each carrying a structured error code for the host application, plus a
//! top-level `EngineError` wrapper for fallible engine entry points.

pub mod computation_error;
pub mod config_error;
pub mod data_error;
pub mod error_code;
pub mod validation_error;

pub use computation_error::ComputationError;
pub use config_error::ConfigError;
pub use data_error::DataError;
pub use error_code::EngineErrorCode;
pub use validation_error::ValidationError;

/// Top-level engine error.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Data(#[from] DataError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Computation(#[from] ComputationError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl EngineErrorCode for EngineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Data(e) => e.error_code(),
            Self::Validation(e) => e.error_code(),
            Self::Computation(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}

/// Result alias used across the engine.
pub type EngineResult<T> = Result<T, EngineError>;
