//! EngineErrorCode trait for structured reporting at the host boundary.

/// Trait for converting engine errors to structured error codes.
/// Every error enum implements this so the host application can report
/// failures by code rather than by message text.
pub trait EngineErrorCode {
    /// Returns the error code string (e.g., "DATA_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted boundary string: `[ERROR_CODE] message`.
    fn boundary_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants for the host boundary.
pub const DATA_ERROR: &str = "DATA_ERROR";
pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
pub const COMPUTATION_ERROR: &str = "COMPUTATION_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
