//! Data availability errors.

use std::path::PathBuf;

use super::error_code::{self, EngineErrorCode};

/// Errors raised when the aggregated series cannot answer a request.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("Category not found in aggregated series: {category}")]
    UnknownCategory { category: String },

    #[error("Insufficient history for {category}: {n_years} year(s), need at least 2")]
    InsufficientHistory { category: String, n_years: usize },

    #[error("Aggregated series is empty")]
    EmptySeries,

    #[error("IO error reading {path}: {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("CSV format error in {path}: {message}")]
    CsvError { path: PathBuf, message: String },
}

impl EngineErrorCode for DataError {
    fn error_code(&self) -> &'static str {
        error_code::DATA_ERROR
    }
}
