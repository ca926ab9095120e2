//! Per-category historical growth statistics.

use serde::{Deserialize, Serialize};

/// Derived statistics for one category's historical series.
///
/// Only produced for categories with at least 2 distinct years;
/// `mean_growth` and `std_growth` are computed over the `n_years - 1`
/// year-over-year growth ratios (population standard deviation).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalStats {
    pub category: String,
    /// Ascending, unique.
    pub years: Vec<i32>,
    /// Aligned to `years`.
    pub populations: Vec<f64>,
    pub current_population: f64,
    pub current_year: i32,
    pub mean_growth: f64,
    pub std_growth: f64,
    pub n_years: usize,
}

impl HistoricalStats {
    /// Number of year-over-year growth observations behind the estimates.
    pub fn n_growth_observations(&self) -> usize {
        self.n_years.saturating_sub(1)
    }
}
