//! Prediction request/response contract shared with the host application.

use serde::{Deserialize, Serialize};

use crate::constants;

fn default_target_year() -> i32 {
    constants::DEFAULT_TARGET_YEAR
}

fn default_simulations() -> usize {
    constants::DEFAULT_SIMULATIONS
}

fn default_confidence_level() -> f64 {
    constants::DEFAULT_CONFIDENCE_LEVEL
}

/// A single-category prediction request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub job_type: String,
    #[serde(default = "default_target_year")]
    pub target_year: i32,
    #[serde(default = "default_simulations")]
    pub n_simulations: usize,
    #[serde(default = "default_confidence_level")]
    pub confidence_level: f64,
}

impl PredictionRequest {
    /// Request for one category with default parameters.
    pub fn new(job_type: impl Into<String>) -> Self {
        Self {
            job_type: job_type.into(),
            target_year: default_target_year(),
            n_simulations: default_simulations(),
            confidence_level: default_confidence_level(),
        }
    }
}

/// A multi-category prediction request. An empty `job_types` list asks the
/// engine to substitute the top-N categories of the latest year.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchRequest {
    #[serde(default)]
    pub job_types: Vec<String>,
    #[serde(default = "default_target_year")]
    pub target_year: i32,
    #[serde(default = "default_simulations")]
    pub n_simulations: usize,
    #[serde(default = "default_confidence_level")]
    pub confidence_level: f64,
}

impl BatchRequest {
    pub fn new(job_types: Vec<String>) -> Self {
        Self {
            job_types,
            target_year: default_target_year(),
            n_simulations: default_simulations(),
            confidence_level: default_confidence_level(),
        }
    }
}

/// Point and interval statistics for one category's projection.
/// Owned by the caller that requested it; never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionSummary {
    pub job_type: String,
    pub current_year: i32,
    pub current_population: f64,
    pub target_year: i32,
    pub n_simulations: usize,
    pub mean_prediction: f64,
    pub median_prediction: f64,
    /// Population standard deviation of the terminal values.
    pub std_prediction: f64,
    pub ci_lower: f64,
    pub ci_upper: f64,
    pub min_prediction: f64,
    pub max_prediction: f64,
    /// Compound annual growth rate over the horizon, in percent.
    pub cagr: f64,
}

impl PredictionSummary {
    /// Well-formed output has only finite numbers and an ordered interval
    /// bracketing the median.
    pub fn is_well_formed(&self) -> bool {
        let finite = [
            self.current_population,
            self.mean_prediction,
            self.median_prediction,
            self.std_prediction,
            self.ci_lower,
            self.ci_upper,
            self.min_prediction,
            self.max_prediction,
            self.cagr,
        ]
        .iter()
        .all(|v| v.is_finite());

        finite && self.ci_lower <= self.median_prediction && self.median_prediction <= self.ci_upper
    }
}

/// Total population for one year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyTotal {
    #[serde(rename = "tahun")]
    pub year: i32,
    #[serde(rename = "jumlah_penduduk")]
    pub population: f64,
}

/// A category and its population, used for top-N listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCount {
    #[serde(rename = "jenis_pekerjaan")]
    pub category: String,
    #[serde(rename = "jumlah_penduduk")]
    pub population: f64,
}

/// Dataset summary for the host application's reporting surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub total_records: usize,
    pub years: Vec<i32>,
    pub job_types: Vec<String>,
    pub total_population: f64,
    pub earliest_year: Option<i32>,
    pub latest_year: Option<i32>,
    pub yearly_totals: Vec<YearlyTotal>,
    pub top_jobs: Vec<CategoryCount>,
}
