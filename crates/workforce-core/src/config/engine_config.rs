//! Engine configuration: simulation defaults and growth-estimation policy.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::errors::ConfigError;

/// Policy for a zero population in a historical year.
///
/// The growth ratio `(pop[i] - pop[i-1]) / pop[i-1]` is undefined when the
/// prior year is zero; the policy decides whether that is a data-quality
/// error or a defined degenerate value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroPopulationPolicy {
    /// Surface a ComputationError for the affected category.
    #[default]
    Reject,
    /// Treat the step as 0% growth.
    ZeroGrowth,
}

fn default_target_year() -> i32 {
    constants::DEFAULT_TARGET_YEAR
}

fn default_simulations() -> usize {
    constants::DEFAULT_SIMULATIONS
}

fn default_confidence_level() -> f64 {
    constants::DEFAULT_CONFIDENCE_LEVEL
}

fn default_batch_top_n() -> usize {
    constants::DEFAULT_BATCH_TOP_N
}

fn default_fallback_mean_growth() -> f64 {
    constants::FALLBACK_MEAN_GROWTH
}

fn default_fallback_std_growth() -> f64 {
    constants::FALLBACK_STD_GROWTH
}

/// Configuration for the projection engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Default projection target year when a request omits it.
    pub default_target_year: i32,
    /// Default number of Monte Carlo trajectories.
    pub default_simulations: usize,
    /// Default two-sided confidence level, strictly in (0, 1).
    pub default_confidence_level: f64,
    /// Category count substituted when a batch names no categories.
    pub batch_top_n: usize,
    /// Mean growth fallback with zero growth observations.
    pub fallback_mean_growth: f64,
    /// Dispersion fallback with fewer than 2 growth observations.
    pub fallback_std_growth: f64,
    /// Zero-population handling during growth estimation.
    pub zero_population_policy: ZeroPopulationPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_target_year: default_target_year(),
            default_simulations: default_simulations(),
            default_confidence_level: default_confidence_level(),
            batch_top_n: default_batch_top_n(),
            fallback_mean_growth: default_fallback_mean_growth(),
            fallback_std_growth: default_fallback_std_growth(),
            zero_population_policy: ZeroPopulationPolicy::default(),
        }
    }
}

impl EngineConfig {
    /// Parse a config from a TOML string and validate it.
    pub fn from_toml_str(raw: &str, origin: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw).map_err(|e| ConfigError::ParseError {
            path: origin.to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file from disk and validate it.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        Self::from_toml_str(&raw, &path.display().to_string())
    }

    /// Validate field ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.default_confidence_level > 0.0 && self.default_confidence_level < 1.0) {
            return Err(ConfigError::InvalidValue {
                field: "default_confidence_level".to_string(),
                message: format!(
                    "must be strictly between 0 and 1, got {}",
                    self.default_confidence_level
                ),
            });
        }
        if self.default_simulations == 0 {
            return Err(ConfigError::InvalidValue {
                field: "default_simulations".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.batch_top_n == 0 {
            return Err(ConfigError::InvalidValue {
                field: "batch_top_n".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if !self.fallback_std_growth.is_finite() || self.fallback_std_growth < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "fallback_std_growth".to_string(),
                message: format!("must be finite and non-negative, got {}", self.fallback_std_growth),
            });
        }
        if !self.fallback_mean_growth.is_finite() {
            return Err(ConfigError::InvalidValue {
                field: "fallback_mean_growth".to_string(),
                message: "must be finite".to_string(),
            });
        }
        Ok(())
    }
}
