//! Shared constants for the Workforce projection engine.

/// Engine version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Lower clip bound for sampled year-over-year growth rates.
/// A single year's population cannot shrink below 50% in the model.
pub const GROWTH_CLIP_MIN: f64 = -0.5;

/// Upper clip bound for sampled year-over-year growth rates.
/// A single year's population cannot more than double in the model.
pub const GROWTH_CLIP_MAX: f64 = 1.0;

/// Default projection target year.
pub const DEFAULT_TARGET_YEAR: i32 = 2030;

/// Default number of Monte Carlo trajectories.
pub const DEFAULT_SIMULATIONS: usize = 5_000;

/// Default two-sided confidence level for prediction intervals.
pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 0.95;

/// Default category count when a batch request names no categories.
pub const DEFAULT_BATCH_TOP_N: usize = 10;

/// Mean growth fallback when a category has zero growth observations.
pub const FALLBACK_MEAN_GROWTH: f64 = 0.03;

/// Dispersion fallback when a category has fewer than 2 growth
/// observations, so short histories never degenerate to zero variance.
pub const FALLBACK_STD_GROWTH: f64 = 0.05;
