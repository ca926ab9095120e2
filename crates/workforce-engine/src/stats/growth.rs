//! Year-over-year growth estimation from one category's aggregated series.

use workforce_core::config::{EngineConfig, ZeroPopulationPolicy};
use workforce_core::errors::ComputationError;
use workforce_core::types::{AggregatedPoint, HistoricalStats};

/// Compute year-over-year growth ratios for a population series sorted by
/// year ascending. `years` is only used for error reporting.
///
/// A zero prior-year population follows the configured policy: `Reject`
/// surfaces a ComputationError, `ZeroGrowth` records a 0% step.
pub fn growth_rates(
    category: &str,
    years: &[i32],
    populations: &[f64],
    policy: ZeroPopulationPolicy,
) -> Result<Vec<f64>, ComputationError> {
    let mut rates = Vec::with_capacity(populations.len().saturating_sub(1));
    for (i, pair) in populations.windows(2).enumerate() {
        let (prev, next) = (pair[0], pair[1]);
        if prev == 0.0 {
            match policy {
                ZeroPopulationPolicy::Reject => {
                    return Err(ComputationError::ZeroBasePopulation {
                        category: category.to_string(),
                        year: years.get(i).copied().unwrap_or_default(),
                    });
                }
                ZeroPopulationPolicy::ZeroGrowth => {
                    rates.push(0.0);
                    continue;
                }
            }
        }
        rates.push((next - prev) / prev);
    }
    Ok(rates)
}

/// Estimate historical statistics for one category.
///
/// `points` is the category's slice of the aggregated series. Fewer than 2
/// distinct years is a normal "insufficient data" outcome (`Ok(None)`),
/// not an error. Idempotent for unchanged input.
pub fn historical_stats(
    category: &str,
    points: &[&AggregatedPoint],
    config: &EngineConfig,
) -> Result<Option<HistoricalStats>, ComputationError> {
    let mut sorted: Vec<&AggregatedPoint> = points.to_vec();
    sorted.sort_by_key(|p| p.year);
    sorted.dedup_by_key(|p| p.year);

    if sorted.len() < 2 {
        return Ok(None);
    }

    let years: Vec<i32> = sorted.iter().map(|p| p.year).collect();
    let populations: Vec<f64> = sorted.iter().map(|p| p.population).collect();

    let rates = growth_rates(category, &years, &populations, config.zero_population_policy)?;

    let mean_growth = if rates.is_empty() {
        config.fallback_mean_growth
    } else {
        rates.iter().sum::<f64>() / rates.len() as f64
    };
    let std_growth = if rates.len() >= 2 {
        population_std(&rates, mean_growth)
    } else {
        config.fallback_std_growth
    };

    Ok(Some(HistoricalStats {
        category: category.to_string(),
        current_population: *populations.last().unwrap_or(&0.0),
        current_year: *years.last().unwrap_or(&0),
        n_years: years.len(),
        years,
        populations,
        mean_growth,
        std_growth,
    }))
}

/// Population standard deviation (ddof = 0).
pub(crate) fn population_std(values: &[f64], mean: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    if variance.is_finite() && variance >= 0.0 {
        variance.sqrt()
    } else {
        0.0
    }
}
