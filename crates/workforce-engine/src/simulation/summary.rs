//! Ensemble summarization: point estimates, percentile confidence
//! interval, and CAGR.

use workforce_core::errors::{ComputationError, EngineResult, ValidationError};
use workforce_core::types::PredictionSummary;

use crate::stats::growth::population_std;

use super::types::SimulationEnsemble;

/// Reduce a trajectory ensemble to its prediction summary.
///
/// The confidence interval is the two-sided empirical percentile interval
/// of the terminal-value distribution; `ci_lower ≤ median ≤ ci_upper`
/// holds by construction of percentile computation on the sorted sample.
pub fn summarize(
    job_type: &str,
    ensemble: &SimulationEnsemble,
    target_year: i32,
    current_year: i32,
    confidence_level: f64,
) -> EngineResult<PredictionSummary> {
    if !(confidence_level > 0.0 && confidence_level < 1.0) {
        return Err(ValidationError::ConfidenceLevelOutOfRange {
            value: confidence_level,
        }
        .into());
    }
    if ensemble.current_population <= 0.0 {
        return Err(ComputationError::ZeroCurrentPopulation {
            category: job_type.to_string(),
        }
        .into());
    }

    let mut terminal = ensemble.terminal_values();
    if terminal.is_empty() {
        return Err(ValidationError::InvalidSimulationCount.into());
    }
    terminal.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let n = terminal.len() as f64;
    let mean = terminal.iter().sum::<f64>() / n;
    let alpha = 1.0 - confidence_level;
    let lower_pct = 50.0 * alpha;
    let upper_pct = 100.0 - 50.0 * alpha;

    let cagr =
        ((mean / ensemble.current_population).powf(1.0 / ensemble.years_to_predict as f64) - 1.0)
            * 100.0;

    Ok(PredictionSummary {
        job_type: job_type.to_string(),
        current_year,
        current_population: ensemble.current_population,
        target_year,
        n_simulations: terminal.len(),
        mean_prediction: mean,
        median_prediction: percentile(&terminal, 50.0),
        std_prediction: population_std(&terminal, mean),
        ci_lower: percentile(&terminal, lower_pct),
        ci_upper: percentile(&terminal, upper_pct),
        min_prediction: terminal.first().copied().unwrap_or(0.0),
        max_prediction: terminal.last().copied().unwrap_or(0.0),
        cagr,
    })
}

/// The p-th empirical percentile of a sorted sample, with linear
/// interpolation between adjacent order statistics.
fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let rank = (p / 100.0).clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        return sorted[lo];
    }
    let frac = rank - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}
