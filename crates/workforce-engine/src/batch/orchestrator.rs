//! Per-category fan-out with failure isolation.
//!
//! Categories run in parallel with rayon; the order-preserving collect
//! keeps successes in the same relative order as the input list.

use rayon::prelude::*;
use tracing::warn;

use workforce_core::errors::{EngineErrorCode, EngineResult};
use workforce_core::types::PredictionSummary;

use super::types::SkippedCategory;

/// Run `predict_one` for every category, isolating failures.
///
/// Returns successes in input order plus a skip record for each failed
/// category.
pub fn run<F>(job_types: &[String], predict_one: F) -> (Vec<PredictionSummary>, Vec<SkippedCategory>)
where
    F: Fn(&str) -> EngineResult<PredictionSummary> + Sync,
{
    let outcomes: Vec<(String, EngineResult<PredictionSummary>)> = job_types
        .par_iter()
        .map(|job_type| (job_type.clone(), predict_one(job_type)))
        .collect();

    let mut results = Vec::with_capacity(outcomes.len());
    let mut skipped = Vec::new();
    for (job_type, outcome) in outcomes {
        match outcome {
            Ok(summary) => results.push(summary),
            Err(e) => {
                warn!(job_type = %job_type, error = %e, "skipping category in batch");
                skipped.push(SkippedCategory {
                    job_type,
                    error_code: e.error_code().to_string(),
                    reason: e.to_string(),
                });
            }
        }
    }
    (results, skipped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use workforce_core::errors::DataError;

    fn summary_for(job_type: &str) -> PredictionSummary {
        PredictionSummary {
            job_type: job_type.to_string(),
            current_year: 2020,
            current_population: 100.0,
            target_year: 2025,
            n_simulations: 1,
            mean_prediction: 110.0,
            median_prediction: 110.0,
            std_prediction: 0.0,
            ci_lower: 110.0,
            ci_upper: 110.0,
            min_prediction: 110.0,
            max_prediction: 110.0,
            cagr: 1.9,
        }
    }

    #[test]
    fn test_failures_become_skips_and_order_is_preserved() {
        let job_types: Vec<String> =
            ["A", "Bad", "C", "D"].iter().map(|s| s.to_string()).collect();
        let (results, skipped) = run(&job_types, |jt| {
            if jt == "Bad" {
                Err(DataError::UnknownCategory {
                    category: jt.to_string(),
                }
                .into())
            } else {
                Ok(summary_for(jt))
            }
        });

        let order: Vec<&str> = results.iter().map(|r| r.job_type.as_str()).collect();
        assert_eq!(order, vec!["A", "C", "D"]);
        assert_eq!(skipped.len(), 1);
        assert_eq!(skipped[0].job_type, "Bad");
        assert_eq!(skipped[0].error_code, "DATA_ERROR");
    }

    #[test]
    fn test_empty_input_is_empty_outcome() {
        let (results, skipped) = run(&[], |jt| Ok(summary_for(jt)));
        assert!(results.is_empty());
        assert!(skipped.is_empty());
    }
}
