//! Monte Carlo trajectory projection.

use tracing::debug;

use workforce_core::errors::{EngineResult, ValidationError};
use workforce_core::types::HistoricalStats;

use super::sampler::{self, GrowthSampler};
use super::types::SimulationEnsemble;

/// Stateless Monte Carlo projector for one category.
///
/// A pure function of (stats, parameters, seed): per-category statistics
/// are an explicit input, never cached inside the projector, so concurrent
/// use across requests is safe by construction.
pub struct MonteCarloProjector {
    n_simulations: usize,
    /// Random seed for reproducibility (None = non-deterministic).
    seed: Option<u64>,
}

impl MonteCarloProjector {
    pub fn new(n_simulations: usize) -> Self {
        Self {
            n_simulations,
            seed: None,
        }
    }

    /// Set a deterministic seed for reproducible results.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Simulate the trajectory ensemble out to `target_year`.
    ///
    /// Column 0 of every trajectory is the current population; each
    /// subsequent column compounds a freshly sampled, clipped growth rate.
    /// Rows are mutually independent.
    pub fn project(
        &self,
        stats: &HistoricalStats,
        target_year: i32,
    ) -> EngineResult<SimulationEnsemble> {
        if self.n_simulations == 0 {
            return Err(ValidationError::InvalidSimulationCount.into());
        }
        if target_year <= stats.current_year {
            return Err(ValidationError::TargetYearNotAhead {
                target_year,
                current_year: stats.current_year,
            }
            .into());
        }

        let years_to_predict = (target_year - stats.current_year) as usize;
        let seed = self
            .seed
            .unwrap_or_else(|| sampler::entropy_seed(&stats.category));

        debug!(
            category = %stats.category,
            n_simulations = self.n_simulations,
            years_to_predict,
            seed,
            "projecting trajectories"
        );

        let mut sampler = GrowthSampler::new(stats.mean_growth, stats.std_growth, seed);

        let mut growth_rates = Vec::with_capacity(self.n_simulations);
        let mut trajectories = Vec::with_capacity(self.n_simulations);
        for _ in 0..self.n_simulations {
            let rates: Vec<f64> = (0..years_to_predict)
                .map(|_| sampler.sample_clipped())
                .collect();

            let mut trajectory = Vec::with_capacity(years_to_predict + 1);
            trajectory.push(stats.current_population);
            for t in 0..years_to_predict {
                trajectory.push(trajectory[t] * (1.0 + rates[t]));
            }

            growth_rates.push(rates);
            trajectories.push(trajectory);
        }

        Ok(SimulationEnsemble {
            trajectories,
            growth_rates,
            current_population: stats.current_population,
            years_to_predict,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn petani_stats(mean_growth: f64, std_growth: f64) -> HistoricalStats {
        HistoricalStats {
            category: "Petani".to_string(),
            years: vec![2018, 2019, 2020],
            populations: vec![100.0, 110.0, 121.0],
            current_population: 121.0,
            current_year: 2020,
            mean_growth,
            std_growth,
            n_years: 3,
        }
    }

    #[test]
    fn test_ensemble_shape_and_initial_column() {
        let stats = petani_stats(0.1, 0.05);
        let ensemble = MonteCarloProjector::new(50)
            .with_seed(42)
            .project(&stats, 2025)
            .unwrap();

        assert_eq!(ensemble.shape(), (50, 6));
        for row in &ensemble.growth_rates {
            assert_eq!(row.len(), 5);
        }
        for row in &ensemble.trajectories {
            assert_eq!(row[0], 121.0);
        }
    }

    #[test]
    fn test_deterministic_compounding_with_zero_std() {
        let stats = petani_stats(0.1, 0.0);
        let ensemble = MonteCarloProjector::new(1)
            .with_seed(99)
            .project(&stats, 2022)
            .unwrap();

        let terminal = ensemble.terminal_values();
        assert_eq!(terminal.len(), 1);
        assert!((terminal[0] - 146.41).abs() < 1e-9);
    }

    #[test]
    fn test_target_year_not_ahead_is_rejected() {
        let stats = petani_stats(0.1, 0.05);
        for target in [2020, 2019] {
            let err = MonteCarloProjector::new(10).project(&stats, target).unwrap_err();
            assert!(matches!(
                err,
                workforce_core::EngineError::Validation(ValidationError::TargetYearNotAhead { .. })
            ));
        }
    }

    #[test]
    fn test_zero_simulations_rejected() {
        let stats = petani_stats(0.1, 0.05);
        let err = MonteCarloProjector::new(0).project(&stats, 2025).unwrap_err();
        assert!(matches!(
            err,
            workforce_core::EngineError::Validation(ValidationError::InvalidSimulationCount)
        ));
    }

    #[test]
    fn test_seeded_projection_is_reproducible() {
        let stats = petani_stats(0.05, 0.1);
        let a = MonteCarloProjector::new(200).with_seed(7).project(&stats, 2026).unwrap();
        let b = MonteCarloProjector::new(200).with_seed(7).project(&stats, 2026).unwrap();
        assert_eq!(a.trajectories, b.trajectories);
        assert_eq!(a.growth_rates, b.growth_rates);
    }
}
