//! Predictor facade: validation, stats caching, and the single/batch
//! prediction entry points.

use std::sync::Arc;

use tracing::info;

use workforce_core::config::EngineConfig;
use workforce_core::errors::{DataError, EngineResult, ValidationError};
use workforce_core::types::{
    AggregatedSeries, BatchRequest, DatasetSummary, HistoricalStats, PredictionRequest,
    PredictionSummary, RawRecord,
};

use crate::aggregation;
use crate::batch::{self, BatchOutcome, BatchParameters};
use crate::cache::StatsCache;
use crate::simulation::sampler;
use crate::simulation::{summarize, MonteCarloProjector};
use crate::stats::historical_stats;

/// The projection engine facade.
///
/// Owns the aggregated series (read-only after construction or `reload`)
/// and a version-stamped stats cache; the projector itself stays
/// stateless, so concurrent `predict` calls are safe.
pub struct Predictor {
    series: AggregatedSeries,
    config: EngineConfig,
    cache: StatsCache,
}

impl Predictor {
    pub fn new(series: AggregatedSeries, config: EngineConfig) -> Self {
        Self {
            series,
            config,
            cache: StatsCache::new(),
        }
    }

    /// Build a predictor straight from raw records.
    pub fn from_records(records: &[RawRecord], config: EngineConfig) -> Self {
        Self::new(aggregation::aggregate_raw(records), config)
    }

    pub fn series(&self) -> &AggregatedSeries {
        &self.series
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn cache(&self) -> &StatsCache {
        &self.cache
    }

    /// Replace the aggregated series and invalidate cached statistics.
    pub fn reload(&mut self, series: AggregatedSeries) {
        info!(
            points = series.len(),
            version = format_args!("{:016x}", series.version()),
            "reloading aggregated series"
        );
        self.series = series;
        self.cache.invalidate_all();
    }

    /// Request with this engine's configured defaults.
    pub fn default_request(&self, job_type: impl Into<String>) -> PredictionRequest {
        PredictionRequest {
            job_type: job_type.into(),
            target_year: self.config.default_target_year,
            n_simulations: self.config.default_simulations,
            confidence_level: self.config.default_confidence_level,
        }
    }

    /// Dataset summary for the host application's reporting surface.
    pub fn summary(&self) -> DatasetSummary {
        self.series.summary(self.config.batch_top_n)
    }

    /// Historical statistics for one category, cached per series version.
    pub fn stats_for(&self, job_type: &str) -> EngineResult<Arc<HistoricalStats>> {
        let version = self.series.version();
        if let Some(stats) = self.cache.get(job_type, version) {
            return Ok(stats);
        }

        if self.series.is_empty() {
            return Err(DataError::EmptySeries.into());
        }
        let points = self.series.category_points(job_type);
        if points.is_empty() {
            return Err(DataError::UnknownCategory {
                category: job_type.to_string(),
            }
            .into());
        }

        let stats = historical_stats(job_type, &points, &self.config)?.ok_or_else(|| {
            DataError::InsufficientHistory {
                category: job_type.to_string(),
                n_years: points.len(),
            }
        })?;

        let stats = Arc::new(stats);
        self.cache.insert(job_type, version, Arc::clone(&stats));
        Ok(stats)
    }

    /// Run one Monte Carlo prediction with a non-deterministic seed.
    pub fn predict(&self, request: &PredictionRequest) -> EngineResult<PredictionSummary> {
        self.predict_with_seed(request, None)
    }

    /// Run one Monte Carlo prediction; a `Some` seed makes the result
    /// reproducible.
    pub fn predict_with_seed(
        &self,
        request: &PredictionRequest,
        seed: Option<u64>,
    ) -> EngineResult<PredictionSummary> {
        if request.job_type.trim().is_empty() {
            return Err(ValidationError::MissingJobType.into());
        }
        if !(request.confidence_level > 0.0 && request.confidence_level < 1.0) {
            return Err(ValidationError::ConfidenceLevelOutOfRange {
                value: request.confidence_level,
            }
            .into());
        }
        if request.n_simulations == 0 {
            return Err(ValidationError::InvalidSimulationCount.into());
        }

        let stats = self.stats_for(&request.job_type)?;

        info!(
            job_type = %request.job_type,
            target_year = request.target_year,
            n_simulations = request.n_simulations,
            "running prediction"
        );

        let mut projector = MonteCarloProjector::new(request.n_simulations);
        if let Some(seed) = seed {
            projector = projector.with_seed(seed);
        }
        let ensemble = projector.project(&stats, request.target_year)?;

        summarize(
            &request.job_type,
            &ensemble,
            request.target_year,
            stats.current_year,
            request.confidence_level,
        )
    }

    /// Run a batch prediction with a non-deterministic base seed.
    pub fn batch(&self, request: &BatchRequest) -> BatchOutcome {
        self.batch_with_seed(request, None)
    }

    /// Run a batch prediction across categories.
    ///
    /// An empty `job_types` list substitutes the top-N categories of the
    /// latest year (N from config). Per-category seeds derive from the
    /// base seed, so seeded batches are reproducible even though the
    /// categories run in parallel.
    pub fn batch_with_seed(&self, request: &BatchRequest, seed: Option<u64>) -> BatchOutcome {
        let job_types = if request.job_types.is_empty() {
            self.series.top_categories(self.config.batch_top_n)
        } else {
            request.job_types.clone()
        };

        let base_seed = seed.unwrap_or_else(|| sampler::entropy_seed("batch"));

        info!(
            categories = job_types.len(),
            target_year = request.target_year,
            n_simulations = request.n_simulations,
            "running batch prediction"
        );

        let (results, skipped) = batch::run(&job_types, |job_type| {
            let per_category = PredictionRequest {
                job_type: job_type.to_string(),
                target_year: request.target_year,
                n_simulations: request.n_simulations,
                confidence_level: request.confidence_level,
            };
            self.predict_with_seed(&per_category, Some(sampler::derive_seed(base_seed, job_type)))
        });

        let parameters = BatchParameters {
            target_year: request.target_year,
            n_simulations: request.n_simulations,
            confidence_level: request.confidence_level,
            total_predictions: results.len(),
        };

        BatchOutcome {
            results,
            skipped,
            parameters,
        }
    }
}
