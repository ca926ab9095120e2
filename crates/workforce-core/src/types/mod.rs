//! Data model shared across the engine.
//! Raw records, the aggregated series, per-category statistics, and the
//! prediction request/summary contract.

pub mod collections;
pub mod prediction;
pub mod series;
pub mod stats;

pub use collections::{FxHashMap, FxHashSet};
pub use prediction::{BatchRequest, DatasetSummary, PredictionRequest, PredictionSummary};
pub use series::{AggregatedPoint, AggregatedSeries, RawRecord};
pub use stats::HistoricalStats;
