//! Per-category growth statistics estimation.

pub mod growth;

pub use growth::{growth_rates, historical_stats};
