//! Core types, errors, config, tracing, and constants for the Workforce
//! projection engine.
//!
//! Everything here is engine-agnostic: the data model shared between the
//! aggregation pipeline and the Monte Carlo projector, the error taxonomy,
//! and the ambient wiring (tracing setup, TOML config).

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;

pub use config::{EngineConfig, ZeroPopulationPolicy};
pub use errors::{EngineError, EngineResult};
