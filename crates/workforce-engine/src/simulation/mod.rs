//! Monte Carlo projection: seedable growth sampling, trajectory
//! compounding, and ensemble summarization.

pub mod projector;
pub mod sampler;
pub mod summary;
pub mod types;

pub use projector::MonteCarloProjector;
pub use sampler::GrowthSampler;
pub use summary::summarize;
pub use types::SimulationEnsemble;
