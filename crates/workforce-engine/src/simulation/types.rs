//! Simulation ensemble types.

/// The trajectory ensemble for one category's projection.
///
/// `trajectories` is `n_simulations × (years_to_predict + 1)` with column 0
/// fixed at the current population; `growth_rates` is the clipped
/// `n_simulations × years_to_predict` sample matrix, retained for
/// inspection and export.
#[derive(Debug, Clone)]
pub struct SimulationEnsemble {
    pub trajectories: Vec<Vec<f64>>,
    pub growth_rates: Vec<Vec<f64>>,
    pub current_population: f64,
    pub years_to_predict: usize,
}

impl SimulationEnsemble {
    pub fn n_simulations(&self) -> usize {
        self.trajectories.len()
    }

    /// (rows, columns) of the trajectory matrix.
    pub fn shape(&self) -> (usize, usize) {
        (
            self.trajectories.len(),
            self.trajectories.first().map_or(0, Vec::len),
        )
    }

    /// Terminal-year value of every trajectory.
    pub fn terminal_values(&self) -> Vec<f64> {
        self.trajectories
            .iter()
            .filter_map(|row| row.last().copied())
            .collect()
    }
}
