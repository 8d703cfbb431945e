//! Simulation Output
//! The three tables written by one simulation run.

use crate::config::OutputPaths;
use crate::data::{LoaderError, TimeSeriesLoader, TimeSeriesTable};

/// Displacement, velocity and acceleration tables of one run.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationOutput {
    displacement: TimeSeriesTable,
    velocity: TimeSeriesTable,
    acceleration: TimeSeriesTable,
}

impl SimulationOutput {
    pub fn new(
        displacement: TimeSeriesTable,
        velocity: TimeSeriesTable,
        acceleration: TimeSeriesTable,
    ) -> Self {
        let steps = displacement.time_steps();
        if velocity.time_steps() != steps || acceleration.time_steps() != steps {
            log::warn!(
                "Output tables disagree on time steps: displacement {}, velocity {}, acceleration {}",
                steps,
                velocity.time_steps(),
                acceleration.time_steps()
            );
        }

        Self {
            displacement,
            velocity,
            acceleration,
        }
    }

    /// Load all three tables.
    pub fn load(paths: &OutputPaths) -> Result<Self, LoaderError> {
        Ok(Self::new(
            TimeSeriesLoader::load_csv(&paths.displacement)?,
            TimeSeriesLoader::load_csv(&paths.velocity)?,
            TimeSeriesLoader::load_csv(&paths.acceleration)?,
        ))
    }

    /// Shared time column, taken from the displacement table.
    pub fn time(&self) -> &[f64] {
        self.displacement.time()
    }

    pub fn displacement(&self) -> &TimeSeriesTable {
        &self.displacement
    }

    pub fn velocity(&self) -> &TimeSeriesTable {
        &self.velocity
    }

    pub fn acceleration(&self) -> &TimeSeriesTable {
        &self.acceleration
    }

    pub fn node_count(&self) -> usize {
        self.displacement.node_count()
    }

    pub fn time_steps(&self) -> usize {
        self.displacement.time_steps()
    }

    pub fn into_displacement(self) -> TimeSeriesTable {
        self.displacement
    }
}
