//! Run Pipeline
//! Simulation, pile length and output tables, in that order.

use crate::config::SimulationConfig;
use crate::data::{InputError, InputReader, LoaderError, SimulationOutput};
use crate::runner::{RunnerError, SimulationRunner};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Runner(#[from] RunnerError),
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Loader(#[from] LoaderError),
}

/// Everything the renderers need from one run.
#[derive(Debug, Clone)]
pub struct PreparedRun {
    pub pile_length: f64,
    pub output: SimulationOutput,
}

/// Run the simulation, then read its input and output files.
pub fn prepare(config: &SimulationConfig) -> Result<PreparedRun, PipelineError> {
    prepare_with(config, true)
}

/// Same as [`prepare`], optionally reusing output already on disk.
pub fn prepare_with(
    config: &SimulationConfig,
    run_simulation: bool,
) -> Result<PreparedRun, PipelineError> {
    if run_simulation {
        SimulationRunner::run(&config.executable_path, &config.input_path)?;
    } else {
        log::info!("Skipping simulation, reusing existing output");
    }

    let pile_length = InputReader::read_pile_length(&config.input_path)?;
    let output = SimulationOutput::load(&config.output_paths)?;

    log::info!(
        "Loaded {} nodes over {} time steps, pile length {} m",
        output.node_count(),
        output.time_steps(),
        pile_length
    );

    Ok(PreparedRun {
        pile_length,
        output,
    })
}
