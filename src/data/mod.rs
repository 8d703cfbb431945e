//! Data module - input file parsing and CSV loading

mod input;
mod loader;
mod output;

pub use input::{InputError, InputReader, LENGTH_PREFIX};
pub use loader::{LoaderError, TimeSeriesLoader, TimeSeriesTable};
pub use output::SimulationOutput;
