//! Pile Viewer - plots and animates the response of a simulated pile
//!
//! Runs the external pile dynamics executable, reads the pile length from its
//! input file and the nodal displacement, velocity and acceleration tables it
//! writes, then shows them in a viewer window or exports them as images.

pub mod charts;
pub mod cli;
pub mod config;
pub mod data;
pub mod gui;
pub mod pipeline;
pub mod runner;

pub use config::{OutputPaths, SimulationConfig};
pub use pipeline::{prepare, prepare_with, PipelineError, PreparedRun};
